//! Indexed color palette of a session

use serde::{Deserialize, Serialize};

use super::cell::{Color, Rgb};

/// Number of entries in a legacy console palette
pub const LEGACY_TABLE_SIZE: usize = 16;

/// Ordered sequence of palette entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    entries: Vec<Rgb>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            entries: (0..LEGACY_TABLE_SIZE as u8)
                .map(Color::indexed_to_rgb)
                .collect(),
        }
    }
}

impl ColorTable {
    pub fn new(entries: Vec<Rgb>) -> Self {
        Self { entries }
    }

    /// The live entries
    pub fn as_slice(&self) -> &[Rgb] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.entries.get(index).copied()
    }

    /// Replace one entry. Returns false if `index` is past the end.
    pub fn set(&mut self, index: usize, rgb: Rgb) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = rgb;
                true
            }
            None => false,
        }
    }

    /// Resolve a color against this table.
    ///
    /// `Default` yields `default`; indices past the end of the table fall
    /// back to the 256-color formula.
    pub fn resolve(&self, color: Color, default: Rgb) -> Rgb {
        match color {
            Color::Default => default,
            Color::Indexed(i) => self
                .get(i as usize)
                .unwrap_or_else(|| Color::indexed_to_rgb(i)),
            Color::Rgb(r, g, b) => Rgb::new(r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ColorTable::default();
        assert_eq!(table.len(), LEGACY_TABLE_SIZE);
        assert_eq!(table.get(0), Some(Rgb::new(12, 12, 12)));
        assert_eq!(table.get(16), None);
    }

    #[test]
    fn test_set_entry() {
        let mut table = ColorTable::default();
        assert!(table.set(3, Rgb::new(1, 2, 3)));
        assert_eq!(table.as_slice()[3], Rgb::new(1, 2, 3));
        assert!(!table.set(16, Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_resolve() {
        let mut table = ColorTable::default();
        table.set(1, Rgb::new(0, 0, 128));
        let fallback = Rgb::new(9, 9, 9);

        assert_eq!(table.resolve(Color::Default, fallback), fallback);
        assert_eq!(table.resolve(Color::Indexed(1), fallback), Rgb::new(0, 0, 128));
        assert_eq!(table.resolve(Color::Indexed(232), fallback), Rgb::new(8, 8, 8));
        assert_eq!(table.resolve(Color::Rgb(4, 5, 6), fallback), Rgb::new(4, 5, 6));
    }
}
