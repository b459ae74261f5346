//! Buffer cells and text attributes
//!
//! A cell holds one glyph together with the attribute used to draw it.
//! Double-width glyphs occupy two cells: a leading half carrying the
//! content and an empty trailing half.

use serde::{Deserialize, Serialize};

/// A concrete 24-bit color as handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Color of an attribute: the session default, a palette index, or a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    /// Default session color (foreground or background)
    #[default]
    Default,
    /// Index into the color table
    Indexed(u8),
    /// 24-bit RGB color
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Indexed(0);
    pub const BLUE: Color = Color::Indexed(1);
    pub const GREEN: Color = Color::Indexed(2);
    pub const CYAN: Color = Color::Indexed(3);
    pub const RED: Color = Color::Indexed(4);
    pub const MAGENTA: Color = Color::Indexed(5);
    pub const YELLOW: Color = Color::Indexed(6);
    pub const WHITE: Color = Color::Indexed(7);

    /// Convert a 256-color index to RGB using the xterm cube and ramp.
    ///
    /// Only consulted for indices past the end of the session color table.
    pub fn indexed_to_rgb(index: u8) -> Rgb {
        match index {
            0..=15 => {
                // Low indices are normally served by the color table; keep the
                // console ordering (blue and red swapped relative to ANSI).
                const LEGACY: [(u8, u8, u8); 16] = [
                    (12, 12, 12),
                    (0, 55, 218),
                    (19, 161, 14),
                    (58, 150, 221),
                    (197, 15, 31),
                    (136, 23, 152),
                    (193, 156, 0),
                    (204, 204, 204),
                    (118, 118, 118),
                    (59, 120, 255),
                    (22, 198, 12),
                    (97, 214, 214),
                    (231, 72, 86),
                    (180, 0, 158),
                    (249, 241, 165),
                    (242, 242, 242),
                ];
                LEGACY[index as usize].into()
            }
            // 216 color cube (16-231)
            16..=231 => {
                let n = index - 16;
                let r = n / 36;
                let g = (n % 36) / 6;
                let b = n % 6;
                let to_rgb = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
                Rgb::new(to_rgb(r), to_rgb(g), to_rgb(b))
            }
            // Grayscale (232-255)
            232..=255 => {
                let gray = 8 + (index - 232) * 10;
                Rgb::new(gray, gray, gray)
            }
        }
    }
}

/// Rendition flags of an attribute
///
/// The grid flags are the line-drawing bits of the legacy attribute word.
/// Whether they may be drawn at all is decided per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub bold: bool,
    pub underscore: bool,
    pub reverse_video: bool,
    pub grid_horizontal: bool,
    pub grid_left_vertical: bool,
    pub grid_right_vertical: bool,
}

/// Legacy attribute word bits
pub mod legacy {
    pub const FOREGROUND_MASK: u16 = 0x000F;
    pub const BACKGROUND_MASK: u16 = 0x00F0;
    pub const GRID_HORIZONTAL: u16 = 0x0400;
    pub const GRID_LVERTICAL: u16 = 0x0800;
    pub const GRID_RVERTICAL: u16 = 0x1000;
    pub const REVERSE_VIDEO: u16 = 0x4000;
    pub const UNDERSCORE: u16 = 0x8000;
}

/// Per-cell style descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAttribute {
    pub fg: Color,
    pub bg: Color,
    pub style: Style,
}

impl TextAttribute {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            style: Style::default(),
        }
    }

    /// Decode a legacy 16-bit attribute word
    pub fn from_legacy(word: u16) -> Self {
        Self {
            fg: Color::Indexed((word & legacy::FOREGROUND_MASK) as u8),
            bg: Color::Indexed(((word & legacy::BACKGROUND_MASK) >> 4) as u8),
            style: Style {
                bold: false,
                underscore: word & legacy::UNDERSCORE != 0,
                reverse_video: word & legacy::REVERSE_VIDEO != 0,
                grid_horizontal: word & legacy::GRID_HORIZONTAL != 0,
                grid_left_vertical: word & legacy::GRID_LVERTICAL != 0,
                grid_right_vertical: word & legacy::GRID_RVERTICAL != 0,
            },
        }
    }

    /// Encode as a legacy attribute word.
    ///
    /// Returns `None` when either color cannot be expressed as a 16-color index.
    pub fn to_legacy(&self) -> Option<u16> {
        let fg = match self.fg {
            Color::Indexed(i) if i < 16 => i as u16,
            _ => return None,
        };
        let bg = match self.bg {
            Color::Indexed(i) if i < 16 => i as u16,
            _ => return None,
        };
        let mut word = fg | (bg << 4);
        let flags = [
            (self.style.underscore, legacy::UNDERSCORE),
            (self.style.reverse_video, legacy::REVERSE_VIDEO),
            (self.style.grid_horizontal, legacy::GRID_HORIZONTAL),
            (self.style.grid_left_vertical, legacy::GRID_LVERTICAL),
            (self.style.grid_right_vertical, legacy::GRID_RVERTICAL),
        ];
        for (set, bit) in flags {
            if set {
                word |= bit;
            }
        }
        Some(word)
    }

    /// Check if any grid line bit is set
    pub fn has_grid_lines(&self) -> bool {
        self.style.grid_horizontal
            || self.style.grid_left_vertical
            || self.style.grid_right_vertical
    }

    pub fn is_reverse_video(&self) -> bool {
        self.style.reverse_video
    }
}

/// Which half of a glyph a cell holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellWidth {
    #[default]
    Single,
    /// First cell of a double-width glyph
    Leading,
    /// Second cell of a double-width glyph (no content)
    Trailing,
}

/// A single cell in the text buffer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// The character(s) in this cell. Empty for blank and trailing cells.
    pub content: String,
    pub attr: TextAttribute,
    pub width: CellWidth,
}

impl Cell {
    /// Create a new cell with a single character
    pub fn new(c: char) -> Self {
        Self {
            content: c.to_string(),
            ..Default::default()
        }
    }

    /// Create a blank cell painted with the given attribute
    pub fn blank(attr: TextAttribute) -> Self {
        Self {
            content: String::new(),
            attr,
            width: CellWidth::Single,
        }
    }

    /// Check if this cell is empty (no content)
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if this cell is either half of a double-width glyph
    pub fn is_double_width(&self) -> bool {
        self.width != CellWidth::Single
    }

    /// Clear the cell to a blank painted with `attr`
    pub fn erase(&mut self, attr: TextAttribute) {
        self.content.clear();
        self.attr = attr;
        self.width = CellWidth::Single;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert!(!cell.is_double_width());
        assert_eq!(cell.attr.fg, Color::Default);
    }

    #[test]
    fn test_cell_erase() {
        let mut cell = Cell::new('A');
        cell.width = CellWidth::Leading;
        cell.erase(TextAttribute::new(Color::RED, Color::BLUE));
        assert!(cell.is_empty());
        assert_eq!(cell.width, CellWidth::Single);
        assert_eq!(cell.attr.bg, Color::BLUE);
    }

    #[test]
    fn test_color_indexed_to_rgb() {
        assert_eq!(Color::indexed_to_rgb(16), Rgb::new(0, 0, 0));
        assert_eq!(Color::indexed_to_rgb(231), Rgb::new(255, 255, 255));
        assert_eq!(Color::indexed_to_rgb(232), Rgb::new(8, 8, 8));
        assert_eq!(Color::indexed_to_rgb(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn test_legacy_decode() {
        // Bright white on blue, grid on both sides, underscored
        let attr = TextAttribute::from_legacy(0x1F | 0x0800 | 0x1000 | 0x8000);
        assert_eq!(attr.fg, Color::Indexed(15));
        assert_eq!(attr.bg, Color::Indexed(1));
        assert!(attr.style.grid_left_vertical);
        assert!(attr.style.grid_right_vertical);
        assert!(!attr.style.grid_horizontal);
        assert!(attr.style.underscore);
        assert!(attr.has_grid_lines());
        assert!(!attr.is_reverse_video());
    }

    #[test]
    fn test_legacy_encode() {
        let word = 0x4000 | 0x0400 | 0x07;
        assert_eq!(TextAttribute::from_legacy(word).to_legacy(), Some(word));

        let rgb = TextAttribute::new(Color::Rgb(1, 2, 3), Color::BLACK);
        assert_eq!(rgb.to_legacy(), None);
        assert_eq!(TextAttribute::default().to_legacy(), None);
    }
}
