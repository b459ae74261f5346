//! Cursor state
//!
//! The cursor tracks position, raw size, the three flags that together
//! decide visibility, and the shape and color the renderer draws it with.

use serde::{Deserialize, Serialize};

use super::cell::Rgb;

/// Default cursor size, in percent of the cell height
pub const DEFAULT_CURSOR_SIZE: u32 = 25;

/// Largest cursor size, in percent of the cell height
pub const MAX_CURSOR_SIZE: u32 = 100;

/// Cursor shape/style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorShape {
    /// Underline whose thickness follows the cursor size
    #[default]
    Legacy,
    /// Vertical bar cursor
    Bar,
    /// Thin underline cursor
    Underline,
    /// Outlined rectangle
    EmptyBlock,
    /// Filled rectangle
    Block,
}

/// Color the cursor is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorColor {
    /// Draw by inverting whatever is underneath
    #[default]
    Invert,
    /// Fill with a fixed color
    Rgb(Rgb),
}

impl CursorColor {
    pub fn is_invert(&self) -> bool {
        matches!(self, CursorColor::Invert)
    }
}

/// Cursor state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position (0-indexed, buffer relative)
    pub col: usize,
    /// Row position (0-indexed, buffer relative)
    pub row: usize,
    /// Raw size in percent of the cell height (0-100)
    size: u32,
    /// Whether the cursor is visible at all
    pub visible: bool,
    /// Blink phase: true while the cursor is in its "on" half
    pub on: bool,
    /// Set while a popup overlay owns the cursor
    pub popup_shown: bool,
    /// Overwrite mode doubles (or halves) the drawn height
    pub double: bool,
    pub shape: CursorShape,
    pub color: CursorColor,
    /// The last column was just filled; the next glyph wraps first
    pub pending_wrap: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            col: 0,
            row: 0,
            size: DEFAULT_CURSOR_SIZE,
            visible: true,
            on: true,
            popup_shown: false,
            double: false,
            shape: CursorShape::Legacy,
            color: CursorColor::Invert,
            pending_wrap: false,
        }
    }
}

impl Cursor {
    /// Create a new cursor at the home position
    pub fn new() -> Self {
        Self::default()
    }

    /// Move cursor to absolute position, clamping to bounds
    pub fn move_to(&mut self, col: usize, row: usize, cols: usize, rows: usize) {
        self.col = col.min(cols.saturating_sub(1));
        self.row = row.min(rows.saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Raw size in percent
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set the raw size, clamped to 0-100
    pub fn set_size(&mut self, size: u32) {
        self.size = size.min(MAX_CURSOR_SIZE);
    }

    /// Flip the blink phase
    pub fn toggle_on(&mut self) {
        self.on = !self.on;
    }
}
