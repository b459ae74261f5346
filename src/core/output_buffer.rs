//! Output buffer
//!
//! One screen of a session: its text buffer, the viewport onto it, the
//! font it is drawn with, the fill attributes and the output mode.

use bitflags::bitflags;

use super::cell::TextAttribute;
use super::font::FontInfo;
use super::geometry::{Point, Viewport};
use super::text_buffer::TextBuffer;

bitflags! {
    /// Output mode flags of an output buffer
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OutputMode: u32 {
        const PROCESSED_OUTPUT = 0x0001;
        const WRAP_AT_EOL_OUTPUT = 0x0002;
        const VIRTUAL_TERMINAL_PROCESSING = 0x0004;
        const DISABLE_NEWLINE_AUTO_RETURN = 0x0008;
        const LVB_GRID_WORLDWIDE = 0x0010;
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::PROCESSED_OUTPUT | OutputMode::WRAP_AT_EOL_OUTPUT
    }
}

/// A screen buffer with its viewport
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    text_buffer: TextBuffer,
    viewport: Viewport,
    font: FontInfo,
    attributes: TextAttribute,
    pub output_mode: OutputMode,
}

impl OutputBuffer {
    /// Create a `cols` x `rows` buffer whose viewport shows the top
    /// `view_rows` rows
    pub fn new(cols: usize, rows: usize, view_rows: usize, attributes: TextAttribute) -> Self {
        Self {
            text_buffer: TextBuffer::new(cols, rows, attributes),
            viewport: Viewport::from_dimensions(cols, view_rows.min(rows)),
            font: FontInfo::default(),
            attributes,
            output_mode: OutputMode::default(),
        }
    }

    pub fn text_buffer(&self) -> &TextBuffer {
        &self.text_buffer
    }

    pub fn text_buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.text_buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Scroll the viewport, clamped to the buffer
    pub fn set_viewport_origin(&mut self, left: usize, top: usize) {
        let (cols, rows) = (self.text_buffer.cols(), self.text_buffer.rows());
        self.viewport.scroll_to(left, top, cols, rows);
    }

    pub fn current_font(&self) -> &FontInfo {
        &self.font
    }

    pub fn set_font(&mut self, font: FontInfo) {
        self.font = font;
    }

    /// Attributes new output is written with
    pub fn attributes(&self) -> TextAttribute {
        self.attributes
    }

    pub fn set_attributes(&mut self, attributes: TextAttribute) {
        self.attributes = attributes;
    }

    pub fn is_virtual_terminal(&self) -> bool {
        self.output_mode
            .contains(OutputMode::VIRTUAL_TERMINAL_PROCESSING)
    }

    /// Write text at the cursor using the current attributes
    pub fn write_str(&mut self, text: &str) {
        let attr = self.attributes;
        self.text_buffer.write_str(text, attr);
    }

    /// Whether the cell under the cursor holds half of a wide glyph
    pub fn cursor_is_double_width(&self) -> bool {
        let cursor = self.text_buffer.cursor();
        self.text_buffer
            .is_double_width_at(Point::new(cursor.row, cursor.col))
    }
}
