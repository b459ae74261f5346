//! IME composition state
//!
//! While an input method is composing, the in-progress text lives in one or
//! more conversion areas. Each owns a small text buffer that the renderer
//! draws as an overlay on top of the viewport.

use serde::{Deserialize, Serialize};

use super::cell::TextAttribute;
use super::geometry::Point;
use super::text_buffer::TextBuffer;

/// Aggregate input method status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImeStatus {
    /// Whether an input method is open for this session
    pub open: bool,
    /// Conversion mode text shown in the status line (e.g. "Hiragana")
    pub mode_text: String,
    /// Number of conversion candidates currently offered
    pub candidate_count: usize,
}

/// One composition overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionArea {
    buffer: TextBuffer,
    /// Viewport-relative position the overlay is drawn at
    pub origin: Point,
}

impl ConversionArea {
    pub fn new(buffer: TextBuffer, origin: Point) -> Self {
        Self { buffer, origin }
    }

    pub fn text_buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text_buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }
}

/// IME state of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImeInfo {
    pub status: ImeStatus,
    areas: Vec<ConversionArea>,
}

impl ImeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active composition areas
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn area(&self, index: usize) -> Option<&ConversionArea> {
        self.areas.get(index)
    }

    /// Add a single-row composition area holding `text`, `cols` cells wide.
    /// Returns the new area's index.
    pub fn push_composition(
        &mut self,
        text: &str,
        cols: usize,
        attr: TextAttribute,
        origin: Point,
    ) -> usize {
        let mut buffer = TextBuffer::new(cols, 1, attr);
        buffer.write_str(text, attr);
        self.areas.push(ConversionArea::new(buffer, origin));
        self.areas.len() - 1
    }

    /// Drop every composition area (composition committed or cancelled)
    pub fn clear_compositions(&mut self) {
        self.areas.clear();
    }
}
