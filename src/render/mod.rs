//! Render data facade
//!
//! The renderer observes a session only through [`RenderData`]. Queries are
//! issued on a [`RenderLock`], obtained from
//! [`RenderDataProvider::lock_console`], so every query made under one lock
//! sees the same consistent state and nothing returned can outlive it.
//!
//! ```
//! use std::sync::Arc;
//!
//! use mochi_render_data::console::Console;
//! use mochi_render_data::core::{OutputBuffer, Session, TextAttribute};
//! use mochi_render_data::render::{RenderData, RenderDataProvider};
//!
//! let session = Session::new(OutputBuffer::new(80, 300, 24, TextAttribute::default()));
//! let provider = RenderDataProvider::new(Arc::new(Console::new(session)));
//!
//! let frame = provider.lock_console();
//! let position = frame.cursor_position();
//! let visible = frame.is_cursor_visible();
//! frame.unlock_console();
//!
//! assert_eq!((position.row, position.col), (0, 0));
//! assert!(visible);
//! ```

mod policy;
mod provider;

pub use policy::{cursor_height, grid_line_drawing_allowed};
pub use provider::{RenderDataProvider, RenderLock};

use crate::core::{
    CursorColor, CursorShape, FontInfo, ImeInfo, Point, Rect, Rgb, TextAttribute, TextBuffer,
    Viewport,
};

/// Error type for render data queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderDataError {
    #[error("IME composition area {index} out of range ({count} active)")]
    OutOfRange { index: usize, count: usize },
}

/// Result type for render data queries
pub type RenderResult<T> = Result<T, RenderDataError>;

/// Read-only view of a session, as consumed by a renderer.
///
/// Implementations do not lock; callers hold the console lock for as long
/// as they use any of the results.
pub trait RenderData {
    /// The visible window onto the active buffer
    fn viewport(&self) -> &Viewport;

    /// The active buffer's full cell grid
    fn text_buffer(&self) -> &TextBuffer;

    fn font_info(&self) -> &FontInfo;

    /// Fill attributes of the active buffer
    fn default_attributes(&self) -> TextAttribute;

    /// The live color table and its length
    fn color_table(&self) -> (&[Rgb], usize);

    /// Cursor position relative to the buffer origin (not the viewport)
    fn cursor_position(&self) -> Point;

    /// True only if the cursor is visible, in its blink "on" phase and not
    /// hidden by a popup
    fn is_cursor_visible(&self) -> bool;

    /// Cursor height out of 100, adjusted for overwrite mode
    fn cursor_height(&self) -> u32;

    fn cursor_style(&self) -> CursorShape;

    /// Cursor color; [`CursorColor::Invert`] means draw by inverting the cell
    fn cursor_color(&self) -> CursorColor;

    /// True when the cursor sits on a double-width glyph and should be drawn
    /// two cells wide
    fn is_cursor_double_width(&self) -> bool;

    fn ime_data(&self) -> &ImeInfo;

    /// Text buffer of composition area `index`
    ///
    /// # Errors
    ///
    /// [`RenderDataError::OutOfRange`] if `index` is not below the number of
    /// active composition areas.
    fn ime_composition_buffer(&self, index: usize) -> RenderResult<&TextBuffer>;

    /// Highlight rectangles in buffer coordinates, one per selected row
    fn selection_rects(&self) -> Vec<Rect>;

    /// Whether grid line attribute bits may be drawn for this session
    fn is_grid_line_drawing_allowed(&self) -> bool;

    /// Window title including any mode prefix
    fn console_title(&self) -> String;

    fn foreground_color(&self, attr: &TextAttribute) -> Rgb;

    fn background_color(&self, attr: &TextAttribute) -> Rgb;
}
