//! Session Model
//!
//! The mutable state a terminal session owns and the renderer observes:
//! - Text buffers of styled cells, with the cursor that writes into them
//! - Output buffers (text buffer + viewport + font + output mode)
//! - The color table and attribute color resolution
//! - IME composition areas
//! - Selection endpoints and their highlight rectangles
//!
//! Nothing in here locks. The whole `Session` is guarded by one lock owned
//! by [`crate::console::Console`].

mod cell;
mod codepage;
mod color_table;
mod cursor;
mod font;
mod geometry;
mod ime;
mod output_buffer;
mod selection;
mod session;
mod text_buffer;

pub use cell::{legacy, Cell, CellWidth, Color, Rgb, Style, TextAttribute};
pub use codepage::CodePage;
pub use color_table::{ColorTable, LEGACY_TABLE_SIZE};
pub use cursor::{Cursor, CursorColor, CursorShape, DEFAULT_CURSOR_SIZE, MAX_CURSOR_SIZE};
pub use font::{FontFamily, FontInfo};
pub use geometry::{Point, Rect, Viewport};
pub use ime::{ConversionArea, ImeInfo, ImeStatus};
pub use output_buffer::{OutputBuffer, OutputMode};
pub use selection::{Selection, SelectionType};
pub use session::{Session, MARK_TITLE_PREFIX, SELECT_TITLE_PREFIX};
pub use text_buffer::{Row, TextBuffer};
