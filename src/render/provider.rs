//! Render data provider
//!
//! Holds the session handle and hands out [`RenderLock`]s. Every query is
//! answered from the locked session; only the cursor height and the grid
//! line decision are computed here rather than forwarded.

use std::sync::Arc;

use parking_lot::FairMutexGuard;

use super::policy;
use super::{RenderData, RenderDataError, RenderResult};
use crate::console::Console;
use crate::core::{
    CursorColor, CursorShape, FontInfo, ImeInfo, OutputBuffer, Point, Rect, Rgb, Session,
    TextAttribute, TextBuffer, Viewport,
};

/// Stateless facade over one session
#[derive(Debug, Clone)]
pub struct RenderDataProvider {
    console: Arc<Console>,
}

impl RenderDataProvider {
    pub fn new(console: Arc<Console>) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &Arc<Console> {
        &self.console
    }

    /// Acquire the console lock for a batch of queries.
    ///
    /// Blocks until the lock is available. The lock is released by
    /// [`RenderLock::unlock_console`] or by dropping the guard.
    pub fn lock_console(&self) -> RenderLock<'_> {
        let guard = self.console.lock();
        tracing::trace!("console locked for rendering");
        RenderLock { guard }
    }
}

/// The console lock, held by the renderer, with the session it protects
pub struct RenderLock<'a> {
    guard: FairMutexGuard<'a, Session>,
}

impl RenderLock<'_> {
    /// Release the console lock
    pub fn unlock_console(self) {
        drop(self);
    }

    fn session(&self) -> &Session {
        &self.guard
    }

    fn active(&self) -> &OutputBuffer {
        self.guard.active_output_buffer()
    }
}

impl Drop for RenderLock<'_> {
    fn drop(&mut self) {
        tracing::trace!("console unlocked");
    }
}

impl RenderData for RenderLock<'_> {
    fn viewport(&self) -> &Viewport {
        self.active().viewport()
    }

    fn text_buffer(&self) -> &TextBuffer {
        self.active().text_buffer()
    }

    fn font_info(&self) -> &FontInfo {
        self.active().current_font()
    }

    fn default_attributes(&self) -> TextAttribute {
        self.active().attributes()
    }

    fn color_table(&self) -> (&[Rgb], usize) {
        let table = self.session().color_table();
        (table.as_slice(), table.len())
    }

    fn cursor_position(&self) -> Point {
        let cursor = self.text_buffer().cursor();
        Point::new(cursor.row, cursor.col)
    }

    fn is_cursor_visible(&self) -> bool {
        let cursor = self.text_buffer().cursor();
        cursor.visible && cursor.on && !cursor.popup_shown
    }

    fn cursor_height(&self) -> u32 {
        let cursor = self.text_buffer().cursor();
        policy::cursor_height(cursor.size(), cursor.double)
    }

    fn cursor_style(&self) -> CursorShape {
        self.text_buffer().cursor().shape
    }

    fn cursor_color(&self) -> CursorColor {
        self.text_buffer().cursor().color
    }

    fn is_cursor_double_width(&self) -> bool {
        self.active().cursor_is_double_width()
    }

    fn ime_data(&self) -> &ImeInfo {
        self.session().ime()
    }

    fn ime_composition_buffer(&self, index: usize) -> RenderResult<&TextBuffer> {
        let ime = self.session().ime();
        match ime.area(index) {
            Some(area) => Ok(area.text_buffer()),
            None => {
                let count = ime.area_count();
                tracing::debug!(index, count, "IME composition area out of range");
                Err(RenderDataError::OutOfRange { index, count })
            }
        }
    }

    fn selection_rects(&self) -> Vec<Rect> {
        self.session().selection_rects()
    }

    fn is_grid_line_drawing_allowed(&self) -> bool {
        let session = self.session();
        policy::grid_line_drawing_allowed(
            self.active().output_mode,
            session.is_grid_rendering_allowed_worldwide(),
            session.output_cp,
        )
    }

    fn console_title(&self) -> String {
        self.session().title_and_prefix()
    }

    fn foreground_color(&self, attr: &TextAttribute) -> Rgb {
        self.session().lookup_foreground_color(attr)
    }

    fn background_color(&self, attr: &TextAttribute) -> Rgb {
        self.session().lookup_background_color(attr)
    }
}
