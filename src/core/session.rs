//! Session state
//!
//! Everything a terminal session owns that the renderer may observe: the
//! main and alternate output buffers, the palette, the code page, the
//! title, IME state and the current selection.

use super::cell::{Color, Rgb, TextAttribute};
use super::codepage::CodePage;
use super::color_table::ColorTable;
use super::geometry::{Point, Rect};
use super::ime::ImeInfo;
use super::output_buffer::OutputBuffer;
use super::selection::Selection;

/// Title prefix while a mouse selection is in progress
pub const SELECT_TITLE_PREFIX: &str = "Select ";

/// Title prefix while keyboard mark mode is active
pub const MARK_TITLE_PREFIX: &str = "Mark ";

/// Palette entries the default colors fall back to
const DEFAULT_FOREGROUND_INDEX: usize = 7;
const DEFAULT_BACKGROUND_INDEX: usize = 0;

/// One terminal's live mutable state
#[derive(Debug, Clone)]
pub struct Session {
    main: OutputBuffer,
    alternate: Option<OutputBuffer>,
    color_table: ColorTable,
    pub output_cp: CodePage,
    grid_worldwide: bool,
    title: String,
    title_prefix: String,
    default_foreground: Option<Rgb>,
    default_background: Option<Rgb>,
    ime: ImeInfo,
    selection: Option<Selection>,
}

impl Session {
    pub fn new(main: OutputBuffer) -> Self {
        Self {
            main,
            alternate: None,
            color_table: ColorTable::default(),
            output_cp: CodePage::default(),
            grid_worldwide: false,
            title: String::new(),
            title_prefix: String::new(),
            default_foreground: None,
            default_background: None,
            ime: ImeInfo::new(),
            selection: None,
        }
    }

    /// The buffer currently shown: the alternate one if active, else main
    pub fn active_output_buffer(&self) -> &OutputBuffer {
        self.alternate.as_ref().unwrap_or(&self.main)
    }

    pub fn active_output_buffer_mut(&mut self) -> &mut OutputBuffer {
        self.alternate.as_mut().unwrap_or(&mut self.main)
    }

    pub fn is_alternate_active(&self) -> bool {
        self.alternate.is_some()
    }

    /// Switch to a fresh alternate buffer the size of the main viewport
    pub fn use_alternate_buffer(&mut self) {
        if self.alternate.is_some() {
            return;
        }
        let viewport = *self.main.viewport();
        let mut alternate = OutputBuffer::new(
            viewport.width(),
            viewport.height(),
            viewport.height(),
            self.main.attributes(),
        );
        alternate.output_mode = self.main.output_mode;
        alternate.set_font(self.main.current_font().clone());
        self.alternate = Some(alternate);
        // Endpoints would point into a different buffer
        self.clear_selection();
        tracing::debug!("switched to alternate buffer");
    }

    /// Drop the alternate buffer and show main again
    pub fn use_main_buffer(&mut self) {
        if self.alternate.take().is_some() {
            self.clear_selection();
            tracing::debug!("switched to main buffer");
        }
    }

    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    pub fn color_table_mut(&mut self) -> &mut ColorTable {
        &mut self.color_table
    }

    pub fn set_color_table(&mut self, table: ColorTable) {
        self.color_table = table;
    }

    /// Whether grid lines were explicitly allowed outside DBCS code pages
    pub fn is_grid_rendering_allowed_worldwide(&self) -> bool {
        self.grid_worldwide
    }

    pub fn set_grid_rendering_allowed_worldwide(&mut self, allowed: bool) {
        self.grid_worldwide = allowed;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title_prefix(&self) -> &str {
        &self.title_prefix
    }

    pub fn set_title_prefix(&mut self, prefix: impl Into<String>) {
        self.title_prefix = prefix.into();
    }

    /// The title as shown: mode prefix followed by the title text
    pub fn title_and_prefix(&self) -> String {
        format!("{}{}", self.title_prefix, self.title)
    }

    pub fn set_default_foreground(&mut self, rgb: Option<Rgb>) {
        self.default_foreground = rgb;
    }

    pub fn set_default_background(&mut self, rgb: Option<Rgb>) {
        self.default_background = rgb;
    }

    /// Color `Color::Default` resolves to as a foreground
    pub fn default_foreground(&self) -> Rgb {
        self.default_foreground
            .or_else(|| self.color_table.get(DEFAULT_FOREGROUND_INDEX))
            .unwrap_or(Rgb::new(204, 204, 204))
    }

    /// Color `Color::Default` resolves to as a background
    pub fn default_background(&self) -> Rgb {
        self.default_background
            .or_else(|| self.color_table.get(DEFAULT_BACKGROUND_INDEX))
            .unwrap_or(Rgb::new(12, 12, 12))
    }

    fn resolve_foreground(&self, color: Color) -> Rgb {
        self.color_table.resolve(color, self.default_foreground())
    }

    fn resolve_background(&self, color: Color) -> Rgb {
        self.color_table.resolve(color, self.default_background())
    }

    /// Foreground color of `attr`, honoring reverse video
    pub fn lookup_foreground_color(&self, attr: &TextAttribute) -> Rgb {
        if attr.is_reverse_video() {
            self.resolve_background(attr.bg)
        } else {
            self.resolve_foreground(attr.fg)
        }
    }

    /// Background color of `attr`, honoring reverse video
    pub fn lookup_background_color(&self, attr: &TextAttribute) -> Rgb {
        if attr.is_reverse_video() {
            self.resolve_foreground(attr.fg)
        } else {
            self.resolve_background(attr.bg)
        }
    }

    pub fn ime(&self) -> &ImeInfo {
        &self.ime
    }

    pub fn ime_mut(&mut self) -> &mut ImeInfo {
        &mut self.ime
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Begin a mouse selection
    pub fn start_selection(&mut self, selection: Selection) {
        self.selection = Some(selection);
        self.title_prefix = SELECT_TITLE_PREFIX.to_string();
    }

    /// Begin keyboard mark mode with a single-cell selection at `point`
    pub fn start_mark(&mut self, point: Point) {
        self.selection = Some(Selection::stream(point.row, point.col));
        self.title_prefix = MARK_TITLE_PREFIX.to_string();
    }

    /// Move the free end of the current selection
    pub fn extend_selection(&mut self, point: Point) {
        if let Some(ref mut selection) = self.selection {
            selection.extend_to(point.row, point.col);
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.title_prefix.clear();
        }
    }

    /// Highlight rectangles of the current selection, empty if none
    pub fn selection_rects(&self) -> Vec<Rect> {
        let buffer = self.active_output_buffer().text_buffer();
        let (cols, rows) = (buffer.cols(), buffer.rows());
        self.selection
            .as_ref()
            .map(|s| s.rects(cols, rows))
            .unwrap_or_default()
    }
}
