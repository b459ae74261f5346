//! Text buffer
//!
//! A fixed-size 2D grid of cells together with the cursor that writes
//! into it. Output buffers and IME composition areas both own one.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use super::cell::{Cell, CellWidth, TextAttribute};
use super::cursor::Cursor;
use super::geometry::Point;

/// A row of cells in the buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row
    pub cells: Vec<Cell>,
    /// Whether this row was soft-wrapped into the next one
    pub wrapped: bool,
}

impl Row {
    pub fn new(cols: usize, fill: TextAttribute) -> Self {
        Self {
            cells: vec![Cell::blank(fill); cols],
            wrapped: false,
        }
    }

    pub fn erase(&mut self, fill: TextAttribute) {
        for cell in &mut self.cells {
            cell.erase(fill);
        }
        self.wrapped = false;
    }

    /// Row text with trailing blanks trimmed
    pub fn text(&self) -> String {
        let mut text: String = self
            .cells
            .iter()
            .filter(|c| c.width != CellWidth::Trailing)
            .map(|c| if c.is_empty() { " " } else { c.content.as_str() })
            .collect();
        let trimmed = text.trim_end_matches(' ').len();
        text.truncate(trimmed);
        text
    }
}

/// The cell grid plus its cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBuffer {
    rows: Vec<Row>,
    cols: usize,
    cursor: Cursor,
    fill: TextAttribute,
}

impl TextBuffer {
    /// Create a `cols` x `rows` buffer of blanks painted with `fill`
    pub fn new(cols: usize, rows: usize, fill: TextAttribute) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new(cols, fill)).collect(),
            cols,
            cursor: Cursor::new(),
            fill,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Attribute used to paint blank cells
    pub fn fill(&self) -> TextAttribute {
        self.fill
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Text of one row, trailing blanks trimmed
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.rows.get(row).map(Row::text)
    }

    /// Check whether the cell at `point` holds half of a double-width glyph
    pub fn is_double_width_at(&self, point: Point) -> bool {
        self.cell(point.row, point.col)
            .map(Cell::is_double_width)
            .unwrap_or(false)
    }

    /// Move the cursor, clamping to the buffer
    pub fn set_cursor_position(&mut self, point: Point) {
        let (cols, rows) = (self.cols, self.rows());
        self.cursor.move_to(point.col, point.row, cols, rows);
    }

    /// Blank every cell and home the cursor
    pub fn clear(&mut self) {
        let fill = self.fill;
        for row in &mut self.rows {
            row.erase(fill);
        }
        self.cursor.col = 0;
        self.cursor.row = 0;
        self.cursor.pending_wrap = false;
    }

    /// Write text at the cursor with `attr`. Filling the last column leaves
    /// the cursor there with a pending wrap; the next glyph wraps (and on the
    /// bottom row scrolls) before it is placed. `\n` moves to the start of
    /// the next row and `\r` to the start of the current one.
    pub fn write_str(&mut self, text: &str, attr: TextAttribute) {
        if self.cols == 0 || self.rows.is_empty() {
            return;
        }
        for c in text.chars() {
            match c {
                '\n' => {
                    self.cursor.col = 0;
                    self.cursor.pending_wrap = false;
                    self.line_feed();
                }
                '\r' => {
                    self.cursor.col = 0;
                    self.cursor.pending_wrap = false;
                }
                _ => self.put_char(c, attr),
            }
        }
    }

    fn put_char(&mut self, c: char, attr: TextAttribute) {
        let width = match c.width() {
            Some(w) => w,
            None => return,
        };

        if width == 0 {
            self.attach_combining(c);
            return;
        }

        if self.cursor.pending_wrap {
            self.wrap();
        }

        // A wide glyph never straddles the right edge
        if width == 2 && self.cols >= 2 && self.cursor.col + 1 >= self.cols {
            let (row, col) = (self.cursor.row, self.cursor.col);
            self.split_wide_glyph(row, col);
            let fill = self.fill;
            self.rows[row].cells[col].erase(fill);
            self.wrap();
        }

        let (row, col) = (self.cursor.row, self.cursor.col);
        let wide = width == 2 && col + 1 < self.cols;
        self.split_wide_glyph(row, col);
        if wide {
            self.split_wide_glyph(row, col + 1);
        }

        let cells = &mut self.rows[row].cells;
        cells[col] = Cell {
            content: c.to_string(),
            attr,
            width: if wide { CellWidth::Leading } else { CellWidth::Single },
        };
        if wide {
            cells[col + 1] = Cell {
                content: String::new(),
                attr,
                width: CellWidth::Trailing,
            };
        }

        let next = col + if wide { 2 } else { 1 };
        if next >= self.cols {
            self.cursor.col = self.cols - 1;
            self.cursor.pending_wrap = true;
        } else {
            self.cursor.col = next;
        }
    }

    /// Attach a zero-width mark to the glyph just written
    fn attach_combining(&mut self, c: char) {
        let row = self.cursor.row;
        let col = if self.cursor.pending_wrap {
            self.cursor.col
        } else if self.cursor.col > 0 {
            self.cursor.col - 1
        } else {
            return;
        };
        let cells = &mut self.rows[row].cells;
        let col = match cells[col].width {
            CellWidth::Trailing => col.saturating_sub(1),
            _ => col,
        };
        cells[col].content.push(c);
    }

    /// Blank the other half of a wide glyph that `col` is about to lose
    fn split_wide_glyph(&mut self, row: usize, col: usize) {
        let fill = self.fill;
        let cells = &mut self.rows[row].cells;
        let last = cells.len() - 1;
        match cells[col].width {
            CellWidth::Leading if col < last => cells[col + 1].erase(fill),
            CellWidth::Trailing if col > 0 => cells[col - 1].erase(fill),
            _ => {}
        }
        cells[col].width = CellWidth::Single;
    }

    fn wrap(&mut self) {
        let row = self.cursor.row;
        self.rows[row].wrapped = true;
        self.cursor.col = 0;
        self.cursor.pending_wrap = false;
        self.line_feed();
    }

    fn line_feed(&mut self) {
        if self.cursor.row + 1 < self.rows.len() {
            self.cursor.row += 1;
        } else {
            self.rows.remove(0);
            self.rows.push(Row::new(self.cols, self.fill));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Color;

    fn buffer(cols: usize, rows: usize) -> TextBuffer {
        TextBuffer::new(cols, rows, TextAttribute::default())
    }

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = buffer(10, 3);
        assert_eq!(buf.cols(), 10);
        assert_eq!(buf.rows(), 3);
        assert_eq!(buf.row_text(0).as_deref(), Some(""));
        assert!(buf.cell(3, 0).is_none());
    }

    #[test]
    fn test_write_and_newline() {
        let mut buf = buffer(10, 3);
        buf.write_str("ab\ncd", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("ab"));
        assert_eq!(buf.row_text(1).as_deref(), Some("cd"));
        assert_eq!(buf.cursor().row, 1);
        assert_eq!(buf.cursor().col, 2);
    }

    #[test]
    fn test_write_keeps_attribute() {
        let mut buf = buffer(10, 1);
        let attr = TextAttribute::new(Color::RED, Color::BLACK);
        buf.write_str("x", attr);
        assert_eq!(buf.cell(0, 0).map(|c| c.attr), Some(attr));
    }

    #[test]
    fn test_wrap_at_right_edge() {
        let mut buf = buffer(4, 2);
        buf.write_str("abcdef", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("abcd"));
        assert_eq!(buf.row_text(1).as_deref(), Some("ef"));
        assert!(buf.row(0).map(|r| r.wrapped).unwrap_or(false));
    }

    #[test]
    fn test_scroll_at_bottom() {
        let mut buf = buffer(4, 2);
        buf.write_str("1\n2\n3", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("2"));
        assert_eq!(buf.row_text(1).as_deref(), Some("3"));
    }

    #[test]
    fn test_wide_glyph_cells() {
        let mut buf = buffer(10, 1);
        buf.write_str("a中b", TextAttribute::default());
        assert_eq!(buf.cell(0, 1).map(|c| c.width), Some(CellWidth::Leading));
        assert_eq!(buf.cell(0, 2).map(|c| c.width), Some(CellWidth::Trailing));
        assert!(buf.is_double_width_at(Point::new(0, 1)));
        assert!(buf.is_double_width_at(Point::new(0, 2)));
        assert!(!buf.is_double_width_at(Point::new(0, 3)));
        assert_eq!(buf.row_text(0).as_deref(), Some("a中b"));
        assert_eq!(buf.cursor().col, 4);
    }

    #[test]
    fn test_wide_glyph_wraps_instead_of_splitting() {
        let mut buf = buffer(3, 2);
        buf.write_str("ab中", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("ab"));
        assert_eq!(buf.cell(1, 0).map(|c| c.width), Some(CellWidth::Leading));
    }

    #[test]
    fn test_combining_mark_joins_previous_cell() {
        let mut buf = buffer(5, 1);
        buf.write_str("e\u{301}", TextAttribute::default());
        assert_eq!(buf.cell(0, 0).map(|c| c.content.as_str()), Some("e\u{301}"));
        assert_eq!(buf.cursor().col, 1);
    }

    #[test]
    fn test_set_cursor_position_clamps() {
        let mut buf = buffer(10, 5);
        buf.set_cursor_position(Point::new(9, 42));
        assert_eq!(buf.cursor().row, 4);
        assert_eq!(buf.cursor().col, 9);
    }

    #[test]
    fn test_clear() {
        let mut buf = buffer(5, 2);
        buf.write_str("hi\nyo", TextAttribute::default());
        buf.clear();
        assert_eq!(buf.row_text(0).as_deref(), Some(""));
        assert_eq!(buf.row_text(1).as_deref(), Some(""));
        assert_eq!(buf.cursor().row, 0);
    }

    #[test]
    fn test_full_bottom_row_defers_wrap() {
        let mut buf = buffer(4, 2);
        buf.write_str("ab\ncdef", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("ab"));
        assert_eq!(buf.row_text(1).as_deref(), Some("cdef"));
        assert_eq!(buf.cursor().row, 1);
        assert_eq!(buf.cursor().col, 3);
        assert!(buf.cursor().pending_wrap);

        // The next glyph scrolls first
        buf.write_str("g", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("cdef"));
        assert_eq!(buf.row_text(1).as_deref(), Some("g"));
        assert!(!buf.cursor().pending_wrap);
    }

    #[test]
    fn test_full_single_row_keeps_wide_text() {
        let mut buf = buffer(4, 1);
        buf.write_str("かな", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("かな"));
        assert_eq!(buf.cursor().col, 3);
    }

    #[test]
    fn test_combining_mark_after_last_column() {
        let mut buf = buffer(3, 2);
        buf.write_str("abe\u{301}", TextAttribute::default());
        assert_eq!(buf.cell(0, 2).map(|c| c.content.as_str()), Some("e\u{301}"));
        assert_eq!(buf.row_text(1).as_deref(), Some(""));

        let mut wide = buffer(4, 1);
        wide.write_str("ab中\u{301}", TextAttribute::default());
        assert_eq!(wide.cell(0, 2).map(|c| c.content.as_str()), Some("中\u{301}"));
    }

    #[test]
    fn test_carriage_return_cancels_pending_wrap() {
        let mut buf = buffer(3, 2);
        buf.write_str("abc\rx", TextAttribute::default());
        assert_eq!(buf.row_text(0).as_deref(), Some("xbc"));
        assert_eq!(buf.row_text(1).as_deref(), Some(""));
    }

    #[test]
    fn test_overwriting_half_of_wide_glyph() {
        let mut buf = buffer(6, 1);
        buf.write_str("中", TextAttribute::default());
        buf.set_cursor_position(Point::new(0, 0));
        buf.write_str("a", TextAttribute::default());
        assert_eq!(buf.cell(0, 1).map(|c| c.width), Some(CellWidth::Single));
        assert!(!buf.is_double_width_at(Point::new(0, 1)));
        assert_eq!(buf.row_text(0).as_deref(), Some("a"));

        buf.clear();
        buf.write_str("中", TextAttribute::default());
        buf.set_cursor_position(Point::new(0, 1));
        buf.write_str("b", TextAttribute::default());
        assert_eq!(buf.cell(0, 0).map(|c| c.width), Some(CellWidth::Single));
        assert_eq!(buf.row_text(0).as_deref(), Some(" b"));
    }

    #[test]
    fn test_wide_glyph_over_another_wide_glyph() {
        let mut buf = buffer(6, 1);
        buf.write_str("中文", TextAttribute::default());
        buf.set_cursor_position(Point::new(0, 1));
        buf.write_str("日", TextAttribute::default());

        // Both neighbours lost their other half
        assert_eq!(buf.cell(0, 0).map(|c| c.width), Some(CellWidth::Single));
        assert_eq!(buf.cell(0, 3).map(|c| c.width), Some(CellWidth::Single));
        assert_eq!(buf.row_text(0).as_deref(), Some(" 日"));
        assert!(!buf.is_double_width_at(Point::new(0, 3)));
    }
}
