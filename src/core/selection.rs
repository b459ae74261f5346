//! Selection highlighting
//!
//! A selection is stored as its two endpoints. The rectangles the renderer
//! highlights are derived from them on demand, one per selected row.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// Selection type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionType {
    /// Text-flow selection: partial first and last rows, full rows between
    #[default]
    Stream,
    /// Rectangular selection (Alt+drag)
    Block,
}

/// Represents a text selection in buffer coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Where the selection was started
    anchor: Point,
    /// The moving end of the selection
    end: Point,
    selection_type: SelectionType,
}

impl Selection {
    /// Create a new selection starting at the given point
    pub fn new(anchor: Point, selection_type: SelectionType) -> Self {
        Self {
            anchor,
            end: anchor,
            selection_type,
        }
    }

    pub fn stream(row: usize, col: usize) -> Self {
        Self::new(Point::new(row, col), SelectionType::Stream)
    }

    pub fn block(row: usize, col: usize) -> Self {
        Self::new(Point::new(row, col), SelectionType::Block)
    }

    /// Move the end point of the selection
    pub fn extend_to(&mut self, row: usize, col: usize) {
        self.end = Point::new(row, col);
    }

    pub fn selection_type(&self) -> SelectionType {
        self.selection_type
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Get the normalized start and end points (start is always first in reading order)
    pub fn normalized(&self) -> (Point, Point) {
        if (self.anchor.row, self.anchor.col) <= (self.end.row, self.end.col) {
            (self.anchor, self.end)
        } else {
            (self.end, self.anchor)
        }
    }

    /// Highlight rectangles, one per selected row, clipped to a buffer of
    /// `cols` x `rows`. Rows whose selected span lies wholly past the right
    /// edge produce no rectangle.
    pub fn rects(&self, cols: usize, rows: usize) -> Vec<Rect> {
        if cols == 0 || rows == 0 {
            return Vec::new();
        }
        let last_col = cols - 1;
        let (start, end) = self.normalized();
        if start.row >= rows {
            return Vec::new();
        }
        let last_row = end.row.min(rows - 1);

        (start.row..=last_row)
            .filter_map(|row| {
                let (left, right) = match self.selection_type {
                    SelectionType::Block => (
                        self.anchor.col.min(self.end.col),
                        self.anchor.col.max(self.end.col),
                    ),
                    SelectionType::Stream => {
                        let left = if row == start.row { start.col } else { 0 };
                        let right = if row == end.row { end.col } else { last_col };
                        (left, right)
                    }
                };
                if left > last_col {
                    return None;
                }
                Some(Rect::new(left, row, right.min(last_col), row))
            })
            .collect()
    }
}
