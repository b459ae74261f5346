//! Buffer coordinates, rectangles and the viewport

use serde::{Deserialize, Serialize};

/// A cell position relative to the buffer origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An inclusive rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Rect {
    pub fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left) + 1
    }

    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top) + 1
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.top..=self.bottom).contains(&point.row)
            && (self.left..=self.right).contains(&point.col)
    }
}

/// The visible window onto the text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    pub fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A viewport anchored at the buffer origin
    pub fn from_dimensions(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Rightmost visible column (inclusive)
    pub fn right(&self) -> usize {
        (self.left + self.width).saturating_sub(1)
    }

    /// Bottom visible row (inclusive)
    pub fn bottom(&self) -> usize {
        (self.top + self.height).saturating_sub(1)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.top, self.left)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty() && self.to_rect().contains(point)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }

    /// Move the origin, keeping the viewport inside a `cols` x `rows` buffer
    pub fn scroll_to(&mut self, left: usize, top: usize, cols: usize, rows: usize) {
        self.left = left.min(cols.saturating_sub(self.width));
        self.top = top.min(rows.saturating_sub(self.height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_edges() {
        let viewport = Viewport::new(2, 10, 80, 24);
        assert_eq!(viewport.right(), 81);
        assert_eq!(viewport.bottom(), 33);
        assert_eq!(viewport.origin(), Point::new(10, 2));
        assert!(viewport.contains(Point::new(10, 2)));
        assert!(viewport.contains(Point::new(33, 81)));
        assert!(!viewport.contains(Point::new(34, 2)));
    }

    #[test]
    fn test_viewport_scroll_clamped() {
        let mut viewport = Viewport::from_dimensions(80, 24);
        viewport.scroll_to(0, 500, 80, 300);
        assert_eq!(viewport.top(), 276);
        assert_eq!(viewport.bottom(), 299);
    }

    #[test]
    fn test_empty_viewport() {
        let viewport = Viewport::from_dimensions(0, 24);
        assert!(viewport.is_empty());
        assert!(!viewport.contains(Point::new(0, 0)));
    }

    #[test]
    fn test_rect_size() {
        let rect = Rect::new(3, 2, 9, 4);
        assert_eq!(rect.width(), 7);
        assert_eq!(rect.height(), 3);
        assert!(rect.contains(Point::new(4, 9)));
        assert!(!rect.contains(Point::new(5, 9)));
    }
}
