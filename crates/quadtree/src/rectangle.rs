//! Rectangles stored in the tree.

use std::fmt;

use crate::Anchor;

/// A rectangle keyed by its anchor point.
///
/// The anchor never moves after construction; `length` and `width` may be
/// rewritten in place. Extents are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    anchor: Anchor,
    pub length: i32,
    pub width: i32,
}

impl Rectangle {
    #[inline]
    pub fn new(x: i32, y: i32, length: i32, width: i32) -> Self {
        Self {
            anchor: Anchor::new(x, y),
            length,
            width,
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.anchor.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.anchor.y
    }

    /// Check whether this rectangle is anchored at `(x, y)`.
    #[inline]
    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.anchor == Anchor::new(x, y)
    }

    /// Overwrite both extents.
    #[inline]
    pub fn resize(&mut self, length: i32, width: i32) {
        self.length = length;
        self.width = width;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle at {}, {}: {}x{}",
            self.anchor.x, self.anchor.y, self.length, self.width
        )
    }
}
