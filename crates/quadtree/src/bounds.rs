//! Integer bounding boxes and their quadrant split.

use std::fmt;

/// Axis-aligned integer bounding box owned by a node.
///
/// The box is fixed once a node is built; quadrants are derived from the
/// truncated midpoint of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// The plane every index starts from.
    pub const UNIVERSE: Bounds = Bounds::new(-50, 50, -50, 50);

    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Midpoint on the X axis (truncating division).
    #[inline]
    pub fn mid_x(&self) -> i32 {
        midpoint(self.min_x, self.max_x)
    }

    /// Midpoint on the Y axis (truncating division).
    #[inline]
    pub fn mid_y(&self) -> i32 {
        midpoint(self.min_y, self.max_y)
    }

    /// Check that neither axis is inverted.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Pick the quadrant a point routes to.
    ///
    /// Points on the midlines go right and up, so every integer point
    /// (inside the box or not) has exactly one quadrant.
    pub fn quadrant_of(&self, x: i32, y: i32) -> Quadrant {
        let right = x >= self.mid_x();
        let top = y >= self.mid_y();
        match (right, top) {
            (false, true) => Quadrant::TopLeft,
            (true, true) => Quadrant::TopRight,
            (false, false) => Quadrant::BottomLeft,
            (true, false) => Quadrant::BottomRight,
        }
    }

    /// The sub-box covering one quadrant of this box.
    pub fn quadrant(&self, quadrant: Quadrant) -> Bounds {
        let (mid_x, mid_y) = (self.mid_x(), self.mid_y());
        match quadrant {
            Quadrant::TopLeft => Bounds::new(self.min_x, mid_x, mid_y, self.max_y),
            Quadrant::TopRight => Bounds::new(mid_x, self.max_x, mid_y, self.max_y),
            Quadrant::BottomLeft => Bounds::new(self.min_x, mid_x, self.min_y, mid_y),
            Quadrant::BottomRight => Bounds::new(mid_x, self.max_x, self.min_y, mid_y),
        }
    }
}

/// Truncating midpoint, widened so extreme boxes don't overflow.
#[inline]
fn midpoint(min: i32, max: i32) -> i32 {
    ((i64::from(min) + i64::from(max)) / 2) as i32
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIVERSE
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// One of the four child slots of an internal node, in slot order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in the order children are probed.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_truncates() {
        let b = Bounds::new(-50, 50, -50, 50);
        assert_eq!(b.mid_x(), 0);
        assert_eq!(b.mid_y(), 0);

        let odd = Bounds::new(-50, 0, 0, 25);
        assert_eq!(odd.mid_x(), -25);
        assert_eq!(odd.mid_y(), 12);

        // Truncation goes toward zero, not toward negative infinity.
        let neg = Bounds::new(-50, -25, -3, 0);
        assert_eq!(neg.mid_x(), -37);
        assert_eq!(neg.mid_y(), -1);
    }

    #[test]
    fn test_quadrant_of_midlines() {
        let b = Bounds::UNIVERSE;
        assert_eq!(b.quadrant_of(-1, 0), Quadrant::TopLeft);
        assert_eq!(b.quadrant_of(0, 0), Quadrant::TopRight);
        assert_eq!(b.quadrant_of(-1, -1), Quadrant::BottomLeft);
        assert_eq!(b.quadrant_of(0, -1), Quadrant::BottomRight);
        // Outside the box still routes somewhere.
        assert_eq!(b.quadrant_of(500, -500), Quadrant::BottomRight);
    }

    #[test]
    fn test_quadrant_boxes() {
        let b = Bounds::UNIVERSE;
        assert_eq!(b.quadrant(Quadrant::TopLeft), Bounds::new(-50, 0, 0, 50));
        assert_eq!(b.quadrant(Quadrant::TopRight), Bounds::new(0, 50, 0, 50));
        assert_eq!(b.quadrant(Quadrant::BottomLeft), Bounds::new(-50, 0, -50, 0));
        assert_eq!(b.quadrant(Quadrant::BottomRight), Bounds::new(0, 50, -50, 0));
    }

    #[test]
    fn test_quadrant_slot_order() {
        let indices: Vec<usize> = Quadrant::ALL.iter().map(|q| q.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_midpoint_extreme_bounds() {
        let b = Bounds::new(1, i32::MAX, i32::MIN, i32::MAX);
        assert_eq!(b.mid_x(), 1_073_741_824);
        assert_eq!(b.mid_y(), 0);

        let low = Bounds::new(i32::MIN, i32::MIN + 1, 0, 0);
        // -4294967295 / 2 truncates toward zero.
        assert_eq!(low.mid_x(), i32::MIN + 1);
    }

    #[test]
    fn test_is_valid() {
        assert!(Bounds::UNIVERSE.is_valid());
        assert!(Bounds::new(3, 3, -1, -1).is_valid());
        assert!(!Bounds::new(5, 4, 0, 0).is_valid());
        assert!(!Bounds::new(0, 0, 1, -1).is_valid());
    }
}
