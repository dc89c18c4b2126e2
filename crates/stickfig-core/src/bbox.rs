//! BoundingBox - axis-aligned extent of a point set
//!
//! Unlike a pixel rectangle, the box is stored as inclusive min/max
//! coordinates so that a single point has zero width and height.

/// Inclusive extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Smallest x coordinate
    pub min_x: i32,
    /// Largest x coordinate
    pub max_x: i32,
    /// Smallest y coordinate
    pub min_y: i32,
    /// Largest y coordinate
    pub max_y: i32,
}

impl BoundingBox {
    /// Box around a single coordinate.
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Grow the box so it contains `(x, y)`.
    pub fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Horizontal extent (`max_x - min_x`), saturating at `i32::MAX`
    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Vertical extent (`max_y - min_y`), saturating at `i32::MAX`
    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// `width * height`, computed in `i64` from the corners.
    #[inline]
    pub fn area(&self) -> i64 {
        let w = i64::from(self.max_x) - i64::from(self.min_x);
        let h = i64::from(self.max_y) - i64::from(self.min_y);
        w * h
    }

    /// Return the box grown by `margin` on every side, clamped to the
    /// `i32` range.
    pub fn expanded(&self, margin: i32) -> Self {
        Self {
            min_x: self.min_x.saturating_sub(margin),
            max_x: self.max_x.saturating_add(margin),
            min_y: self.min_y.saturating_sub(margin),
            max_y: self.max_y.saturating_add(margin),
        }
    }

    /// Check whether `(x, y)` lies inside (inclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_and_extent() {
        let mut b = BoundingBox::at(5, 5);
        assert_eq!(b.width(), 0);
        assert_eq!(b.area(), 0);
        b.include(15, -5);
        assert_eq!(b.width(), 10);
        assert_eq!(b.height(), 10);
        assert_eq!(b.area(), 100);
        assert!(b.contains(10, 0));
        assert!(!b.contains(16, 0));
    }

    #[test]
    fn test_expanded() {
        let b = BoundingBox::at(0, 0).expanded(10);
        assert_eq!(b.min_x, -10);
        assert_eq!(b.max_y, 10);
        assert_eq!(b.width(), 20);
    }

    #[test]
    fn test_extreme_coordinates() {
        let mut b = BoundingBox::at(i32::MIN, 0);
        b.include(i32::MAX, 10);
        assert_eq!(b.width(), i32::MAX);
        assert_eq!(b.height(), 10);
        assert_eq!(b.area(), i64::from(u32::MAX) * 10);

        let grown = BoundingBox::at(i32::MAX, i32::MIN).expanded(10);
        assert_eq!(grown.max_x, i32::MAX);
        assert_eq!(grown.min_y, i32::MIN);
        assert_eq!(grown.min_x, i32::MAX - 10);
    }
}
