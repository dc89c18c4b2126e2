//! Point - a single sketch dot
//!
//! A point is an integer coordinate on the producing surface plus a
//! cosmetic tag (the colour it was drawn with). The tag travels with the
//! point through every normalization stage but never influences analysis.

/// A single user-placed dot.
///
/// Small and immutable, so it is a plain `Copy` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Cosmetic identity tag
    pub tag: u32,
}

impl Point {
    /// Create an untagged point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, tag: 0 }
    }

    /// Create a point carrying a tag.
    pub const fn with_tag(x: i32, y: i32, tag: u32) -> Self {
        Self { x, y, tag }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Return a copy moved by `(dx, dy)`, clamped to the `i32` range.
    #[inline]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            tag: self.tag,
        }
    }

    /// Rotate about `(cx, cy)` by `angle` radians (counter-clockwise in a
    /// y-up frame), rounding to the nearest integer coordinate.
    pub fn rotated_about(&self, cx: f64, cy: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = f64::from(self.x) - cx;
        let dy = f64::from(self.y) - cy;
        let x = cx + dx * cos - dy * sin;
        let y = cy + dx * sin + dy * cos;
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            tag: self.tag,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
