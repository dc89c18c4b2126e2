//! Orientation normalizer
//!
//! Estimates the dominant axis of a sketch from its second-order central
//! moments and rotates the sketch about its centroid so that axis is
//! vertical. A quadrant density test resolves the 180° ambiguity of the
//! axis: the denser half ends up on top.
//!
//! # Angle conventions
//!
//! Angles are measured in the drawing frame (x right, y down) with
//! `atan2(y, x)`, so 0° is horizontal and 90° points along +y. The applied
//! correction is the tilt of the axis from 90°.

use stickfig_core::PointSet;
use tracing::debug;

/// Fewest points for which an axis can be estimated.
pub const MIN_ORIENTABLE_POINTS: usize = 3;

/// Result of the principal-axis estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Centroid of the valid points
    pub centroid: (f64, f64),
    /// Axis angle in degrees, in `[0, 180)`
    pub axis_angle_deg: f64,
    /// Whether the lower half (`y >= cy`) held more points than the upper
    pub flipped: bool,
    /// Axis angle plus 180° when flipped, in `[0, 360)`
    pub principal_angle_deg: f64,
    /// Deviation of the principal angle from vertical, in `(-180, 180]`
    pub tilt_deg: f64,
}

impl Orientation {
    /// Check whether the tilt falls outside the dead band.
    pub fn needs_rotation(&self, tolerance_deg: f64) -> bool {
        self.tilt_deg.abs() >= tolerance_deg
    }
}

/// Estimate the principal axis of `points`.
///
/// Returns `None` for fewer than [`MIN_ORIENTABLE_POINTS`] valid points.
pub fn estimate_orientation(points: &PointSet) -> Option<Orientation> {
    let n = points.len();
    if n < MIN_ORIENTABLE_POINTS {
        return None;
    }
    let (cx, cy) = points.centroid()?;

    let (mut m20, mut m02, mut m11) = (0.0, 0.0, 0.0);
    for p in points.points() {
        let dx = f64::from(p.x) - cx;
        let dy = f64::from(p.y) - cy;
        m20 += dx * dx;
        m02 += dy * dy;
        m11 += dx * dy;
    }
    let n = n as f64;
    m20 /= n;
    m02 /= n;
    m11 /= n;

    let axis_angle_deg = (0.5 * (2.0 * m11).atan2(m20 - m02))
        .to_degrees()
        .rem_euclid(180.0);

    // points on the centroid row belong to the lower half
    let upper = points.points().filter(|p| f64::from(p.y) < cy).count();
    let flipped = points.len() - upper > upper;

    let principal_angle_deg = if flipped {
        axis_angle_deg + 180.0
    } else {
        axis_angle_deg
    };

    Some(Orientation {
        centroid: (cx, cy),
        axis_angle_deg,
        flipped,
        principal_angle_deg,
        tilt_deg: wrap_degrees(principal_angle_deg - 90.0),
    })
}

/// Rotate `points` so the principal axis is vertical, denser half up.
///
/// Sets with fewer than [`MIN_ORIENTABLE_POINTS`] points, and sets whose
/// tilt is inside `tolerance_deg`, are returned unchanged. Otherwise every
/// point is rotated by `-tilt` about the centroid and rounded to the
/// nearest integer coordinate.
pub fn orient(points: &PointSet, tolerance_deg: f64) -> (PointSet, Option<Orientation>) {
    let Some(orientation) = estimate_orientation(points) else {
        return (points.clone(), None);
    };

    debug!(
        axis = orientation.axis_angle_deg,
        flipped = orientation.flipped,
        tilt = orientation.tilt_deg,
        "Estimated sketch orientation"
    );

    if !orientation.needs_rotation(tolerance_deg) {
        return (points.clone(), Some(orientation));
    }

    let (cx, cy) = orientation.centroid;
    let angle = (-orientation.tilt_deg).to_radians();
    let rotated = points.map_points(|p| p.rotated_about(cx, cy, angle));
    (rotated, Some(orientation))
}

/// Wrap an angle in degrees into `(-180, 180]`.
fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickfig_core::Point;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-90.0), -90.0);
        assert_eq!(wrap_degrees(270.0), -90.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
    }

    #[test]
    fn test_too_few_points_unchanged() {
        let set = PointSet::from_points([(50, 50)]).unwrap();
        let (out, estimate) = orient(&set, 5.0);
        assert_eq!(out, set);
        assert!(estimate.is_none());
    }

    #[test]
    fn test_vertical_line_is_left_alone() {
        let set = PointSet::from_points((0..6).map(|i| (10, 10 + i * 15))).unwrap();
        let estimate = estimate_orientation(&set).unwrap();
        assert!((estimate.axis_angle_deg - 90.0).abs() < 1e-9);
        assert!(!estimate.flipped);
        let (out, _) = orient(&set, 5.0);
        assert_eq!(out, set);
    }

    #[test]
    fn test_horizontal_line_becomes_vertical() {
        let set = PointSet::from_points((0..5).map(|i| (10 + i * 20, 30))).unwrap();
        let estimate = estimate_orientation(&set).unwrap();
        assert!(estimate.axis_angle_deg.abs() < 1e-9);
        // every point sits on the centroid row, which counts as lower
        assert!(estimate.flipped);
        assert!((estimate.principal_angle_deg - 180.0).abs() < 1e-9);
        assert!((estimate.tilt_deg - 90.0).abs() < 1e-9);

        let (out, _) = orient(&set, 5.0);
        let xs: Vec<i32> = out.points().map(|p| p.x).collect();
        assert!(xs.iter().all(|&x| x == 50));
        let bbox = out.bounding_box().unwrap();
        assert_eq!(bbox.height(), 80);
    }

    #[test]
    fn test_centroid_row_counts_as_lower() {
        // one dot above, one below, two on the centroid row
        let set = PointSet::from_points([(50, 0), (40, 30), (60, 30), (50, 60)]).unwrap();
        let estimate = estimate_orientation(&set).unwrap();
        assert_eq!(estimate.centroid, (50.0, 30.0));
        assert!(estimate.flipped);
    }

    #[test]
    fn test_bottom_heavy_sketch_is_flipped() {
        // one dot on top, three near the bottom
        let set = PointSet::from_points([(50, 0), (48, 60), (50, 62), (52, 60)]).unwrap();
        let estimate = estimate_orientation(&set).unwrap();
        assert!(estimate.flipped);
        let (out, _) = orient(&set, 5.0);
        let (_, cy) = out.centroid().unwrap();
        let above = out.points().filter(|p| f64::from(p.y) < cy).count();
        assert_eq!(above, 3);
        assert!(out.points().any(|p| p == Point::new(50, 91)));
    }
}
