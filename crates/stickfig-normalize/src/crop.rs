//! Crop normalizer
//!
//! Translates a sketch so that its bounding box, grown by a margin, starts
//! at the origin. Only translation is applied, so pairwise distances and
//! angles are untouched and every coordinate becomes non-negative.

use stickfig_core::PointSet;
use tracing::debug;

/// Translate `points` so the margin-expanded bounding box starts at `(0, 0)`.
///
/// The result is compacted. An empty input yields an empty set; a single
/// point lands at `(margin, margin)`.
///
/// Cropping an already cropped set is a no-op.
pub fn crop(points: &PointSet, margin: i32) -> PointSet {
    let Some(bbox) = points.bounding_box() else {
        return PointSet::new();
    };
    let frame = bbox.expanded(margin);
    debug!(
        width = frame.width(),
        height = frame.height(),
        "Cropped sketch to its bounding box"
    );
    points.translated(-frame.min_x, -frame.min_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickfig_core::Point;

    #[test]
    fn test_crop_moves_to_margin() {
        let set = PointSet::from_points([(100, 200), (130, 260)]).unwrap();
        let cropped = crop(&set, 10);
        assert_eq!(cropped.get(0), Some(Point::new(10, 10)));
        assert_eq!(cropped.get(1), Some(Point::new(40, 70)));
    }

    #[test]
    fn test_crop_single_and_empty() {
        let one = PointSet::from_points([(-5, 7)]).unwrap();
        assert_eq!(crop(&one, 10).get(0), Some(Point::new(10, 10)));
        assert!(crop(&PointSet::new(), 10).is_empty());
    }

    #[test]
    fn test_crop_idempotent() {
        let set = PointSet::from_points([(3, 90), (47, 12), (20, 20)]).unwrap();
        let once = crop(&set, 10);
        assert_eq!(crop(&once, 10), once);
    }
}
