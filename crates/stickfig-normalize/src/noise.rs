//! Noise filter
//!
//! Freehand input leaves stray dots behind. The filter keeps only the
//! largest connected component of the loose proximity graph and drops
//! everything else.

use stickfig_core::{PointSet, ProximityGraph};
use tracing::debug;

/// Keep only the largest component under `radius`.
///
/// Survivors keep their relative slot order and are compacted to the front
/// of a new set. When several components share the largest size, the one
/// containing the lowest occupied slot wins. An empty input gives an empty
/// set.
///
/// # Examples
///
/// ```
/// use stickfig_core::PointSet;
/// use stickfig_normalize::remove_noise;
///
/// let set = PointSet::from_points([(0, 0), (10, 0), (400, 400)]).unwrap();
/// let kept = remove_noise(&set, 60.0);
/// assert_eq!(kept.len(), 2);
/// ```
pub fn remove_noise(points: &PointSet, radius: f64) -> PointSet {
    let graph = ProximityGraph::new(points, radius);
    let Some(component) = graph.largest_component() else {
        return PointSet::new();
    };

    let dropped = points.len() - component.len();
    if dropped > 0 {
        debug!(
            kept = component.len(),
            dropped = dropped,
            radius = radius,
            "Dropped points outside the main component"
        );
    }

    points.select(&component)
}
