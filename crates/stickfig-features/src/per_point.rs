//! Per-point features
//!
//! Two values for each of the [`MAX_POINTS`] slots: the point's degree in
//! the tight graph and its hop distance from the highest-degree anchor.
//! Empty slots stay zero.

use stickfig_core::{AnalysisParams, MAX_POINTS, PointSet, ProximityGraph, UNREACHABLE};

/// Number of values in a per-point feature vector.
pub const PER_POINT_FEATURE_LEN: usize = MAX_POINTS * 2;

/// Degrees and hop distances are capped here before scaling to [0, 1].
pub const PER_POINT_CAP: u32 = 10;

/// Compute the per-point vector of a normalized point set.
///
/// Slot `i` fills positions `2i` (degree) and `2i + 1` (hop distance).
/// Unreachable points get 1.0.
pub fn per_point_features(points: &PointSet, params: &AnalysisParams) -> Vec<f64> {
    let mut out = vec![0.0; PER_POINT_FEATURE_LEN];
    let graph = ProximityGraph::new(points, params.tight_radius);
    let Some(anchor) = graph.anchor() else {
        return out;
    };
    let hops = graph.hop_distances(anchor);

    for (i, _) in points.iter() {
        let degree = (graph.degree(i) as u32).min(PER_POINT_CAP);
        out[2 * i] = f64::from(degree) / f64::from(PER_POINT_CAP);
        out[2 * i + 1] = if hops[i] == UNREACHABLE {
            1.0
        } else {
            f64::from(hops[i].min(PER_POINT_CAP)) / f64::from(PER_POINT_CAP)
        };
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_stray() {
        let set = PointSet::from_points([(0, 0), (20, 0), (40, 0), (200, 0)]).unwrap();
        let v = per_point_features(&set, &AnalysisParams::default());
        assert_eq!(v.len(), PER_POINT_FEATURE_LEN);
        // anchor is the middle point
        assert_eq!(&v[..8], &[0.1, 0.1, 0.2, 0.0, 0.1, 0.1, 0.0, 1.0]);
        assert!(v[8..].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_slots_stay_zero() {
        let set = PointSet::from_slots(vec![None, Some((0, 0).into()), None]).unwrap();
        let v = per_point_features(&set, &AnalysisParams::default());
        // single point: degree 0, hop 0 from itself
        assert!(v.iter().all(|&x| x == 0.0));
    }
}
