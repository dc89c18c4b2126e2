//! Invariant graph features
//!
//! Describes a sketch through the connected components of its proximity
//! graph under the group radius. Nothing here depends on where the sketch
//! sits or which way it faces: the values are counts, size ratios, gaps
//! between components and yes/no structural patterns.
//!
//! # Layout
//!
//! | index | feature |
//! |---|---|
//! | 0 | component count |
//! | 1 | largest component size |
//! | 2 | mean degree, truncated |
//! | 3 | 1 when the graph has a cycle |
//! | 4 | largest gap between two components |
//! | 5 | largest / smallest component size |
//! | 6 | central / peripheral components |
//! | 7 | left-right balance of component centers |
//! | 8 | mean component size |
//! | 9 | 1 when every size is within 2 of the first |
//! | 10 | edges of a spanning forest, `n - components` |
//! | 11 | component pairs closer than [`LINK_DISTANCE`] |
//! | 12..=14 | star, line and tree patterns |
//! | 15..=19 | uniform, hierarchical, radial, linear and cluster layouts |
//!
//! Every value from index 4 on needs at least two components; the pattern
//! flags 13 and 15..=18 need three.

use stickfig_core::{AnalysisParams, PointSet, ProximityGraph};
use tracing::debug;

use crate::relational::{
    Group, LINEAR_CORRELATION, LINK_DISTANCE, PLACEMENT_DISTANCE, RADIAL_DISTANCE, correlation,
    group_points,
};

/// Number of values in an invariant graph feature vector.
pub const INVARIANT_FEATURE_LEN: usize = 20;

/// Components closer than this form a cluster.
pub const CLUSTER_GAP: f64 = 60.0;

/// Largest variance of the summed gaps for a uniform layout.
pub const UNIFORM_VARIANCE: f64 = 1000.0;

/// Largest size difference from the first component for a regular layout.
pub const REGULAR_SIZE_SPREAD: usize = 2;

/// Shortest point-to-point distance between two components.
fn gap(points: &PointSet, a: &Group, b: &Group) -> f64 {
    let mut best = f64::MAX;
    for p in a.members.iter().filter_map(|&i| points.get(i)) {
        for q in b.members.iter().filter_map(|&j| points.get(j)) {
            best = best.min(p.distance(&q));
        }
    }
    if best == f64::MAX { 0.0 } else { best }
}

/// Mean distance of the members of `group` to `center`.
fn spread(points: &PointSet, group: &Group, (cx, cy): (f64, f64)) -> f64 {
    if group.size() == 0 {
        return 0.0;
    }
    let sum: f64 = group
        .members
        .iter()
        .filter_map(|&i| points.get(i))
        .map(|p| (f64::from(p.x) - cx).hypot(f64::from(p.y) - cy))
        .sum();
    sum / group.size() as f64
}

/// Whether any component holds more edges than a tree on its vertices.
fn has_cycle(groups: &[Group], degrees: &[usize]) -> bool {
    groups.iter().any(|g| {
        let edges: usize = g.members.iter().map(|&i| degrees[i]).sum::<usize>() / 2;
        edges >= g.size()
    })
}

/// Compute the invariant graph vector of a normalized point set.
///
/// An empty set yields all zeros.
pub fn invariant_features(points: &PointSet, params: &AnalysisParams) -> Vec<i32> {
    let mut f = vec![0; INVARIANT_FEATURE_LEN];
    let Some(centroid) = points.centroid() else {
        return f;
    };
    let graph = ProximityGraph::new(points, params.group_radius);
    let degrees = graph.degrees();
    let groups = group_points(points, params.group_radius);
    let n = points.len();
    let count = groups.len();

    let sizes: Vec<usize> = groups.iter().map(Group::size).collect();
    let largest = sizes.iter().copied().max().unwrap_or(0);
    let smallest = sizes.iter().copied().min().unwrap_or(0);
    let cycle = has_cycle(&groups, &degrees);

    let mut gaps = vec![vec![0.0; count]; count];
    for i in 0..count {
        for j in i + 1..count {
            let d = gap(points, &groups[i], &groups[j]);
            gaps[i][j] = d;
            gaps[j][i] = d;
        }
    }
    let pairs = move || (0..count).flat_map(move |i| (i + 1..count).map(move |j| (i, j)));
    let linked_pairs = pairs().filter(|&(i, j)| gaps[i][j] < LINK_DISTANCE).count();

    f[0] = count as i32;
    f[1] = largest as i32;
    f[2] = (degrees.iter().sum::<usize>() / n) as i32;
    f[3] = i32::from(cycle);
    f[8] = (n / count) as i32;
    f[10] = (n - count) as i32;

    if count >= 2 {
        let widest = pairs().map(|(i, j)| gaps[i][j]).fold(0.0, f64::max);
        f[4] = widest as i32;
        if smallest > 0 {
            f[5] = (largest / smallest) as i32;
        }

        let central = groups
            .iter()
            .filter(|g| spread(points, g, centroid) < PLACEMENT_DISTANCE)
            .count();
        let peripheral = count - central;
        let ratio = if peripheral > 0 {
            central / peripheral
        } else {
            central
        };
        f[6] = ratio as i32;

        let left = groups.iter().filter(|g| g.center.0 < centroid.0).count() as i32;
        let right = count as i32 - left;
        f[7] = i32::from((left - right).abs() <= 1);
        f[9] = i32::from(sizes.iter().all(|&s| s.abs_diff(sizes[0]) <= REGULAR_SIZE_SPREAD));
        f[11] = linked_pairs as i32;
        f[12] = i32::from(points.iter().any(|(i, _)| degrees[i] + 1 >= count));
        f[14] = i32::from(!cycle && linked_pairs > 0);
        f[19] = i32::from(pairs().any(|(i, j)| gaps[i][j] < CLUSTER_GAP));
    }

    if count >= 3 {
        let ends = points.iter().filter(|&(i, _)| degrees[i] == 1).count();
        let inner = points.iter().filter(|&(i, _)| degrees[i] == 2).count();
        f[13] = i32::from(ends == 2 && inner + 2 >= count);

        // each component sums its gaps to the later ones
        let sums: Vec<f64> = (0..count).map(|i| gaps[i][i + 1..].iter().sum()).collect();
        let mean = sums.iter().sum::<f64>() / count as f64;
        let variance = sums.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / count as f64;
        f[15] = i32::from(variance < UNIFORM_VARIANCE);

        let hub = (0..count).any(|i| {
            (0..count)
                .filter(|&j| j != i && gaps[i][j] < LINK_DISTANCE)
                .count()
                >= 2
        });
        f[16] = i32::from(hub);

        let far = groups
            .iter()
            .filter(|g| spread(points, g, centroid) > RADIAL_DISTANCE)
            .count();
        f[17] = i32::from(far >= count / 2);

        let xs: Vec<f64> = groups.iter().map(|g| g.center.0).collect();
        let ys: Vec<f64> = groups.iter().map(|g| g.center.1).collect();
        f[18] = i32::from(correlation(&xs, &ys).abs() > LINEAR_CORRELATION);
    }

    debug!(
        components = count,
        largest = largest,
        cycle = cycle,
        linked_pairs = linked_pairs,
        "Computed invariant graph features"
    );

    f
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AnalysisParams {
        AnalysisParams::default()
    }

    #[test]
    fn test_empty() {
        let f = invariant_features(&PointSet::new(), &params());
        assert_eq!(f, vec![0; INVARIANT_FEATURE_LEN]);
    }

    #[test]
    fn test_single_path() {
        // one component, a path of four points
        let set = PointSet::from_points((0..4).map(|i| (i * 20, 0))).unwrap();
        let f = invariant_features(&set, &params());
        assert_eq!(&f[..4], &[1, 4, 1, 0]);
        assert_eq!(f[8], 4);
        assert_eq!(f[10], 3);
        // pairwise values need a second component
        assert!(f[4..8].iter().all(|&v| v == 0));
        assert!(f[11..].iter().all(|&v| v == 0));
    }

    #[test]
    fn test_triangle_has_cycle() {
        let set = PointSet::from_points([(0, 0), (20, 0), (10, 15)]).unwrap();
        let f = invariant_features(&set, &params());
        assert_eq!(f[0], 1);
        assert_eq!(f[2], 2);
        assert_eq!(f[3], 1);
    }

    #[test]
    fn test_three_pairs_in_a_row() {
        // three two-point components, 50 apart, along a diagonal
        let set = PointSet::from_points([
            (0, 0),
            (10, 10),
            (50, 50),
            (60, 60),
            (100, 100),
            (110, 110),
        ])
        .unwrap();
        let f = invariant_features(&set, &params());
        assert_eq!(f[0], 3);
        assert_eq!(f[1], 2);
        assert_eq!(f[3], 0);
        // gap between the outer pairs: (10,10) to (100,100)
        assert_eq!(f[4], 127);
        assert_eq!(f[5], 1);
        assert_eq!(f[9], 1);
        assert_eq!(f[10], 3);
        // the middle pair is within 80 of both neighbours
        assert_eq!(f[11], 2);
        assert_eq!(f[14], 1);
        assert_eq!(f[16], 1);
        assert_eq!(f[18], 1);
        assert_eq!(f[19], 1);
    }

    #[test]
    fn test_far_apart_components_do_not_link() {
        let set = PointSet::from_points([(0, 0), (200, 0), (400, 0)]).unwrap();
        let f = invariant_features(&set, &params());
        assert_eq!(f[0], 3);
        assert_eq!(f[2], 0);
        assert_eq!(f[4], 400);
        assert_eq!(f[11], 0);
        assert_eq!(f[14], 0);
        assert_eq!(f[16], 0);
        assert_eq!(f[19], 0);
        // every point has degree 0, one less than the component count
        assert_eq!(f[12], 0);
    }
}
