//! Graph-structural features
//!
//! Describes a normalized sketch through its tight proximity graph:
//! degree distribution, hop-path histogram, ramifications and linear
//! chains, plus a handful of geometric descriptors and a plausibility gate.
//!
//! # Layout
//!
//! | index | feature |
//! |---|---|
//! | 0 | valid point count |
//! | 1..=4 | points of degree 1, 2, 3, and 4 or more |
//! | 5..=8 | unordered pairs 1, 2, 3, and 4 or more hops apart |
//! | 9 | simple ramifications (degree 3) |
//! | 10 | complex ramifications (degree 4 or more) |
//! | 11 | linear-chain length, run length minus one summed over degree-2 runs |
//! | 12, 13 | bounding width, height |
//! | 14 | `width * 10 / height` |
//! | 15 | `count * 10000 / (width * height)` |
//! | 16 | structural symmetry, 0..=10 |
//! | 17 | plausibility gate, 0 or 1 |
//! | 18 | points in the central trunk region |

use stickfig_core::{AnalysisParams, PlausibilityGate, PointSet, ProximityGraph, UNREACHABLE};
use tracing::debug;

/// Number of values in a graph feature vector.
pub const GRAPH_FEATURE_LEN: usize = 19;

/// Graph-structural description of a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphFeatures {
    /// Valid point count
    pub point_count: i32,
    /// Points of degree 1, 2, 3 and 4+
    pub degree_histogram: [i32; 4],
    /// Unordered pairs at hop distance 1, 2, 3 and 4+ (reachable only)
    pub hop_histogram: [i32; 4],
    /// Degree-3 points
    pub simple_junctions: i32,
    /// Degree-4+ points
    pub complex_junctions: i32,
    /// Sum over degree-2 runs of at least two points of their length minus one
    pub chain_length: i32,
    /// Bounding width
    pub width: i32,
    /// Bounding height
    pub height: i32,
    /// `width * 10 / height`, 0 when the height is 0
    pub aspect_ratio: i32,
    /// `count * 10000 / area`, 0 when the area is 0
    pub density: i32,
    /// Share of points with a same-degree partner at a similar radius, x10
    pub symmetry: i32,
    /// Whether the plausibility gate accepted the sketch
    pub plausible: bool,
    /// Points inside the central trunk region
    pub trunk_size: i32,
}

impl GraphFeatures {
    /// Compute every graph feature of a normalized point set.
    pub fn compute(points: &PointSet, params: &AnalysisParams) -> Self {
        let graph = ProximityGraph::new(points, params.tight_radius);
        let degrees = graph.degrees();

        let mut features = Self {
            point_count: points.len() as i32,
            degree_histogram: degree_histogram(points, &degrees),
            hop_histogram: hop_histogram(&graph),
            chain_length: chain_length(&graph, &degrees),
            symmetry: structural_symmetry(points, &degrees, params.symmetry_tolerance),
            trunk_size: trunk_size(points),
            ..Self::default()
        };
        features.simple_junctions = features.degree_histogram[2];
        features.complex_junctions = features.degree_histogram[3];

        if let Some(bbox) = points.bounding_box() {
            features.width = bbox.width();
            features.height = bbox.height();
            if bbox.height() > 0 {
                features.aspect_ratio = bbox.width() * 10 / bbox.height();
            }
            if bbox.area() > 0 {
                let density = i64::from(features.point_count) * 10_000 / bbox.area();
                features.density = density.min(i64::from(i32::MAX)) as i32;
            }
        }

        features.plausible = passes_gate(&features, &params.gate);
        debug!(
            points = features.point_count,
            extremities = features.degree_histogram[0],
            junctions = features.simple_junctions,
            one_hop = features.hop_histogram[0],
            aspect = features.aspect_ratio,
            density = features.density,
            plausible = features.plausible,
            "Computed graph features"
        );

        features
    }

    /// Flatten into the fixed-length layout.
    pub fn to_array(&self) -> [i32; GRAPH_FEATURE_LEN] {
        let d = self.degree_histogram;
        let h = self.hop_histogram;
        [
            self.point_count,
            d[0],
            d[1],
            d[2],
            d[3],
            h[0],
            h[1],
            h[2],
            h[3],
            self.simple_junctions,
            self.complex_junctions,
            self.chain_length,
            self.width,
            self.height,
            self.aspect_ratio,
            self.density,
            self.symmetry,
            i32::from(self.plausible),
            self.trunk_size,
        ]
    }
}

/// Bucket the degrees of the valid points into 1, 2, 3 and 4+.
///
/// Isolated points (degree 0) fall in no bucket.
pub fn degree_histogram(points: &PointSet, degrees: &[usize]) -> [i32; 4] {
    let mut hist = [0; 4];
    for (i, _) in points.iter() {
        match degrees[i] {
            0 => {}
            1 => hist[0] += 1,
            2 => hist[1] += 1,
            3 => hist[2] += 1,
            _ => hist[3] += 1,
        }
    }
    hist
}

/// Count unordered pairs by hop distance: 1, 2, 3, and 4 or more.
///
/// Unreachable pairs are not counted.
pub fn hop_histogram(graph: &ProximityGraph<'_>) -> [i32; 4] {
    let points = graph.points();
    let mut hist = [0; 4];
    for (i, _) in points.iter() {
        let dist = graph.hop_distances(i);
        for (j, _) in points.iter() {
            if i == j {
                continue;
            }
            match dist[j] {
                1 => hist[0] += 1,
                2 => hist[1] += 1,
                3 => hist[2] += 1,
                d if d >= 4 && d < UNREACHABLE => hist[3] += 1,
                _ => {}
            }
        }
    }
    // every pair was seen from both ends
    hist.map(|c| c / 2)
}

/// Total edge count of the linear chains.
///
/// A chain is a maximal connected run of degree-2 points. A run of at
/// least two points contributes its point count minus one; a lone
/// degree-2 point contributes nothing.
pub fn chain_length(graph: &ProximityGraph<'_>, degrees: &[usize]) -> i32 {
    let points = graph.points();
    let n = points.slot_count();
    let mut visited = vec![false; n];
    let mut total = 0;

    for (start, _) in points.iter() {
        if degrees[start] != 2 || visited[start] {
            continue;
        }
        visited[start] = true;
        let mut stack = vec![start];
        let mut run = 0;

        while let Some(v) = stack.pop() {
            run += 1;
            for w in graph.neighbors(v) {
                if degrees[w] == 2 && !visited[w] {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }

        if run >= 2 {
            total += run - 1;
        }
    }

    total
}

/// Share of points, x10, that have another point of the same degree whose
/// distance to the centroid differs by less than `tolerance`.
pub fn structural_symmetry(points: &PointSet, degrees: &[usize], tolerance: f64) -> i32 {
    let Some((cx, cy)) = points.centroid() else {
        return 0;
    };
    let radii: Vec<(usize, f64)> = points
        .iter()
        .map(|(i, p)| {
            let dx = f64::from(p.x) - cx;
            let dy = f64::from(p.y) - cy;
            (i, (dx * dx + dy * dy).sqrt())
        })
        .collect();

    let matched = radii
        .iter()
        .filter(|&&(i, ri)| {
            radii
                .iter()
                .any(|&(j, rj)| j != i && degrees[j] == degrees[i] && (ri - rj).abs() < tolerance)
        })
        .count();

    (matched * 10 / radii.len()) as i32
}

/// Points inside the central region spanning 20-80% of the width and
/// 30-70% of the height of the bounding box. 0 for fewer than 3 points.
pub fn trunk_size(points: &PointSet) -> i32 {
    if points.len() < 3 {
        return 0;
    }
    let Some(bbox) = points.bounding_box() else {
        return 0;
    };
    let w = f64::from(bbox.width());
    let h = f64::from(bbox.height());
    let (x0, x1) = (
        f64::from(bbox.min_x) + 0.2 * w,
        f64::from(bbox.min_x) + 0.8 * w,
    );
    let (y0, y1) = (
        f64::from(bbox.min_y) + 0.3 * h,
        f64::from(bbox.min_y) + 0.7 * h,
    );

    points
        .points()
        .filter(|p| {
            let (x, y) = (f64::from(p.x), f64::from(p.y));
            x >= x0 && x <= x1 && y >= y0 && y <= y1
        })
        .count() as i32
}

/// Apply the plausibility gate to already computed features.
///
/// The checks run in order: point count, extremities, junctions, one-hop
/// paths, aspect-ratio ceiling, density floor.
pub fn passes_gate(features: &GraphFeatures, gate: &PlausibilityGate) -> bool {
    features.point_count >= gate.min_points
        && features.degree_histogram[0] >= gate.min_extremities
        && features.degree_histogram[2] >= gate.min_junctions
        && features.hop_histogram[0] >= gate.min_one_hop_paths
        && features.aspect_ratio <= gate.max_aspect_ratio
        && features.density >= gate.min_density
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tight(radius: f64) -> AnalysisParams {
        AnalysisParams::default().with_tight_radius(radius)
    }

    #[test]
    fn test_three_point_line() {
        let set = PointSet::from_points([(0, 0), (10, 0), (20, 0)]).unwrap();
        let f = GraphFeatures::compute(&set, &tight(12.0));
        assert_eq!(f.degree_histogram, [2, 1, 0, 0]);
        assert_eq!(f.hop_histogram, [2, 1, 0, 0]);
        // the middle point is a lone degree-2 run
        assert_eq!(f.chain_length, 0);
        assert_eq!(f.aspect_ratio, 0);
        assert_eq!(f.density, 0);
    }

    #[test]
    fn test_long_chain() {
        // 1-2-2-2-1: the inner run has three points
        let set = PointSet::from_points((0..5).map(|i| (i * 20, 0))).unwrap();
        let f = GraphFeatures::compute(&set, &AnalysisParams::default());
        assert_eq!(f.degree_histogram, [2, 3, 0, 0]);
        assert_eq!(f.chain_length, 2);
        assert_eq!(f.hop_histogram, [4, 3, 2, 1]);
    }

    #[test]
    fn test_triangle_is_one_run() {
        // all three points see each other at radius 25
        let set = PointSet::from_points([(0, 0), (10, 0), (20, 0)]).unwrap();
        let f = GraphFeatures::compute(&set, &AnalysisParams::default());
        assert_eq!(f.degree_histogram, [0, 3, 0, 0]);
        assert_eq!(f.hop_histogram, [3, 0, 0, 0]);
        assert_eq!(f.chain_length, 2);
    }

    #[test]
    fn test_separate_runs_add_up() {
        // two five-point lines far apart, each with an inner run of three
        let left = (0..5).map(|i| (i * 20, 0));
        let right = (0..5).map(|i| (i * 20, 300));
        let set = PointSet::from_points(left.chain(right)).unwrap();
        let graph = ProximityGraph::new(&set, 25.0);
        assert_eq!(chain_length(&graph, &graph.degrees()), 4);
    }

    #[test]
    fn test_unreachable_pairs_not_counted() {
        let set = PointSet::from_points([(0, 0), (20, 0), (500, 0)]).unwrap();
        let f = GraphFeatures::compute(&set, &AnalysisParams::default());
        assert_eq!(f.hop_histogram, [1, 0, 0, 0]);
    }

    #[test]
    fn test_gate_order() {
        let mut f = GraphFeatures {
            point_count: 10,
            degree_histogram: [2, 5, 1, 0],
            hop_histogram: [8, 0, 0, 0],
            aspect_ratio: 5,
            density: 80,
            ..GraphFeatures::default()
        };
        let gate = PlausibilityGate::default();
        assert!(passes_gate(&f, &gate));
        f.aspect_ratio = 21;
        assert!(!passes_gate(&f, &gate));
        f.aspect_ratio = 20;
        f.density = 49;
        assert!(!passes_gate(&f, &gate));
        f.density = 50;
        f.degree_histogram[2] = 0;
        assert!(!passes_gate(&f, &gate));
    }

    #[test]
    fn test_trunk_region() {
        let set = PointSet::from_points([(0, 0), (100, 100), (50, 50), (50, 10)]).unwrap();
        assert_eq!(trunk_size(&set), 1);
        let two = PointSet::from_points([(0, 0), (50, 50)]).unwrap();
        assert_eq!(trunk_size(&two), 0);
    }

    #[test]
    fn test_empty() {
        let f = GraphFeatures::compute(&PointSet::new(), &AnalysisParams::default());
        assert_eq!(f.to_array(), [0; GRAPH_FEATURE_LEN]);
    }
}
