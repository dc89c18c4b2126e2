//! Invariant moment features
//!
//! Shape descriptors computed from the point positions alone, independent
//! of the proximity graph: the seven Hu invariants plus circularity,
//! elongation and compactness.

use stickfig_core::{PointSet, finite_or_zero};

/// Number of values in a moment feature vector.
pub const MOMENT_FEATURE_LEN: usize = 10;

/// Fewer points than this give an all-zero vector.
pub const MIN_MOMENT_POINTS: usize = 3;

/// Central moments of a point set up to order 3.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CentralMoments {
    /// Point count (`m00`)
    pub m00: f64,
    /// Sum of `dx^2`
    pub mu20: f64,
    /// Sum of `dy^2`
    pub mu02: f64,
    /// Sum of `dx * dy`
    pub mu11: f64,
    /// Sum of `dx^3`
    pub mu30: f64,
    /// Sum of `dy^3`
    pub mu03: f64,
    /// Sum of `dx^2 * dy`
    pub mu21: f64,
    /// Sum of `dx * dy^2`
    pub mu12: f64,
}

impl CentralMoments {
    /// Compute moments about the centroid; `None` for an empty set.
    pub fn compute(points: &PointSet) -> Option<Self> {
        let (cx, cy) = points.centroid()?;
        let mut m = Self {
            m00: points.len() as f64,
            ..Self::default()
        };
        for p in points.points() {
            let dx = f64::from(p.x) - cx;
            let dy = f64::from(p.y) - cy;
            m.mu20 += dx * dx;
            m.mu02 += dy * dy;
            m.mu11 += dx * dy;
            m.mu30 += dx * dx * dx;
            m.mu03 += dy * dy * dy;
            m.mu21 += dx * dx * dy;
            m.mu12 += dx * dy * dy;
        }
        Some(m)
    }

    /// Scale-normalized moment `mu_pq / m00^((p+q)/2 + 1)`.
    fn eta(&self, mu: f64, order: i32) -> f64 {
        let exponent = f64::from(order) / 2.0 + 1.0;
        finite_or_zero(mu / self.m00.powf(exponent))
    }

    /// The seven Hu invariants.
    pub fn hu(&self) -> [f64; 7] {
        let n20 = self.eta(self.mu20, 2);
        let n02 = self.eta(self.mu02, 2);
        let n11 = self.eta(self.mu11, 2);
        let n30 = self.eta(self.mu30, 3);
        let n03 = self.eta(self.mu03, 3);
        let n21 = self.eta(self.mu21, 3);
        let n12 = self.eta(self.mu12, 3);

        let a = n30 + n12;
        let b = n21 + n03;
        let c = n30 - 3.0 * n12;
        let d = 3.0 * n21 - n03;

        [
            n20 + n02,
            (n20 - n02).powi(2) + 4.0 * n11 * n11,
            c * c + d * d,
            a * a + b * b,
            c * a * (a * a - 3.0 * b * b) + d * b * (3.0 * a * a - b * b),
            (n20 - n02) * (a * a - b * b) + 4.0 * n11 * a * b,
            d * a * (a * a - 3.0 * b * b) - c * b * (3.0 * a * a - b * b),
        ]
        .map(finite_or_zero)
    }

    /// Eigenvalues of the second-order covariance, larger first.
    pub fn eigenvalues(&self) -> (f64, f64) {
        let sum = self.mu20 + self.mu02;
        let delta = ((self.mu20 - self.mu02).powi(2) + 4.0 * self.mu11 * self.mu11).sqrt();
        ((sum + delta) / 2.0, (sum - delta) / 2.0)
    }

    /// Ratio of the larger to the smaller eigenvalue.
    ///
    /// A collinear set has no second axis; its elongation is 1, the same
    /// as a round set. The companion [`compactness`] gives 0 for the same
    /// zero-area case.
    pub fn elongation(&self) -> f64 {
        let (l1, l2) = self.eigenvalues();
        // rounding can leave a collinear set with a tiny positive l2
        if l2 <= l1.abs() * 1e-12 || l2 <= 0.0 {
            return 1.0;
        }
        finite_or_zero(l1 / l2)
    }
}

/// `1 - var / mean^2` of the centroid distances, clamped at 0.
pub fn circularity(points: &PointSet) -> f64 {
    let Some((cx, cy)) = points.centroid() else {
        return 0.0;
    };
    let radii: Vec<f64> = points
        .points()
        .map(|p| (f64::from(p.x) - cx).hypot(f64::from(p.y) - cy))
        .collect();
    let n = radii.len() as f64;
    let mean = radii.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return 0.0;
    }
    let var = radii.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    finite_or_zero((1.0 - var / (mean * mean)).max(0.0))
}

/// Point count per unit of bounding-box area.
///
/// A bounding box with no area, as for points on one row or column,
/// gives 0 rather than 1.
pub fn compactness(points: &PointSet) -> f64 {
    match points.bounding_box() {
        Some(bbox) if bbox.area() > 0 => points.len() as f64 / bbox.area() as f64,
        _ => 0.0,
    }
}

/// Compute `[hu1..hu7, circularity, elongation, compactness]`.
pub fn moment_features(points: &PointSet) -> Vec<f64> {
    if points.len() < MIN_MOMENT_POINTS {
        return vec![0.0; MOMENT_FEATURE_LEN];
    }
    let Some(m) = CentralMoments::compute(points) else {
        return vec![0.0; MOMENT_FEATURE_LEN];
    };

    let mut out = Vec::with_capacity(MOMENT_FEATURE_LEN);
    out.extend_from_slice(&m.hu());
    out.push(circularity(points));
    out.push(m.elongation());
    out.push(compactness(points));
    out.into_iter().map(finite_or_zero).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_points() {
        let one = PointSet::from_points([(50, 50)]).unwrap();
        assert_eq!(moment_features(&one), vec![0.0; MOMENT_FEATURE_LEN]);
        assert_eq!(moment_features(&PointSet::new()), vec![0.0; MOMENT_FEATURE_LEN]);
    }

    #[test]
    fn test_square_corners() {
        let set = PointSet::from_points([(0, 0), (10, 0), (0, 10), (10, 10)]).unwrap();
        let v = moment_features(&set);
        // all corners equidistant from the centroid
        assert!((v[7] - 1.0).abs() < 1e-12);
        assert!((v[8] - 1.0).abs() < 1e-12);
        assert!((v[9] - 0.04).abs() < 1e-12);
        // mu20 = mu02 = 100, eta = 100 / 16
        assert!((v[0] - 12.5).abs() < 1e-9);
        assert!(v[1].abs() < 1e-9);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let set = PointSet::from_points([(0, 0), (0, 10), (0, 20)]).unwrap();
        let m = CentralMoments::compute(&set).unwrap();
        assert_eq!(m.elongation(), 1.0);
        assert_eq!(compactness(&set), 0.0);
    }

    #[test]
    fn test_diagonal_line_is_degenerate() {
        // exactly collinear off the axes, where l2 is only rounding noise
        let set = PointSet::from_points((0..10).map(|i| (i * 7, i * 13))).unwrap();
        let v = moment_features(&set);
        assert_eq!(v[8], 1.0);
        assert!(v[9] > 0.0);
    }

    #[test]
    fn test_elongated_rectangle() {
        let set = PointSet::from_points([(0, 0), (2, 0), (0, 20), (2, 20)]).unwrap();
        let m = CentralMoments::compute(&set).unwrap();
        // mu20 = 4, mu02 = 400
        assert!((m.elongation() - 100.0).abs() < 1e-9);
    }
}
