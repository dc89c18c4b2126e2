//! Pixel-grid features
//!
//! Dots are drawn as discs on a padded canvas which is resampled to a
//! `size x size` ink-coverage grid.

use stickfig_core::{AnalysisParams, PointSet};
use stickfig_raster::{ink_coverage, render_dots};
use tracing::debug;

use crate::error::FeatureResult;

/// Length of the pixel vector for the configured grid size.
pub fn pixel_feature_len(params: &AnalysisParams) -> usize {
    let size = params.pixel_grid_size as usize;
    size * size
}

/// Compute the row-major ink-coverage grid of a normalized point set.
///
/// An empty set yields all zeros.
pub fn pixel_features(points: &PointSet, params: &AnalysisParams) -> FeatureResult<Vec<f64>> {
    if points.is_empty() {
        return Ok(vec![0.0; pixel_feature_len(params)]);
    }
    let canvas = render_dots(points, params.pixel_padding, params.pixel_dot_radius)?;
    debug!(
        width = canvas.width(),
        height = canvas.height(),
        size = params.pixel_grid_size,
        "Rendered dot canvas"
    );
    Ok(ink_coverage(&canvas, params.pixel_grid_size)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_grid() {
        let set = PointSet::from_points([(0, 0), (40, 80)]).unwrap();
        let params = AnalysisParams::default();
        let v = pixel_features(&set, &params).unwrap();
        assert_eq!(v.len(), 2500);
        assert!(v.iter().all(|&x| (0.0..=1.0).contains(&x)));
        assert!(v.iter().any(|&x| x > 0.5));
        assert!(v.iter().any(|&x| x == 0.0));
    }

    #[test]
    fn test_empty() {
        let v = pixel_features(&PointSet::new(), &AnalysisParams::default()).unwrap();
        assert_eq!(v, vec![0.0; 2500]);
    }
}
