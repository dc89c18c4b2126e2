//! Raster features
//!
//! Rasterizes the sketch into a [`BinaryGrid`] and describes the grid:
//! `[count, perimeter, area, spread x1000, eccentricity x1000, width,
//! height, width x10 / height]`.

use stickfig_core::{AnalysisParams, PointSet};
use stickfig_raster::BinaryGrid;

use crate::error::FeatureResult;

/// Number of values in a raster feature vector.
pub const RASTER_FEATURE_LEN: usize = 8;

/// Grid-based description of a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterFeatures {
    /// Valid point count
    pub point_count: i32,
    /// Boundary cells
    pub perimeter: i32,
    /// On cells
    pub area: i32,
    /// Grid radius of gyration x1000
    pub spread: i32,
    /// Grid eccentricity x1000
    pub eccentricity: i32,
    /// Bounding width of the points
    pub width: i32,
    /// Bounding height of the points
    pub height: i32,
    /// `width * 10 / height`, 0 when the height is 0
    pub aspect_ratio: i32,
}

impl RasterFeatures {
    /// Rasterize `points` with the configured dilation and measure the grid.
    ///
    /// An empty set yields all zeros.
    pub fn compute(points: &PointSet, params: &AnalysisParams) -> FeatureResult<Self> {
        let Some(bbox) = points.bounding_box() else {
            return Ok(Self::default());
        };
        let grid = BinaryGrid::rasterize(points, params.dilation_radius)?;

        let mut features = Self {
            point_count: points.len() as i32,
            perimeter: grid.perimeter() as i32,
            area: grid.count() as i32,
            width: bbox.width(),
            height: bbox.height(),
            ..Self::default()
        };
        if let Some(m) = grid.moments() {
            features.spread = (m.spread() * 1000.0) as i32;
            features.eccentricity = (m.eccentricity() * 1000.0) as i32;
        }
        if bbox.height() > 0 {
            features.aspect_ratio = bbox.width() * 10 / bbox.height();
        }
        Ok(features)
    }

    /// Flatten into the fixed-length layout.
    pub fn to_array(&self) -> [i32; RASTER_FEATURE_LEN] {
        [
            self.point_count,
            self.perimeter,
            self.area,
            self.spread,
            self.eccentricity,
            self.width,
            self.height,
            self.aspect_ratio,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dot() {
        let set = PointSet::from_points([(5, 5)]).unwrap();
        let f = RasterFeatures::compute(&set, &AnalysisParams::default()).unwrap();
        // a 1x1 grid: the dot has no empty neighbour inside the grid
        assert_eq!(f.to_array(), [1, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_empty() {
        let f = RasterFeatures::compute(&PointSet::new(), &AnalysisParams::default()).unwrap();
        assert_eq!(f.to_array(), [0; RASTER_FEATURE_LEN]);
    }
}
