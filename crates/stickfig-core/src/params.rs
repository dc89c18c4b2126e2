//! Analysis parameters
//!
//! Every threshold in the pipeline is an empirically calibrated constant.
//! They are collected here as named defaults so callers can tune them
//! without touching the algorithms.

use crate::error::{Error, Result};

/// Connectivity radius used to find the main component.
pub const DEFAULT_LOOSE_RADIUS: f64 = 60.0;
/// Connectivity radius used for degree, hop and chain analysis.
pub const DEFAULT_TIGHT_RADIUS: f64 = 25.0;
/// Connectivity radius used to group points into body parts.
pub const DEFAULT_GROUP_RADIUS: f64 = 30.0;
/// Margin added around the bounding box when cropping.
pub const DEFAULT_CROP_MARGIN: i32 = 10;
/// Tilt below which no rotation is applied, in degrees.
pub const DEFAULT_ORIENTATION_TOLERANCE_DEG: f64 = 5.0;
/// Radial-distance tolerance for the structural symmetry score.
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 20.0;

/// Thresholds of the structural plausibility gate.
///
/// A sketch passes when it has enough points, extremities, junctions and
/// one-hop paths, is not too wide for its height, and is dense enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibilityGate {
    /// Minimum number of valid points
    pub min_points: i32,
    /// Minimum number of degree-1 points
    pub min_extremities: i32,
    /// Minimum number of degree-3 points
    pub min_junctions: i32,
    /// Minimum number of one-hop pairs
    pub min_one_hop_paths: i32,
    /// Maximum of `width * 10 / height`
    pub max_aspect_ratio: i32,
    /// Minimum of `count * 10000 / area`
    pub min_density: i32,
}

impl Default for PlausibilityGate {
    fn default() -> Self {
        Self {
            min_points: 3,
            min_extremities: 1,
            min_junctions: 1,
            min_one_hop_paths: 2,
            max_aspect_ratio: 20,
            min_density: 50,
        }
    }
}

/// Options for one analysis pass.
///
/// # Examples
///
/// ```
/// use stickfig_core::AnalysisParams;
///
/// let params = AnalysisParams::default().with_tight_radius(12.0);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.loose_radius, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisParams {
    /// Noise-filter connectivity radius
    pub loose_radius: f64,
    /// Structural connectivity radius
    pub tight_radius: f64,
    /// Body-part grouping radius
    pub group_radius: f64,
    /// Crop margin on every side
    pub crop_margin: i32,
    /// Orientation dead band in degrees
    pub orientation_tolerance_deg: f64,
    /// Radial tolerance for the symmetry score
    pub symmetry_tolerance: f64,
    /// Plausibility gate thresholds
    pub gate: PlausibilityGate,
    /// Half-size of the square stamped around each point when rasterizing
    pub dilation_radius: i32,
    /// Padding around the bounding box of the pixel canvas
    pub pixel_padding: i32,
    /// Radius of the filled dot drawn for each point on the pixel canvas
    pub pixel_dot_radius: i32,
    /// Side of the resampled pixel grid
    pub pixel_grid_size: u32,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            loose_radius: DEFAULT_LOOSE_RADIUS,
            tight_radius: DEFAULT_TIGHT_RADIUS,
            group_radius: DEFAULT_GROUP_RADIUS,
            crop_margin: DEFAULT_CROP_MARGIN,
            orientation_tolerance_deg: DEFAULT_ORIENTATION_TOLERANCE_DEG,
            symmetry_tolerance: DEFAULT_SYMMETRY_TOLERANCE,
            gate: PlausibilityGate::default(),
            dilation_radius: 2,
            pixel_padding: 20,
            pixel_dot_radius: 5,
            pixel_grid_size: 50,
        }
    }
}

impl AnalysisParams {
    /// Set the noise-filter radius.
    pub fn with_loose_radius(mut self, radius: f64) -> Self {
        self.loose_radius = radius;
        self
    }

    /// Set the structural radius.
    pub fn with_tight_radius(mut self, radius: f64) -> Self {
        self.tight_radius = radius;
        self
    }

    /// Set the grouping radius.
    pub fn with_group_radius(mut self, radius: f64) -> Self {
        self.group_radius = radius;
        self
    }

    /// Set the crop margin.
    pub fn with_crop_margin(mut self, margin: i32) -> Self {
        self.crop_margin = margin;
        self
    }

    /// Set the orientation dead band.
    pub fn with_orientation_tolerance(mut self, degrees: f64) -> Self {
        self.orientation_tolerance_deg = degrees;
        self
    }

    /// Set the plausibility gate.
    pub fn with_gate(mut self, gate: PlausibilityGate) -> Self {
        self.gate = gate;
        self
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let radii = [
            ("loose_radius", self.loose_radius),
            ("tight_radius", self.tight_radius),
            ("group_radius", self.group_radius),
            ("symmetry_tolerance", self.symmetry_tolerance),
        ];
        for (name, value) in radii {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if !self.orientation_tolerance_deg.is_finite() || self.orientation_tolerance_deg < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "orientation_tolerance_deg must be non-negative, got {}",
                self.orientation_tolerance_deg
            )));
        }
        let non_negative = [
            ("crop_margin", self.crop_margin),
            ("dilation_radius", self.dilation_radius),
            ("pixel_padding", self.pixel_padding),
            ("pixel_dot_radius", self.pixel_dot_radius),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(Error::InvalidParameter(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        if self.pixel_grid_size == 0 {
            return Err(Error::InvalidParameter(
                "pixel_grid_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let params = AnalysisParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.tight_radius, 25.0);
        assert_eq!(params.gate.min_density, 50);
    }

    #[test]
    fn test_rejects_bad_radius() {
        let params = AnalysisParams::default().with_tight_radius(0.0);
        assert!(matches!(params.validate(), Err(Error::InvalidParameter(_))));
        let params = AnalysisParams::default().with_loose_radius(f64::NAN);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_margin() {
        let params = AnalysisParams::default().with_crop_margin(-1);
        assert!(params.validate().is_err());
    }
}
