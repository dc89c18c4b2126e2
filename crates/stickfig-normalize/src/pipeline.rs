//! Normalization pipeline
//!
//! Runs noise filter, crop and orientation in order and keeps every
//! intermediate set so callers can inspect or render the stages.

use stickfig_core::{AnalysisParams, PointSet};
use tracing::debug;

use crate::crop::crop;
use crate::error::NormalizeResult;
use crate::noise::remove_noise;
use crate::orient::{Orientation, orient};

/// Every stage of one normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSketch {
    /// Largest component of the raw input
    pub filtered: PointSet,
    /// Filtered set moved to the crop origin
    pub cropped: PointSet,
    /// Cropped set rotated upright
    pub oriented: PointSet,
    /// Axis estimate, `None` when there were too few points
    pub orientation: Option<Orientation>,
}

impl NormalizedSketch {
    /// The final, fully normalized point set.
    pub fn points(&self) -> &PointSet {
        &self.oriented
    }
}

/// Normalization pipeline bound to a validated set of parameters.
#[derive(Debug, Clone)]
pub struct Normalizer {
    params: AnalysisParams,
}

impl Normalizer {
    /// Create a normalizer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NormalizeError::Core`] if the parameters are invalid.
    pub fn new(params: AnalysisParams) -> NormalizeResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameters in use.
    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Run noise filter, crop and orientation on `raw`.
    ///
    /// The input is never modified.
    pub fn run(&self, raw: &PointSet) -> NormalizedSketch {
        let filtered = remove_noise(raw, self.params.loose_radius);
        let cropped = crop(&filtered, self.params.crop_margin);
        let (oriented, orientation) = orient(&cropped, self.params.orientation_tolerance_deg);

        debug!(
            raw = raw.len(),
            kept = oriented.len(),
            "Normalized sketch"
        );

        NormalizedSketch {
            filtered,
            cropped,
            oriented,
            orientation,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            params: AnalysisParams::default(),
        }
    }
}

/// Normalize `raw` with `params` and return the final point set.
///
/// # Errors
///
/// Returns [`crate::NormalizeError::Core`] if the parameters are invalid.
pub fn normalize(raw: &PointSet, params: &AnalysisParams) -> NormalizeResult<PointSet> {
    let normalizer = Normalizer::new(params.clone())?;
    Ok(normalizer.run(raw).oriented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_rejected() {
        let params = AnalysisParams::default().with_loose_radius(-1.0);
        assert!(Normalizer::new(params).is_err());
    }

    #[test]
    fn test_empty_input() {
        let sketch = Normalizer::default().run(&PointSet::new());
        assert!(sketch.oriented.is_empty());
        assert!(sketch.orientation.is_none());
    }

    #[test]
    fn test_input_not_modified() {
        let raw = PointSet::from_points([(200, 200), (220, 200), (240, 200), (900, 900)]).unwrap();
        let before = raw.clone();
        let sketch = Normalizer::default().run(&raw);
        assert_eq!(raw, before);
        assert_eq!(sketch.filtered.len(), 3);
        assert_eq!(sketch.cropped.bounding_box().unwrap().min_x, 10);
    }
}
