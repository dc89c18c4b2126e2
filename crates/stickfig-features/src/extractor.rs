//! Feature extractor family
//!
//! Every variant consumes the same normalized point set and produces a
//! fixed-length [`FeatureVector`]. [`ExtractorKind`] selects the variant;
//! [`analyze`] runs normalization and one extractor in a single call.

use std::fmt;

use stickfig_core::{AnalysisParams, PointSet};
use stickfig_normalize::Normalizer;
use tracing::debug;

use crate::coarse::{COARSE_FEATURE_LEN, coarse_features};
use crate::error::FeatureResult;
use crate::graph::{GRAPH_FEATURE_LEN, GraphFeatures};
use crate::invariant::{INVARIANT_FEATURE_LEN, invariant_features};
use crate::moments::{MOMENT_FEATURE_LEN, moment_features};
use crate::per_point::{PER_POINT_FEATURE_LEN, per_point_features};
use crate::pixel::{pixel_feature_len, pixel_features};
use crate::raster::{RASTER_FEATURE_LEN, RasterFeatures};
use crate::relational::{RELATIONAL_FEATURE_LEN, relational_features};
use crate::vector::FeatureVector;

/// Turns a normalized point set into a fixed-length vector.
pub trait FeatureExtractor {
    /// Length of every vector this extractor produces under `params`.
    fn output_len(&self, params: &AnalysisParams) -> usize;

    /// Extract features from an already normalized point set.
    fn extract(&self, points: &PointSet, params: &AnalysisParams) -> FeatureResult<FeatureVector>;
}

/// Available extractor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtractorKind {
    /// Degree, hop and geometry counts (19 integers)
    #[default]
    Graph,
    /// Degree and anchor hop distance per slot (80 reals)
    PerPoint,
    /// Hu invariants, circularity, elongation, compactness (10 reals)
    Moments,
    /// Binary grid perimeter, area and moments (8 integers)
    Raster,
    /// Body-part group relations (30 integers)
    Relational,
    /// Resampled dot canvas (grid size squared reals)
    Pixel,
    /// 5x5 occupancy, densest side up (25 integers)
    Coarse,
    /// Component counts, gaps and structural patterns (20 integers)
    InvariantGraph,
}

impl ExtractorKind {
    /// Every variant, in declaration order.
    pub const ALL: [ExtractorKind; 8] = [
        Self::Graph,
        Self::PerPoint,
        Self::Moments,
        Self::Raster,
        Self::Relational,
        Self::Pixel,
        Self::Coarse,
        Self::InvariantGraph,
    ];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::PerPoint => "per-point",
            Self::Moments => "moments",
            Self::Raster => "raster",
            Self::Relational => "relational",
            Self::Pixel => "pixel",
            Self::Coarse => "coarse",
            Self::InvariantGraph => "invariant-graph",
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FeatureExtractor for ExtractorKind {
    fn output_len(&self, params: &AnalysisParams) -> usize {
        match self {
            Self::Graph => GRAPH_FEATURE_LEN,
            Self::PerPoint => PER_POINT_FEATURE_LEN,
            Self::Moments => MOMENT_FEATURE_LEN,
            Self::Raster => RASTER_FEATURE_LEN,
            Self::Relational => RELATIONAL_FEATURE_LEN,
            Self::Pixel => pixel_feature_len(params),
            Self::Coarse => COARSE_FEATURE_LEN,
            Self::InvariantGraph => INVARIANT_FEATURE_LEN,
        }
    }

    fn extract(&self, points: &PointSet, params: &AnalysisParams) -> FeatureResult<FeatureVector> {
        let vector: FeatureVector = match self {
            Self::Graph => GraphFeatures::compute(points, params).to_array().to_vec().into(),
            Self::PerPoint => per_point_features(points, params).into(),
            Self::Moments => moment_features(points).into(),
            Self::Raster => RasterFeatures::compute(points, params)?
                .to_array()
                .to_vec()
                .into(),
            Self::Relational => relational_features(points, params).into(),
            Self::Pixel => pixel_features(points, params)?.into(),
            Self::Coarse => coarse_features(points).into(),
            Self::InvariantGraph => invariant_features(points, params).into(),
        };
        debug!(kind = self.name(), len = vector.len(), "Extracted features");
        Ok(vector)
    }
}

/// Normalize `raw` and run the `kind` extractor on the result.
///
/// The input is never modified.
///
/// # Errors
///
/// Returns [`crate::FeatureError::Normalize`] if `params` is invalid.
pub fn analyze(
    raw: &PointSet,
    kind: ExtractorKind,
    params: &AnalysisParams,
) -> FeatureResult<FeatureVector> {
    let sketch = Normalizer::new(params.clone())?.run(raw);
    kind.extract(sketch.points(), params)
}

/// Normalize `raw` once and run every extractor on the result.
///
/// # Errors
///
/// Returns [`crate::FeatureError::Normalize`] if `params` is invalid.
pub fn analyze_all(
    raw: &PointSet,
    params: &AnalysisParams,
) -> FeatureResult<Vec<(ExtractorKind, FeatureVector)>> {
    let sketch = Normalizer::new(params.clone())?.run(raw);
    ExtractorKind::ALL
        .iter()
        .map(|&kind| Ok((kind, kind.extract(sketch.points(), params)?)))
        .collect()
}
