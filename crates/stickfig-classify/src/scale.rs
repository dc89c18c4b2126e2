//! Input scaling
//!
//! Maps each extractor's raw vector into values of roughly [0, 1] so all
//! variants can feed the same [`LinearModel`].

use stickfig_core::{AnalysisParams, PointSet, finite_or_zero};
use stickfig_features::{ExtractorKind, FeatureVector, analyze};

use crate::error::ClassifyResult;
use crate::model::{Activation, LinearModel, score};

/// Per-index caps of the graph vector.
const GRAPH_CAPS: [f64; 19] = [
    40.0, 40.0, 40.0, 40.0, 40.0, 100.0, 100.0, 100.0, 100.0, 40.0, 40.0, 40.0, 400.0, 400.0,
    30.0, 1000.0, 10.0, 1.0, 40.0,
];

/// Per-index caps of the raster vector.
const RASTER_CAPS: [f64; 8] = [40.0, 2000.0, 5000.0, 100_000.0, 1000.0, 400.0, 400.0, 30.0];

/// Per-index caps of the invariant graph vector; the pattern flags cap at 1.
const INVARIANT_CAPS: [f64; 20] = [
    40.0, 40.0, 10.0, 1.0, 400.0, 40.0, 40.0, 1.0, 40.0, 1.0, 40.0, 100.0, 1.0, 1.0, 1.0, 1.0,
    1.0, 1.0, 1.0, 1.0,
];

/// Cap of every relational value and of values past the end of a cap table.
const DEFAULT_CAP: f64 = 100.0;

fn capped(value: f64, cap: f64) -> f64 {
    finite_or_zero(value.clamp(0.0, cap) / cap)
}

fn with_caps(values: &[f64], caps: &[f64]) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| capped(v, caps.get(i).copied().unwrap_or(DEFAULT_CAP)))
        .collect()
}

/// Scale a raw feature vector of `kind` into model input.
///
/// Per-point, pixel and coarse vectors are already in [0, 1] and pass
/// through. Count-like values are divided by a per-index cap after
/// clamping to `[0, cap]`. Moment invariants pass through except
/// elongation (capped at 100) and compactness (capped at 1).
pub fn scale_input(kind: ExtractorKind, features: &FeatureVector) -> Vec<f64> {
    let values = features.to_reals();
    match kind {
        ExtractorKind::PerPoint | ExtractorKind::Pixel | ExtractorKind::Coarse => {
            values.into_iter().map(finite_or_zero).collect()
        }
        ExtractorKind::Graph => with_caps(&values, &GRAPH_CAPS),
        ExtractorKind::Raster => with_caps(&values, &RASTER_CAPS),
        ExtractorKind::Relational => with_caps(&values, &[]),
        ExtractorKind::InvariantGraph => with_caps(&values, &INVARIANT_CAPS),
        ExtractorKind::Moments => values
            .iter()
            .enumerate()
            .map(|(i, &v)| match i {
                8 => capped(v, 100.0),
                9 => finite_or_zero(v.clamp(0.0, 1.0)),
                _ => finite_or_zero(v),
            })
            .collect(),
    }
}

/// Normalize `raw`, extract `kind` features, scale them and score.
///
/// # Errors
///
/// Returns [`crate::ClassifyError::Feature`] for invalid parameters and
/// [`crate::ClassifyError::InputLength`] if the model was built for a
/// different variant.
pub fn score_sketch(
    raw: &PointSet,
    kind: ExtractorKind,
    model: &LinearModel,
    params: &AnalysisParams,
    threshold: f64,
) -> ClassifyResult<Activation> {
    let features = analyze(raw, kind, params)?;
    score(model, &scale_input(kind, &features), threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_caps() {
        let mut raw = vec![0; 19];
        raw[0] = 13;
        raw[12] = 800;
        raw[17] = 1;
        raw[14] = -3;
        let scaled = scale_input(ExtractorKind::Graph, &FeatureVector::from(raw));
        assert_eq!(scaled.len(), 19);
        assert!((scaled[0] - 13.0 / 40.0).abs() < 1e-12);
        assert_eq!(scaled[12], 1.0);
        assert_eq!(scaled[17], 1.0);
        assert_eq!(scaled[14], 0.0);
    }

    #[test]
    fn test_moments_scaling() {
        let mut raw = vec![0.5; 10];
        raw[8] = 7550.0;
        raw[9] = 0.04;
        let scaled = scale_input(ExtractorKind::Moments, &FeatureVector::from(raw));
        assert_eq!(scaled[0], 0.5);
        assert_eq!(scaled[8], 1.0);
        assert_eq!(scaled[9], 0.04);
    }

    #[test]
    fn test_invariant_caps() {
        let mut raw = vec![0; 20];
        raw[0] = 3;
        raw[4] = 127;
        raw[14] = 1;
        let scaled = scale_input(ExtractorKind::InvariantGraph, &FeatureVector::from(raw));
        assert_eq!(scaled.len(), 20);
        assert!((scaled[0] - 3.0 / 40.0).abs() < 1e-12);
        assert!((scaled[4] - 127.0 / 400.0).abs() < 1e-12);
        assert_eq!(scaled[14], 1.0);
        assert!(scaled.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_pass_through() {
        let raw = FeatureVector::from(vec![0.25, 1.0, 0.0]);
        assert_eq!(scale_input(ExtractorKind::Pixel, &raw), vec![0.25, 1.0, 0.0]);
    }
}
