//! Linear scorer
//!
//! Two hidden sums over the input, combined by two output weights and
//! thresholded. Every product and sum is clamped so a hostile input can
//! not overflow the score.
//!
//! The model is a plain value: [`score`] reads it, [`train`] returns an
//! updated copy.

use stickfig_core::finite_or_zero;
use tracing::debug;

use crate::error::{ClassifyError, ClassifyResult};

/// Value every weight starts from.
pub const INITIAL_WEIGHT: f64 = 0.1;

/// Largest accepted absolute weight in [`LinearModel::from_weights`].
pub const MAX_WEIGHT: f64 = 10.0;

/// Bound on a single weight-input product.
pub const PRODUCT_LIMIT: f64 = 100.0;

/// Bound on each hidden sum.
pub const HIDDEN_LIMIT: f64 = 1000.0;

/// Step size of one training update.
pub const DEFAULT_LEARNING_RATE: f64 = 0.02;

/// Output weights and per-input hidden weights.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Output weight of the first hidden sum
    pub w1: f64,
    /// Output weight of the second hidden sum
    pub w2: f64,
    /// Input weights of the first hidden sum
    pub v1: Vec<f64>,
    /// Input weights of the second hidden sum
    pub v2: Vec<f64>,
}

impl LinearModel {
    /// Model for `input_len` inputs with every weight at [`INITIAL_WEIGHT`].
    pub fn new(input_len: usize) -> Self {
        Self {
            w1: INITIAL_WEIGHT,
            w2: INITIAL_WEIGHT,
            v1: vec![INITIAL_WEIGHT; input_len],
            v2: vec![INITIAL_WEIGHT; input_len],
        }
    }

    /// Model from explicit weights.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::InvalidWeights`] if `v1` and `v2` differ in
    /// length or any weight is non-finite or larger than [`MAX_WEIGHT`].
    pub fn from_weights(w1: f64, w2: f64, v1: Vec<f64>, v2: Vec<f64>) -> ClassifyResult<Self> {
        if v1.len() != v2.len() {
            return Err(ClassifyError::InvalidWeights(format!(
                "hidden weight lengths differ: {} vs {}",
                v1.len(),
                v2.len()
            )));
        }
        let all = [w1, w2].into_iter().chain(v1.iter().copied()).chain(v2.iter().copied());
        for w in all {
            if !w.is_finite() || w.abs() > MAX_WEIGHT {
                return Err(ClassifyError::InvalidWeights(format!(
                    "weight {w} outside [-{MAX_WEIGHT}, {MAX_WEIGHT}]"
                )));
            }
        }
        Ok(Self { w1, w2, v1, v2 })
    }

    /// Number of inputs the model expects.
    pub fn input_len(&self) -> usize {
        self.v1.len()
    }

    fn check_input(&self, input: &[f64]) -> ClassifyResult<()> {
        if input.len() != self.input_len() {
            return Err(ClassifyError::InputLength {
                expected: self.input_len(),
                actual: input.len(),
            });
        }
        Ok(())
    }
}

/// Intermediate and final values of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    /// First hidden sum
    pub h1: f64,
    /// Second hidden sum
    pub h2: f64,
    /// Output, `w1 * h1 + w2 * h2`
    pub y: f64,
    /// `y > threshold`
    pub decision: bool,
}

fn usable_weight(w: f64) -> f64 {
    if w.is_finite() { w } else { INITIAL_WEIGHT }
}

fn clamp_magnitude(value: f64, limit: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value.abs() > limit {
        value.signum() * limit
    } else {
        value
    }
}

fn hidden_sum(weights: &[f64], input: &[f64]) -> f64 {
    let sum: f64 = weights
        .iter()
        .zip(input)
        .map(|(&w, &x)| clamp_magnitude(usable_weight(w) * finite_or_zero(x), PRODUCT_LIMIT))
        .sum();
    clamp_magnitude(sum, HIDDEN_LIMIT)
}

/// Score `input` with `model`.
///
/// Non-finite weights count as [`INITIAL_WEIGHT`] and non-finite inputs
/// as 0.
///
/// # Errors
///
/// Returns [`ClassifyError::InputLength`] if `input` does not match the model.
pub fn score(model: &LinearModel, input: &[f64], threshold: f64) -> ClassifyResult<Activation> {
    model.check_input(input)?;
    let h1 = hidden_sum(&model.v1, input);
    let h2 = hidden_sum(&model.v2, input);
    let y = finite_or_zero(usable_weight(model.w1) * h1 + usable_weight(model.w2) * h2);
    let decision = y > threshold;
    debug!(h1, h2, y, threshold, decision, "Scored input");
    Ok(Activation { h1, h2, y, decision })
}

/// One online gradient step toward `target`, returning the updated model.
///
/// Updates that would produce a non-finite weight are skipped.
///
/// # Errors
///
/// Returns [`ClassifyError::InputLength`] if `input` does not match the model.
pub fn train(
    model: &LinearModel,
    input: &[f64],
    target: f64,
    threshold: f64,
    rate: f64,
) -> ClassifyResult<LinearModel> {
    let activation = score(model, input, threshold)?;
    let err = target - activation.y;
    let mut next = model.clone();
    if !err.is_finite() {
        return Ok(next);
    }

    let step = |w: &mut f64, delta: f64| {
        if delta.is_finite() && (*w + delta).is_finite() {
            *w += delta;
        }
    };
    for ((v1, v2), &x) in next.v1.iter_mut().zip(next.v2.iter_mut()).zip(input) {
        let delta = rate * err * x;
        step(v1, delta);
        step(v2, delta);
    }
    step(&mut next.w1, rate * err * activation.h1);
    step(&mut next.w2, rate * err * activation.h2);

    debug!(target, y = activation.y, err, "Trained one step");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_score() {
        let model = LinearModel::new(3);
        let a = score(&model, &[1.0, 2.0, 3.0], 0.5).unwrap();
        assert!((a.h1 - 0.6).abs() < 1e-12);
        assert!((a.h2 - 0.6).abs() < 1e-12);
        assert!((a.y - 0.12).abs() < 1e-12);
        assert!(!a.decision);
    }

    #[test]
    fn test_products_are_clamped() {
        let model = LinearModel::new(2);
        let a = score(&model, &[1e6, f64::NAN], 0.0).unwrap();
        assert_eq!(a.h1, 100.0);
        assert!((a.y - 20.0).abs() < 1e-12);
        assert!(a.decision);
    }

    #[test]
    fn test_hidden_sum_is_clamped() {
        let model = LinearModel::new(20);
        let a = score(&model, &[1e4; 20], 0.0).unwrap();
        assert_eq!(a.h1, 1000.0);
    }

    #[test]
    fn test_input_length_checked() {
        let model = LinearModel::new(3);
        assert!(matches!(
            score(&model, &[1.0], 0.5),
            Err(ClassifyError::InputLength { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn test_train_moves_toward_target() {
        let model = LinearModel::new(3);
        let input = [1.0, 0.5, 0.0];
        let before = score(&model, &input, 0.5).unwrap().y;
        let trained = train(&model, &input, 1.0, 0.5, DEFAULT_LEARNING_RATE).unwrap();
        let after = score(&trained, &input, 0.5).unwrap().y;
        assert!(after > before);
        // zero input leaves its weights alone
        assert_eq!(trained.v1[2], INITIAL_WEIGHT);
        assert_eq!(model.v1[0], INITIAL_WEIGHT);
    }

    #[test]
    fn test_from_weights_validation() {
        assert!(LinearModel::from_weights(0.1, 0.1, vec![0.0; 2], vec![0.0; 3]).is_err());
        assert!(LinearModel::from_weights(f64::NAN, 0.1, vec![], vec![]).is_err());
        assert!(LinearModel::from_weights(0.1, 11.0, vec![], vec![]).is_err());
        let m = LinearModel::from_weights(0.5, -0.5, vec![1.0], vec![2.0]).unwrap();
        assert_eq!(m.input_len(), 1);
    }
}
