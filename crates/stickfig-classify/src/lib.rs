//! stickfig-classify - Linear scoring of sketch features
//!
//! A two-unit linear scorer whose weights are an ordinary value owned by
//! the caller:
//!
//! - [`LinearModel`] - Output and hidden weights
//! - [`score`] - Clamped forward pass and threshold decision
//! - [`train`] - One online gradient step, returning a new model
//! - [`scale_input`] - Per-variant scaling of raw feature vectors
//!
//! # Examples
//!
//! ```
//! use stickfig_classify::{LinearModel, score};
//!
//! let model = LinearModel::new(2);
//! let activation = score(&model, &[1.0, 1.0], 0.0).unwrap();
//! assert!(activation.decision);
//! ```

pub mod error;
pub mod model;
pub mod scale;

pub use stickfig_features;

pub use error::{ClassifyError, ClassifyResult};
pub use model::{
    Activation, DEFAULT_LEARNING_RATE, HIDDEN_LIMIT, INITIAL_WEIGHT, LinearModel, MAX_WEIGHT,
    PRODUCT_LIMIT, score, train,
};
pub use scale::{scale_input, score_sketch};
