//! stickfig - Stick-figure sketch analysis
//!
//! Turns a loose set of hand-placed dots into fixed-length numeric vectors
//! suitable for a simple classifier.
//!
//! # Overview
//!
//! - Noise filtering, cropping and orientation of raw sketches
//! - Graph, per-point, moment, raster, relational, pixel, coarse and
//!   invariant-graph feature extractors
//! - A two-unit linear scorer with caller-owned weights
//!
//! # Example
//!
//! ```
//! use stickfig::features::{ExtractorKind, analyze};
//! use stickfig::{AnalysisParams, PointSet};
//!
//! let raw = PointSet::from_points([(40, 0), (40, 20), (20, 20), (60, 20), (40, 40)]).unwrap();
//! let moments = analyze(&raw, ExtractorKind::Moments, &AnalysisParams::default()).unwrap();
//! assert_eq!(moments.len(), 10);
//! assert!(moments.is_finite());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use stickfig_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use stickfig_classify as classify;
pub use stickfig_features as features;
pub use stickfig_normalize as normalize;
pub use stickfig_raster as raster;
