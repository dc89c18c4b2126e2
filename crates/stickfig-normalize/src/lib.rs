//! stickfig-normalize - Geometric normalization of sketches
//!
//! This crate turns a raw, noisy point set into a canonical one:
//!
//! - **Noise filter** - Keep the largest connected component
//! - **Crop** - Translate the margin-expanded bounding box to the origin
//! - **Orientation** - Rotate the principal axis upright, denser half on top
//!
//! # Examples
//!
//! ```
//! use stickfig_core::{AnalysisParams, PointSet};
//! use stickfig_normalize::normalize;
//!
//! let raw = PointSet::from_points([(300, 100), (300, 120), (300, 140), (900, 900)]).unwrap();
//! let canonical = normalize(&raw, &AnalysisParams::default()).unwrap();
//! assert_eq!(canonical.len(), 3);
//! assert_eq!(canonical.bounding_box().unwrap().min_y, 10);
//! ```

pub mod crop;
pub mod error;
pub mod noise;
pub mod orient;
pub mod pipeline;

pub use stickfig_core;

pub use crop::crop;
pub use error::{NormalizeError, NormalizeResult};
pub use noise::remove_noise;
pub use orient::{MIN_ORIENTABLE_POINTS, Orientation, estimate_orientation, orient};
pub use pipeline::{NormalizedSketch, Normalizer, normalize};
