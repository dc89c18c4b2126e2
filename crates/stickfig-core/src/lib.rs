//! stickfig-core - Basic data structures for stick-figure sketch analysis
//!
//! This crate provides the foundations shared by every stage of the
//! pipeline:
//!
//! - [`Point`] - A single user-placed dot
//! - [`PointSet`] - Fixed-capacity collection of dots with empty slots
//! - [`BoundingBox`] - Inclusive extent of a set
//! - [`ProximityGraph`] - Implicit distance-threshold graph
//! - [`AnalysisParams`] - Calibrated thresholds for one analysis pass
//!
//! # Example
//!
//! ```
//! use stickfig_core::{PointSet, ProximityGraph};
//!
//! let set = PointSet::from_points([(0, 0), (20, 0), (40, 0)]).unwrap();
//! let graph = ProximityGraph::new(&set, 25.0);
//! assert_eq!(graph.degrees(), vec![1, 2, 1]);
//! ```

pub mod bbox;
pub mod error;
pub mod graph;
pub mod params;
pub mod point;
pub mod point_set;

pub use bbox::BoundingBox;
pub use error::{Error, Result};
pub use graph::{ProximityGraph, UNREACHABLE};
pub use params::{
    AnalysisParams, DEFAULT_CROP_MARGIN, DEFAULT_GROUP_RADIUS, DEFAULT_LOOSE_RADIUS,
    DEFAULT_ORIENTATION_TOLERANCE_DEG, DEFAULT_SYMMETRY_TOLERANCE, DEFAULT_TIGHT_RADIUS,
    PlausibilityGate,
};
pub use point::Point;
pub use point_set::{MAX_POINTS, PointSet};

/// Replace NaN and infinities with 0.
///
/// Applied to every real value before it is placed in a feature vector.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
