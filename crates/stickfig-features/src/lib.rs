//! stickfig-features - Fixed-length feature extraction
//!
//! Each extractor turns a normalized sketch into a numeric vector of fixed
//! length:
//!
//! - **Graph** - Degree and hop histograms, chains, geometry, plausibility
//! - **PerPoint** - Degree and anchor hop distance for each of the 40 slots
//! - **Moments** - Hu invariants, circularity, elongation, compactness
//! - **Raster** - Perimeter, area and moments of a dilated binary grid
//! - **Relational** - Head, trunk, arm and leg groups and their relations
//! - **Pixel** - Ink coverage of a resampled dot canvas
//! - **Coarse** - 5x5 occupancy turned densest side up
//! - **InvariantGraph** - Component counts, gaps and structural patterns
//!
//! Real-valued outputs never contain NaN or infinities, and an empty
//! sketch yields an all-zero vector from every extractor.
//!
//! # Examples
//!
//! ```
//! use stickfig_core::{AnalysisParams, PointSet};
//! use stickfig_features::{ExtractorKind, analyze};
//!
//! let raw = PointSet::from_points([(0, 0), (0, 20), (0, 40)]).unwrap();
//! let graph = analyze(&raw, ExtractorKind::Graph, &AnalysisParams::default()).unwrap();
//! assert_eq!(graph.len(), 19);
//! assert_eq!(graph.as_ints().unwrap()[0], 3);
//! ```

pub mod coarse;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod invariant;
pub mod moments;
pub mod per_point;
pub mod pixel;
pub mod raster;
pub mod relational;
pub mod vector;

pub use stickfig_core;

pub use coarse::{COARSE_FEATURE_LEN, coarse_features};
pub use error::{FeatureError, FeatureResult};
pub use extractor::{ExtractorKind, FeatureExtractor, analyze, analyze_all};
pub use graph::{GRAPH_FEATURE_LEN, GraphFeatures};
pub use invariant::{INVARIANT_FEATURE_LEN, invariant_features};
pub use moments::{CentralMoments, MOMENT_FEATURE_LEN, moment_features};
pub use per_point::{PER_POINT_FEATURE_LEN, per_point_features};
pub use pixel::{pixel_feature_len, pixel_features};
pub use raster::{RASTER_FEATURE_LEN, RasterFeatures};
pub use relational::{Anatomy, Group, RELATIONAL_FEATURE_LEN, group_points, relational_features};
pub use vector::FeatureVector;
