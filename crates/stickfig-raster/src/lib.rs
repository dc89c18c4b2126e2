//! stickfig-raster - Rasterization of sketches
//!
//! Two raster views of a point set are provided:
//!
//! - [`BinaryGrid`] - Occupancy grid with brick dilation, boundary
//!   extraction and area moments
//! - [`render_dots`] / [`ink_coverage`] - Anti-aliased dot canvas resampled
//!   to a fixed-size intensity grid
//!
//! # Examples
//!
//! ```
//! use stickfig_core::PointSet;
//! use stickfig_raster::BinaryGrid;
//!
//! let set = PointSet::from_points([(10, 10), (10, 30)]).unwrap();
//! let grid = BinaryGrid::rasterize(&set, 2).unwrap();
//! assert_eq!((grid.width(), grid.height()), (1, 21));
//! assert_eq!(grid.count(), 6);
//! ```

pub mod canvas;
pub mod error;
pub mod grid;

pub use stickfig_core;

pub use canvas::{ink_coverage, render_dots};
pub use error::{RasterError, RasterResult};
pub use grid::{BinaryGrid, GridMoments};
