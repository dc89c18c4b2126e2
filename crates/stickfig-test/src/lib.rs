//! stickfig-test - Regression test framework for stickfig
//!
//! Provides [`RegParams`], a small harness that counts numbered checks,
//! records failures with context and reports them on stderr, plus a
//! [`fixtures`] module of canonical sketches.
//!
//! Two modes are supported:
//!
//! - **Compare**: Check results against expected values (default)
//! - **Display**: Same checks, plus a dump of every compared vector
//!
//! # Usage
//!
//! ```ignore
//! use stickfig_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("graph");
//! let set = fixtures::cross(10).unwrap();
//! rp.compare_values(5.0, set.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
