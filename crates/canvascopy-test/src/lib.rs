//! canvascopy-test - Regression test framework for canvascopy
//!
//! Provides [`RegParams`], which numbers each check, records failures
//! instead of panicking on the first one, and reports them all from
//! [`RegParams::cleanup`], plus deterministic synthetic images in
//! [`patterns`].
//!
//! # Usage
//!
//! ```
//! use canvascopy_test::{RegParams, patterns};
//!
//! let mut rp = RegParams::new("example");
//! let buf = patterns::solid(4, 4, [1, 2, 3, 4]);
//! rp.compare_uniform(&buf, [1, 2, 3, 4]);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`. In display mode
//!   failures are printed but [`RegParams::cleanup`] still returns `true`.

mod error;
mod params;
pub mod patterns;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
