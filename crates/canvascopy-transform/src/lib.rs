//! canvascopy-transform - Resampling strategies for RGBA pixel buffers
//!
//! This crate fills a caller-sized destination buffer from a source buffer:
//!
//! - [`resize`] / [`resize_with`] - dispatcher choosing a strategy from the
//!   relative sizes of source and destination
//! - [`area_weighted`] - bell-kernel area averaging, used when shrinking
//! - [`bicubic`] - 4x4 cubic patch reconstruction, used when enlarging
//! - [`bilinear`] - 2x2 linear blend, standalone (not routed by default)
//!
//! Every sampler writes only `dest.data`, never resizes it, and returns an
//! error before sampling if either buffer is malformed or the destination
//! is empty.
//!
//! # Features
//!
//! - `parallel`: fill destination rows concurrently with rayon. The output
//!   is identical to the sequential path; the unit tests in `sample`
//!   compare both drivers when built with
//!   `cargo test -p canvascopy-transform --features parallel`.

pub mod area;
pub mod bicubic;
pub mod bilinear;
pub mod config;
mod error;
pub mod resize;
mod sample;

pub use area::{area_sample, area_weighted, area_weighted_with, gauss_weight};
pub use bicubic::{bicubic, bicubic_sample};
pub use bilinear::{SENTINEL, bilinear, bilinear_sample};
pub use config::{DEFAULT_KERNEL_BASE, DEFAULT_TUNING, ResampleConfig, RoutingRule};
pub use error::{TransformError, TransformResult};
pub use resize::{Strategy, resize, resize_with};
