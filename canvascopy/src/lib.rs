//! canvascopy - In-memory RGBA image resampling
//!
//! Copies one RGBA8 buffer into another buffer of a different size,
//! picking the resampling algorithm from the relative sizes:
//!
//! - Area-weighted averaging when the destination is narrower
//! - Bicubic (Catmull-Rom) interpolation otherwise
//! - Bilinear interpolation on request
//!
//! The caller owns both buffers; only the destination's channel data is
//! written.
//!
//! # Example
//!
//! ```
//! use canvascopy::{PixelBuffer, resize};
//!
//! let src = PixelBuffer::filled(64, 48, [30, 60, 90, 255]).unwrap();
//! let mut thumb = PixelBuffer::new(16, 12).unwrap();
//! resize(&src, &mut thumb).unwrap();
//! assert_eq!(thumb.is_uniform(), Some([30, 60, 90, 255]));
//!
//! // Hand the bytes back to whatever produced the source
//! let bytes: Vec<u8> = thumb.into_raw();
//! assert_eq!(bytes.len(), 16 * 12 * 4);
//! ```
//!
//! Routing and kernel settings are configured through
//! [`transform::ResampleConfig`]:
//!
//! ```
//! use canvascopy::PixelBuffer;
//! use canvascopy::transform::{ResampleConfig, RoutingRule, Strategy, resize_with};
//!
//! let config = ResampleConfig::default()
//!     .with_routing(RoutingRule::EitherAxis)
//!     .with_upsampler(Strategy::Bilinear);
//! let src = PixelBuffer::filled(8, 8, [0, 0, 0, 255]).unwrap();
//! let mut dst = PixelBuffer::new(8, 4).unwrap();
//! resize_with(&src, &mut dst, &config).unwrap();
//! ```

// Re-export core types
pub use canvascopy_core::*;

// Samplers and configuration live under `transform`
pub use canvascopy_transform as transform;

pub use canvascopy_transform::{resize, resize_with};
