//! canvascopy-core - Basic data structures for RGBA resampling
//!
//! This crate provides the data model shared by every resampler:
//!
//! - [`PixelBuffer`] - caller-owned interleaved RGBA image (8 bits per channel)
//! - [`Pixel`] - unclamped floating-point RGBA value produced during sampling
//! - [`Error`] / [`Result`] - shape and bounds errors
//!
//! # Pixel layout
//!
//! Channels are interleaved in R, G, B, A order, rows are stored top to
//! bottom with no padding, so pixel `(x, y)` occupies
//! `data[(y * width + x) * 4 ..][..4]`.

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{Pixel, ROUNDOFF_TOLERANCE};

/// Channel indices within an interleaved RGBA pixel.
pub mod channel {
    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;
    /// Number of channels per pixel
    pub const CHANNELS: usize = 4;

    /// Compose an RGBA quad.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> [u8; CHANNELS] {
        [r, g, b, a]
    }

    /// Compose an opaque RGB quad (alpha = 255).
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> [u8; CHANNELS] {
        [r, g, b, 255]
    }

}
