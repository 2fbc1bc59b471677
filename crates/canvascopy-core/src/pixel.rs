//! Floating-point pixel values used during sampling
//!
//! A [`Pixel`] is produced by a sampler and written back to a
//! [`PixelBuffer`](crate::PixelBuffer) exactly once. Channel values may lie
//! outside `[0, 255]` (cubic weights overshoot); no sampler clamps them.

use crate::channel::CHANNELS;
use std::ops::{Index, IndexMut};

/// Distance from an integer below which a channel value counts as that
/// integer when narrowed. Weighted means of a flat region land a few ulps
/// off the exact value.
pub const ROUNDOFF_TOLERANCE: f64 = 1e-9;

/// Ephemeral RGBA value with `f64` channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel(pub [f64; CHANNELS]);

impl Pixel {
    /// All channels zero (transparent black).
    pub const ZERO: Pixel = Pixel([0.0; CHANNELS]);

    /// Create a pixel from raw channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Pixel([r, g, b, a])
    }

    /// Widen an 8-bit RGBA quad.
    #[inline]
    pub fn from_rgba(rgba: [u8; CHANNELS]) -> Self {
        Pixel(rgba.map(f64::from))
    }

    /// Get the channel values.
    #[inline]
    pub fn channels(&self) -> [f64; CHANNELS] {
        self.0
    }

    /// Linear blend `(1 - t) * a + t * b`, channel by channel.
    ///
    /// `t` is not restricted to `[0, 1]`; values outside extrapolate.
    #[inline]
    pub fn lerp(a: Pixel, b: Pixel, t: f64) -> Pixel {
        let mut out = [0.0; CHANNELS];
        for (c, v) in out.iter_mut().enumerate() {
            *v = (1.0 - t) * a.0[c] + t * b.0[c];
        }
        Pixel(out)
    }

    /// Narrow to an 8-bit RGBA quad by truncation toward zero.
    ///
    /// Values within [`ROUNDOFF_TOLERANCE`] of an integer are taken as that
    /// integer first. The float-to-integer cast saturates values outside
    /// `[0, 255]` and maps NaN to 0.
    #[inline]
    pub fn to_rgba(self) -> [u8; CHANNELS] {
        self.0.map(|v| snap_roundoff(v) as u8)
    }
}

#[inline]
fn snap_roundoff(v: f64) -> f64 {
    let nearest = v.round();
    if (v - nearest).abs() < ROUNDOFF_TOLERANCE {
        nearest
    } else {
        v
    }
}

impl From<[u8; CHANNELS]> for Pixel {
    fn from(rgba: [u8; CHANNELS]) -> Self {
        Pixel::from_rgba(rgba)
    }
}

impl Index<usize> for Pixel {
    type Output = f64;

    #[inline]
    fn index(&self, channel: usize) -> &f64 {
        &self.0[channel]
    }
}

impl IndexMut<usize> for Pixel {
    #[inline]
    fn index_mut(&mut self, channel: usize) -> &mut f64 {
        &mut self.0[channel]
    }
}
