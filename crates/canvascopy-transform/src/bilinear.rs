//! Bilinear resampling
//!
//! Blends the 2x2 neighborhood of the mapped source position, first along
//! x, then along y. Unlike the other samplers this one does not clamp to
//! the edge: a neighbor outside the source reads as [`SENTINEL`], a
//! transparent mid-gray, and is blended in with its fractional weight.
//!
//! The dispatcher never routes here with the default configuration; call
//! [`bilinear`] directly or select [`Strategy::Bilinear`](crate::Strategy)
//! through a [`ResampleConfig`](crate::ResampleConfig).

use crate::TransformResult;
use crate::sample::{fetch, fill_rows, source_coord, validate_buffers, validate_source};
use canvascopy_core::{Pixel, PixelBuffer};
use tracing::trace;

/// Value read for a neighbor outside the source: `(128, 128, 128, 0)`.
pub const SENTINEL: Pixel = Pixel::new(128.0, 128.0, 128.0, 0.0);

/// Read an integer-valued position, or [`SENTINEL`] when out of range.
#[inline]
fn pixel_or_sentinel(source: &PixelBuffer, x: f64, y: f64) -> Pixel {
    if x < 0.0 || y < 0.0 || x >= source.width as f64 || y >= source.height as f64 {
        return SENTINEL;
    }
    fetch(source, x as u32, y as u32)
}

/// Sample `source` at the continuous position `(x, y)`.
///
/// The integer part is taken by truncation toward zero and the blend
/// factors are `x % 1` and `y % 1`. A position with integer coordinates
/// returns that source pixel (or [`SENTINEL`]) without blending.
///
/// # Errors
///
/// - [`TransformError::InvalidSource`](crate::TransformError::InvalidSource)
///   if `source` has a zero dimension
/// - [`TransformError::Core`](crate::TransformError::Core) on a buffer shape mismatch
pub fn bilinear_sample(source: &PixelBuffer, x: f64, y: f64) -> TransformResult<Pixel> {
    validate_source(source)?;
    Ok(sample_at(source, x, y))
}

fn sample_at(source: &PixelBuffer, x: f64, y: f64) -> Pixel {
    let x0 = x.trunc();
    let y0 = y.trunc();
    if x0 == x && y0 == y {
        return pixel_or_sentinel(source, x0, y0);
    }

    let tx = x % 1.0;
    let ty = y % 1.0;
    let top = Pixel::lerp(
        pixel_or_sentinel(source, x0, y0),
        pixel_or_sentinel(source, x0 + 1.0, y0),
        tx,
    );
    let bottom = Pixel::lerp(
        pixel_or_sentinel(source, x0, y0 + 1.0),
        pixel_or_sentinel(source, x0 + 1.0, y0 + 1.0),
        tx,
    );
    Pixel::lerp(top, bottom, ty)
}

/// Resample `source` into `dest` with bilinear interpolation.
///
/// # Errors
///
/// - [`TransformError::InvalidDestination`](crate::TransformError::InvalidDestination)
///   if `dest` has a zero dimension
/// - [`TransformError::InvalidSource`](crate::TransformError::InvalidSource)
///   if `source` has a zero dimension
/// - [`TransformError::Core`](crate::TransformError::Core) on a buffer shape mismatch
pub fn bilinear<'a>(
    source: &PixelBuffer,
    dest: &'a mut PixelBuffer,
) -> TransformResult<&'a mut PixelBuffer> {
    validate_buffers(source, dest)?;

    let (sw, sh) = source.dimensions();
    let (dw, dh) = dest.dimensions();
    trace!(sw, sh, dw, dh, "bilinear resample");

    fill_rows(dest, |dx, dy| {
        sample_at(source, source_coord(dx, sw, dw), source_coord(dy, sh, dh))
    });
    Ok(dest)
}
