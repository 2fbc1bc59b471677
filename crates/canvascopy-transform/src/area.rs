//! Area-weighted downsampling
//!
//! Each destination pixel averages the block of source pixels it covers,
//! weighting every source pixel with a bell-shaped kernel of its offset
//! from the block origin:
//!
//! ```text
//! w(dx, dy) = 1 / (12 * tuning) * base ^ ((dx^2 + dy^2) / (2 * tuning^2))
//! ```
//!
//! Offsets are normalized by the block extent, so `|dx|, |dy| < 1`. The
//! exponent is positive: weight grows slightly away from the block origin.
//! Both `tuning` and `base` come from [`ResampleConfig`].

use crate::config::ResampleConfig;
use crate::sample::{fetch, fill_rows, source_coord, validate_buffers, validate_source};
use crate::TransformResult;
use canvascopy_core::channel::CHANNELS;
use canvascopy_core::{Pixel, PixelBuffer};
use tracing::trace;

/// Kernel weight for a normalized offset `(dx, dy)`.
#[inline]
pub fn gauss_weight(dx: f64, dy: f64, config: &ResampleConfig) -> f64 {
    let tuning = config.tuning;
    (1.0 / (12.0 * tuning)) * config.kernel_base.powf((dx * dx + dy * dy) / (2.0 * tuning * tuning))
}

/// Weighted mean of the source block starting at `(x, y)`.
///
/// The block spans `[max(x, 0), min(x + sample_x, width))` horizontally
/// and the analogous range vertically, both ends truncated to integers.
/// An empty block (possible when `sample_x` or `sample_y` is below 1)
/// yields [`Pixel::ZERO`].
///
/// # Errors
///
/// - [`TransformError::InvalidSource`](crate::TransformError::InvalidSource)
///   if `source` has a zero dimension
/// - [`TransformError::Core`](crate::TransformError::Core) on a buffer shape mismatch
/// - [`TransformError::InvalidParameters`](crate::TransformError::InvalidParameters)
///   if the kernel parameters are not finite and positive
pub fn area_sample(
    source: &PixelBuffer,
    x: f64,
    y: f64,
    sample_x: f64,
    sample_y: f64,
    config: &ResampleConfig,
) -> TransformResult<Pixel> {
    validate_source(source)?;
    config.validate()?;
    Ok(sample_at(source, x, y, sample_x, sample_y, config))
}

fn sample_at(
    source: &PixelBuffer,
    x: f64,
    y: f64,
    sample_x: f64,
    sample_y: f64,
    config: &ResampleConfig,
) -> Pixel {
    let x0 = x.max(0.0) as u32;
    let x1 = (x + sample_x).min(source.width as f64) as u32;
    let y0 = y.max(0.0) as u32;
    let y1 = (y + sample_y).min(source.height as f64) as u32;

    let mut acc = [0.0f64; CHANNELS];
    let mut total = 0.0f64;
    for xs in x0..x1 {
        for ys in y0..y1 {
            let weight = gauss_weight(
                (x - xs as f64) / sample_x,
                (y - ys as f64) / sample_y,
                config,
            );
            let px = fetch(source, xs, ys);
            for (c, a) in acc.iter_mut().enumerate() {
                *a += px[c] * weight;
            }
            total += weight;
        }
    }

    if total == 0.0 {
        return Pixel::ZERO;
    }
    Pixel(acc.map(|a| a / total))
}

/// Downsample `source` into `dest` with the default kernel.
///
/// # Errors
///
/// See [`area_weighted_with`].
pub fn area_weighted<'a>(
    source: &PixelBuffer,
    dest: &'a mut PixelBuffer,
) -> TransformResult<&'a mut PixelBuffer> {
    area_weighted_with(source, dest, &ResampleConfig::default())
}

/// Downsample `source` into `dest` using the kernel parameters in `config`.
///
/// # Errors
///
/// - [`TransformError::InvalidDestination`](crate::TransformError::InvalidDestination)
///   if `dest` has a zero dimension
/// - [`TransformError::InvalidSource`](crate::TransformError::InvalidSource)
///   if `source` has a zero dimension
/// - [`TransformError::Core`](crate::TransformError::Core) on a buffer shape mismatch
/// - [`TransformError::InvalidParameters`](crate::TransformError::InvalidParameters)
///   if the kernel parameters are not finite and positive
pub fn area_weighted_with<'a>(
    source: &PixelBuffer,
    dest: &'a mut PixelBuffer,
    config: &ResampleConfig,
) -> TransformResult<&'a mut PixelBuffer> {
    validate_buffers(source, dest)?;
    config.validate()?;

    let (sw, sh) = source.dimensions();
    let (dw, dh) = dest.dimensions();
    let sample_x = sw as f64 / dw as f64;
    let sample_y = sh as f64 / dh as f64;
    trace!(sw, sh, dw, dh, sample_x, sample_y, "area-weighted resample");

    fill_rows(dest, |dx, dy| {
        sample_at(
            source,
            source_coord(dx, sw, dw),
            source_coord(dy, sh, dh),
            sample_x,
            sample_y,
            config,
        )
    });
    Ok(dest)
}
