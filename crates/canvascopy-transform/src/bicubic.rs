//! Bicubic resampling
//!
//! Reconstructs each destination pixel from the 4x4 source neighborhood
//! around its mapped position. Per channel, the 16 samples `P` are turned
//! into the coefficients of a two-dimensional cubic patch
//!
//! ```text
//! A = M * P * M^T        value(fx, fy) = sum_ij A[i][j] * fx^i * fy^j
//! ```
//!
//! where `M` is the Catmull-Rom basis. The patch passes through the source
//! samples at integer offsets. Neighbor coordinates are clamped to the
//! buffer (clamp-to-edge); results are not clamped to the channel range.

use crate::TransformResult;
use crate::sample::{fetch, fill_rows, source_coord, validate_buffers, validate_source};
use canvascopy_core::channel::CHANNELS;
use canvascopy_core::{Pixel, PixelBuffer};
use tracing::trace;

/// Catmull-Rom basis: row `i` gives the contribution of the four samples
/// to the `t^i` coefficient.
const CATMULL_ROM: [[f64; 4]; 4] = [
    [0.0, 1.0, 0.0, 0.0],
    [-0.5, 0.0, 0.5, 0.0],
    [1.0, -2.5, 2.0, -0.5],
    [-0.5, 1.5, -1.5, 0.5],
];

/// Patch coefficients `M * p * M^T`.
///
/// `p[i][j]` is the sample at column offset `i - 1`, row offset `j - 1`.
/// Every basis entry is a multiple of 1/2, so for 8-bit samples the
/// coefficients are exact.
fn patch_coefficients(p: &[[f64; 4]; 4]) -> [[f64; 4]; 4] {
    // t = p * M^T
    let mut t = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            t[i][j] = (0..4).map(|l| p[i][l] * CATMULL_ROM[j][l]).sum();
        }
    }
    let mut a = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            a[i][j] = (0..4).map(|k| CATMULL_ROM[i][k] * t[k][j]).sum();
        }
    }
    a
}

/// Evaluate the patch at fractional offset `(fx, fy)`.
#[inline]
fn eval_patch(a: &[[f64; 4]; 4], fx: f64, fy: f64) -> f64 {
    let x2 = fx * fx;
    let x3 = x2 * fx;
    let y2 = fy * fy;
    let y3 = y2 * fy;
    let row = |r: &[f64; 4]| r[0] + r[1] * fy + r[2] * y2 + r[3] * y3;
    row(&a[0]) + row(&a[1]) * fx + row(&a[2]) * x2 + row(&a[3]) * x3
}

/// Neighbor indices `i-1, i, i+1, i+2` clamped to `[0, len - 1]`.
#[inline]
fn clamped_taps(i: u32, len: u32) -> [u32; 4] {
    let last = len - 1;
    let i = i.min(last);
    [
        i.saturating_sub(1),
        i,
        (i + 1).min(last),
        (i + 2).min(last),
    ]
}

/// Sample `source` at the continuous position `(x, y)`.
///
/// The integer part is taken by truncation and clamped to the buffer, so
/// negative positions read the first row/column.
///
/// # Errors
///
/// - [`TransformError::InvalidSource`](crate::TransformError::InvalidSource)
///   if `source` has a zero dimension
/// - [`TransformError::Core`](crate::TransformError::Core) on a buffer shape mismatch
pub fn bicubic_sample(source: &PixelBuffer, x: f64, y: f64) -> TransformResult<Pixel> {
    validate_source(source)?;
    Ok(sample_at(source, x, y))
}

/// [`bicubic_sample`] on a source already validated.
fn sample_at(source: &PixelBuffer, x: f64, y: f64) -> Pixel {
    let xi = x.trunc();
    let yi = y.trunc();
    let fx = x - xi;
    let fy = y - yi;
    let cols = clamped_taps(xi as u32, source.width);
    let rows = clamped_taps(yi as u32, source.height);

    let mut neighborhood = [[Pixel::ZERO; 4]; 4];
    for (i, &sx) in cols.iter().enumerate() {
        for (j, &sy) in rows.iter().enumerate() {
            neighborhood[i][j] = fetch(source, sx, sy);
        }
    }

    let mut out = Pixel::ZERO;
    for c in 0..CHANNELS {
        let p = neighborhood.map(|col| col.map(|px| px[c]));
        out[c] = eval_patch(&patch_coefficients(&p), fx, fy);
    }
    out
}

/// Resample `source` into `dest` with bicubic interpolation.
///
/// Used for enlarging and same-size copies, but valid for any pair of
/// sizes.
///
/// # Errors
///
/// - [`TransformError::InvalidDestination`](crate::TransformError::InvalidDestination)
///   if `dest` has a zero dimension
/// - [`TransformError::InvalidSource`](crate::TransformError::InvalidSource)
///   if `source` has a zero dimension
/// - [`TransformError::Core`](crate::TransformError::Core) on a buffer shape mismatch
pub fn bicubic<'a>(
    source: &PixelBuffer,
    dest: &'a mut PixelBuffer,
) -> TransformResult<&'a mut PixelBuffer> {
    validate_buffers(source, dest)?;

    let (sw, sh) = source.dimensions();
    let (dw, dh) = dest.dimensions();
    trace!(sw, sh, dw, dh, "bicubic resample");

    fill_rows(dest, |dx, dy| {
        sample_at(source, source_coord(dx, sw, dw), source_coord(dy, sh, dh))
    });
    Ok(dest)
}
