//! Shared plumbing for the samplers
//!
//! Buffer validation, destination-to-source coordinate mapping and the
//! row driver that writes each destination pixel exactly once.

use crate::{TransformError, TransformResult};
use canvascopy_core::channel::CHANNELS;
use canvascopy_core::{Pixel, PixelBuffer};

/// Reject malformed buffers before any sampling arithmetic.
///
/// Order: destination size, source size, destination shape, source shape.
pub(crate) fn validate_buffers(source: &PixelBuffer, dest: &PixelBuffer) -> TransformResult<()> {
    if dest.is_empty() {
        return Err(TransformError::InvalidDestination {
            width: dest.width,
            height: dest.height,
        });
    }
    if source.is_empty() {
        return Err(TransformError::InvalidSource {
            width: source.width,
            height: source.height,
        });
    }
    dest.validate()?;
    source.validate()?;
    Ok(())
}

/// Reject a source that cannot be sampled: zero-sized or misshapen.
pub(crate) fn validate_source(source: &PixelBuffer) -> TransformResult<()> {
    if source.is_empty() {
        return Err(TransformError::InvalidSource {
            width: source.width,
            height: source.height,
        });
    }
    source.validate()?;
    Ok(())
}

/// Map a destination coordinate onto the source axis.
///
/// Multiplies before dividing so integer-aligned positions stay exact.
#[inline]
pub(crate) fn source_coord(d: u32, src_len: u32, dst_len: u32) -> f64 {
    (d as f64 * src_len as f64) / dst_len as f64
}

/// Read a source pixel as floating point.
///
/// Coordinates must already be inside the buffer.
#[inline]
pub(crate) fn fetch(source: &PixelBuffer, x: u32, y: u32) -> Pixel {
    source.get_rgba_unchecked(x, y).into()
}

/// Evaluate `f(x, y)` for every destination pixel and store the result.
///
/// Rows are independent; with the `parallel` feature they are filled on
/// the rayon pool.
pub(crate) fn fill_rows<F>(dest: &mut PixelBuffer, f: F)
where
    F: Fn(u32, u32) -> Pixel + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let stride = dest.row_stride();
        dest.data
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| fill_row(&f, y, row));
    }

    #[cfg(not(feature = "parallel"))]
    fill_rows_sequential(dest, f);
}

#[cfg(any(not(feature = "parallel"), test))]
fn fill_rows_sequential<F>(dest: &mut PixelBuffer, f: F)
where
    F: Fn(u32, u32) -> Pixel,
{
    let stride = dest.row_stride();
    dest.data
        .chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| fill_row(&f, y, row));
}

#[inline]
fn fill_row<F>(f: &F, y: usize, row: &mut [u8])
where
    F: Fn(u32, u32) -> Pixel,
{
    for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
        px.copy_from_slice(&f(x as u32, y as u32).to_rgba());
    }
}
