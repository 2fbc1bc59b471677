//! Strategy dispatch
//!
//! [`resize`] picks a sampler from the relative sizes of source and
//! destination. With the default [`ResampleConfig`]:
//!
//! - `source.width > dest.width` - [`area_weighted`](crate::area_weighted)
//! - otherwise - [`bicubic`](crate::bicubic)
//!
//! Only widths are compared. A destination that is wider (or equally wide)
//! but shorter still takes the bicubic path.

use crate::config::ResampleConfig;
use crate::sample::validate_buffers;
use crate::{TransformResult, area, bicubic, bilinear};
use canvascopy_core::PixelBuffer;
use tracing::debug;

/// Resampling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bell-kernel area averaging (shrinking)
    AreaWeighted,
    /// 4x4 cubic patch, clamp-to-edge (enlarging)
    Bicubic,
    /// 2x2 linear blend, sentinel outside the source
    Bilinear,
}

impl Strategy {
    /// Select the strategy for a `src -> dst` resize under `config`.
    pub fn select(src: (u32, u32), dst: (u32, u32), config: &ResampleConfig) -> Strategy {
        config.strategy_for(src, dst)
    }

    /// Run this strategy.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of the selected sampler.
    pub fn apply<'a>(
        self,
        source: &PixelBuffer,
        dest: &'a mut PixelBuffer,
        config: &ResampleConfig,
    ) -> TransformResult<&'a mut PixelBuffer> {
        match self {
            Strategy::AreaWeighted => area::area_weighted_with(source, dest, config),
            Strategy::Bicubic => bicubic::bicubic(source, dest),
            Strategy::Bilinear => bilinear::bilinear(source, dest),
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Strategy::AreaWeighted => "area-weighted",
            Strategy::Bicubic => "bicubic",
            Strategy::Bilinear => "bilinear",
        }
    }
}

/// Resize `source` into the caller-sized `dest` with the default configuration.
///
/// Returns `dest` for chaining.
///
/// # Errors
///
/// Fails before sampling if `dest` has a zero dimension or either buffer's
/// data length is not `width * height * 4`.
///
/// # Example
///
/// ```
/// use canvascopy_core::PixelBuffer;
/// use canvascopy_transform::resize;
///
/// let src = PixelBuffer::filled(8, 8, [90, 90, 90, 255]).unwrap();
/// let mut dst = PixelBuffer::new(2, 2).unwrap();
/// resize(&src, &mut dst).unwrap();
/// assert_eq!(dst.is_uniform(), Some([90, 90, 90, 255]));
/// ```
pub fn resize<'a>(
    source: &PixelBuffer,
    dest: &'a mut PixelBuffer,
) -> TransformResult<&'a mut PixelBuffer> {
    resize_with(source, dest, &ResampleConfig::default())
}

/// Resize `source` into `dest` using the routing and kernel settings in `config`.
///
/// # Errors
///
/// See [`resize`]; additionally fails with
/// [`TransformError::InvalidParameters`](crate::TransformError::InvalidParameters)
/// if the configuration is invalid.
pub fn resize_with<'a>(
    source: &PixelBuffer,
    dest: &'a mut PixelBuffer,
    config: &ResampleConfig,
) -> TransformResult<&'a mut PixelBuffer> {
    validate_buffers(source, dest)?;
    config.validate()?;
    let strategy = Strategy::select(source.dimensions(), dest.dimensions(), config);
    debug!(
        strategy = strategy.name(),
        src_width = source.width,
        src_height = source.height,
        dst_width = dest.width,
        dst_height = dest.height,
        "resize"
    );
    strategy.apply(source, dest, config)
}
