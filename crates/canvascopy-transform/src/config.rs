//! Resampling configuration
//!
//! The values that shape observable output live here instead of being
//! buried in the kernels:
//!
//! - the spread (`tuning`) and exponent base of the area-weighted kernel
//! - the predicate deciding whether a resize counts as shrinking
//! - which strategy runs for shrinking and for enlarging

use crate::resize::Strategy;
use crate::{TransformError, TransformResult};

/// Spread of the area-weighted kernel.
pub const DEFAULT_TUNING: f64 = 10.0;

/// Exponent base of the area-weighted kernel (approximately e).
pub const DEFAULT_KERNEL_BASE: f64 = 2.718;

/// Predicate deciding whether a resize is a downsample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingRule {
    /// Shrinking iff `source.width > dest.width`; height is ignored.
    #[default]
    WidthOnly,
    /// Shrinking iff either axis shrinks
    EitherAxis,
    /// Shrinking iff the destination has fewer pixels than the source
    Area,
}

impl RoutingRule {
    /// Evaluate the predicate for `(width, height)` pairs.
    pub fn is_downsample(self, src: (u32, u32), dst: (u32, u32)) -> bool {
        match self {
            RoutingRule::WidthOnly => src.0 > dst.0,
            RoutingRule::EitherAxis => src.0 > dst.0 || src.1 > dst.1,
            RoutingRule::Area => {
                (dst.0 as u64) * (dst.1 as u64) < (src.0 as u64) * (src.1 as u64)
            }
        }
    }
}

/// Options for [`resize_with`](crate::resize_with) and the configurable samplers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleConfig {
    /// Spread parameter of the area-weighted kernel
    pub tuning: f64,
    /// Exponent base of the area-weighted kernel
    pub kernel_base: f64,
    /// Downsample predicate
    pub routing: RoutingRule,
    /// Strategy used when `routing` reports a downsample
    pub downsampler: Strategy,
    /// Strategy used otherwise
    pub upsampler: Strategy,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            tuning: DEFAULT_TUNING,
            kernel_base: DEFAULT_KERNEL_BASE,
            routing: RoutingRule::WidthOnly,
            downsampler: Strategy::AreaWeighted,
            upsampler: Strategy::Bicubic,
        }
    }
}

impl ResampleConfig {
    /// Set the kernel spread
    pub fn with_tuning(mut self, tuning: f64) -> Self {
        self.tuning = tuning;
        self
    }

    /// Set the kernel exponent base
    pub fn with_kernel_base(mut self, base: f64) -> Self {
        self.kernel_base = base;
        self
    }

    /// Set the downsample predicate
    pub fn with_routing(mut self, routing: RoutingRule) -> Self {
        self.routing = routing;
        self
    }

    /// Set the strategy used for shrinking
    pub fn with_downsampler(mut self, strategy: Strategy) -> Self {
        self.downsampler = strategy;
        self
    }

    /// Set the strategy used for enlarging and same-size copies
    pub fn with_upsampler(mut self, strategy: Strategy) -> Self {
        self.upsampler = strategy;
        self
    }

    /// Check the kernel parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if `tuning` or
    /// `kernel_base` is not a finite positive number.
    pub fn validate(&self) -> TransformResult<()> {
        if !self.tuning.is_finite() || self.tuning <= 0.0 {
            return Err(TransformError::InvalidParameters(format!(
                "tuning must be finite and positive, got {}",
                self.tuning
            )));
        }
        if !self.kernel_base.is_finite() || self.kernel_base <= 0.0 {
            return Err(TransformError::InvalidParameters(format!(
                "kernel base must be finite and positive, got {}",
                self.kernel_base
            )));
        }
        Ok(())
    }

    /// Pick the strategy for a resize between the given dimensions.
    pub fn strategy_for(&self, src: (u32, u32), dst: (u32, u32)) -> Strategy {
        if self.routing.is_downsample(src, dst) {
            self.downsampler
        } else {
            self.upsampler
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = ResampleConfig::default();
        assert_eq!(cfg.tuning, 10.0);
        assert_eq!(cfg.kernel_base, 2.718);
        assert_eq!(cfg.routing, RoutingRule::WidthOnly);
        assert_eq!(cfg.downsampler, Strategy::AreaWeighted);
        assert_eq!(cfg.upsampler, Strategy::Bicubic);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_width_only_ignores_height() {
        let rule = RoutingRule::WidthOnly;
        assert!(rule.is_downsample((10, 10), (5, 20)));
        // Narrower height but same width still counts as enlarging
        assert!(!rule.is_downsample((10, 10), (10, 2)));
        assert!(!rule.is_downsample((10, 10), (20, 2)));
    }

    #[test]
    fn test_either_axis() {
        let rule = RoutingRule::EitherAxis;
        assert!(rule.is_downsample((10, 10), (20, 2)));
        assert!(!rule.is_downsample((10, 10), (10, 10)));
    }

    #[test]
    fn test_area_rule() {
        let rule = RoutingRule::Area;
        assert!(rule.is_downsample((10, 10), (20, 4)));
        assert!(!rule.is_downsample((10, 10), (20, 5)));
    }

    #[test]
    fn test_strategy_for() {
        let cfg = ResampleConfig::default();
        assert_eq!(cfg.strategy_for((8, 8), (4, 4)), Strategy::AreaWeighted);
        assert_eq!(cfg.strategy_for((8, 8), (8, 8)), Strategy::Bicubic);

        let cfg = cfg.with_upsampler(Strategy::Bilinear);
        assert_eq!(cfg.strategy_for((8, 8), (16, 16)), Strategy::Bilinear);
    }

    #[test]
    fn test_validate_rejects_bad_tuning() {
        for tuning in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = ResampleConfig::default().with_tuning(tuning);
            assert!(matches!(
                cfg.validate(),
                Err(TransformError::InvalidParameters(_))
            ));
        }
        let cfg = ResampleConfig::default().with_kernel_base(0.0);
        assert!(cfg.validate().is_err());
    }
}
