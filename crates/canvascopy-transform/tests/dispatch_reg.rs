//! Strategy dispatch regression test
//!
//! Verifies that `resize` routes on width alone, fills the caller's
//! buffer without changing its shape, and rejects bad inputs up front.

use canvascopy_core::PixelBuffer;
use canvascopy_test::{RegParams, patterns};
use canvascopy_transform::{
    ResampleConfig, RoutingRule, Strategy, TransformError, area_weighted, bicubic, resize,
    resize_with,
};

type Resampler = for<'a> fn(
    &PixelBuffer,
    &'a mut PixelBuffer,
) -> canvascopy_transform::TransformResult<&'a mut PixelBuffer>;

fn run(resampler: Resampler, src: &PixelBuffer, w: u32, h: u32) -> PixelBuffer {
    let mut dst = PixelBuffer::new(w, h).unwrap();
    resampler(src, &mut dst).unwrap();
    dst
}

/// Narrower destinations take the area path, everything else bicubic.
#[test]
fn dispatch_reg_routing() {
    let mut rp = RegParams::new("dispatch_routing");
    let src = patterns::noise(8, 8, 11);

    // Shrink on both axes
    let out = run(resize, &src, 4, 4);
    rp.compare_buffers(&run(area_weighted, &src, 4, 4), &out);
    rp.compare_values(1.0, if out != run(bicubic, &src, 4, 4) { 1.0 } else { 0.0 }, 0.0);

    // Width kept, height halved: still bicubic
    let src = patterns::noise(4, 4, 12);
    let out = run(resize, &src, 4, 2);
    rp.compare_buffers(&run(bicubic, &src, 4, 2), &out);
    rp.compare_values(1.0, if out != run(area_weighted, &src, 4, 2) { 1.0 } else { 0.0 }, 0.0);

    // Width shrunk, height grown: area
    let out = run(resize, &src, 3, 9);
    rp.compare_buffers(&run(area_weighted, &src, 3, 9), &out);

    // Enlarge and same size: bicubic, and same size is a copy
    let out = run(resize, &src, 9, 9);
    rp.compare_buffers(&run(bicubic, &src, 9, 9), &out);
    rp.compare_buffers(&src, &run(resize, &src, 4, 4));

    assert!(rp.cleanup(), "dispatch routing regression test failed");
}

/// Strategy selection and overrides through the configuration.
#[test]
fn dispatch_reg_config() {
    let mut rp = RegParams::new("dispatch_config");

    let cfg = ResampleConfig::default();
    let picks = [
        ((10, 10), (5, 5), Strategy::AreaWeighted),
        ((10, 10), (10, 3), Strategy::Bicubic),
        ((10, 10), (30, 30), Strategy::Bicubic),
    ];
    for (src, dst, expected) in picks {
        let got = Strategy::select(src, dst, &cfg);
        rp.compare_values(1.0, if got == expected { 1.0 } else { 0.0 }, 0.0);
    }

    let area_cfg = cfg.with_routing(RoutingRule::Area);
    let got = Strategy::select((10, 10), (11, 2), &area_cfg);
    rp.compare_values(1.0, if got == Strategy::AreaWeighted { 1.0 } else { 0.0 }, 0.0);

    let src = patterns::gradient(6, 6);
    let bilinear_down = ResampleConfig::default().with_downsampler(Strategy::Bilinear);
    let mut a = PixelBuffer::new(3, 3).unwrap();
    resize_with(&src, &mut a, &bilinear_down).unwrap();
    let mut b = PixelBuffer::new(3, 3).unwrap();
    canvascopy_transform::bilinear(&src, &mut b).unwrap();
    rp.compare_buffers(&b, &a);

    assert!(rp.cleanup(), "dispatch config regression test failed");
}

/// Destination shape is preserved and bad inputs fail before writing.
#[test]
fn dispatch_reg_shape_and_errors() {
    let mut rp = RegParams::new("dispatch_errors");
    let src = patterns::gradient(7, 5);

    for &(w, h) in &[(1, 1), (3, 11), (7, 5), (20, 2), (13, 13)] {
        let mut dst = PixelBuffer::new(w, h).unwrap();
        resize(&src, &mut dst).unwrap();
        rp.compare_values((w * h * 4) as f64, dst.data.len() as f64, 0.0);
        rp.compare_values((w * h) as f64, dst.pixel_count() as f64, 0.0);
        rp.compare_values(1.0, if dst.dimensions() == (w, h) { 1.0 } else { 0.0 }, 0.0);
    }

    let mut empty = PixelBuffer::from_raw(0, 4, Vec::new()).unwrap();
    let err = resize(&src, &mut empty).unwrap_err();
    rp.compare_values(
        1.0,
        if err == (TransformError::InvalidDestination { width: 0, height: 4 }) { 1.0 } else { 0.0 },
        0.0,
    );

    let empty_src = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
    let mut dst = PixelBuffer::filled(2, 2, [7; 4]).unwrap();
    let err = resize(&empty_src, &mut dst).unwrap_err();
    rp.compare_values(
        1.0,
        if err == (TransformError::InvalidSource { width: 0, height: 0 }) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_uniform(&dst, [7; 4]);

    // Data length that disagrees with the declared shape
    let mut bad = PixelBuffer::filled(2, 2, [7; 4]).unwrap();
    bad.data.truncate(12);
    let err = resize(&src, &mut bad).unwrap_err();
    rp.compare_values(1.0, if matches!(err, TransformError::Core(_)) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(12.0, bad.data.len() as f64, 0.0);

    assert!(rp.cleanup(), "dispatch error regression test failed");
}
