use canvascopy_core::PixelBuffer;
use canvascopy_transform::{area_weighted, bicubic, bilinear, resize};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn source(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        let v = ((x * 7 + y * 13) % 251) as u8;
        [v, v.wrapping_mul(3), v ^ 0x5a, 255]
    })
    .expect("valid source")
}

fn bench_area_weighted(c: &mut Criterion) {
    let src = source(1280, 1024);
    let mut dst = PixelBuffer::new(320, 256).expect("valid dest");

    c.bench_function("area_weighted_1280x1024_to_320x256", |b| {
        b.iter(|| {
            area_weighted(black_box(&src), &mut dst).expect("resample");
            black_box(&dst);
        });
    });
}

fn bench_bicubic(c: &mut Criterion) {
    let src = source(320, 240);
    let mut dst = PixelBuffer::new(1280, 960).expect("valid dest");

    c.bench_function("bicubic_320x240_to_1280x960", |b| {
        b.iter(|| {
            bicubic(black_box(&src), &mut dst).expect("resample");
            black_box(&dst);
        });
    });
}

fn bench_bilinear(c: &mut Criterion) {
    let src = source(320, 240);
    let mut dst = PixelBuffer::new(1280, 960).expect("valid dest");

    c.bench_function("bilinear_320x240_to_1280x960", |b| {
        b.iter(|| {
            bilinear(black_box(&src), &mut dst).expect("resample");
            black_box(&dst);
        });
    });
}

fn bench_resize_dispatch(c: &mut Criterion) {
    let src = source(640, 480);
    let mut down = PixelBuffer::new(200, 150).expect("valid dest");
    let mut up = PixelBuffer::new(1024, 768).expect("valid dest");

    c.bench_function("resize_640x480_down_and_up", |b| {
        b.iter(|| {
            resize(black_box(&src), &mut down).expect("shrink");
            resize(black_box(&src), &mut up).expect("enlarge");
            black_box((&down, &up));
        });
    });
}

criterion_group!(
    benches,
    bench_area_weighted,
    bench_bicubic,
    bench_bilinear,
    bench_resize_dispatch
);
criterion_main!(benches);
