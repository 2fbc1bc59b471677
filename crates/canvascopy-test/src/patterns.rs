//! Deterministic synthetic test images
//!
//! All generators panic on zero dimensions; they are meant for tests.

use canvascopy_core::PixelBuffer;
use canvascopy_core::channel::{rgb, rgba};

/// Uniform color.
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
    PixelBuffer::filled(width, height, rgba).expect("solid: non-zero dimensions")
}

/// 2x2 source where each pixel has its own color:
/// `[[top_left, top_right], [bottom_left, bottom_right]]`.
pub fn quadrants(colors: [[u8; 4]; 4]) -> PixelBuffer {
    PixelBuffer::from_raw(2, 2, colors.concat()).expect("quadrants: 2x2 shape")
}

/// Red ramps with x, green ramps with y, blue fixed, opaque.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let wmax = (width.max(2) - 1) as f64;
    let hmax = (height.max(2) - 1) as f64;
    PixelBuffer::from_fn(width, height, |x, y| {
        rgb(
            (x as f64 * 255.0 / wmax) as u8,
            (y as f64 * 255.0 / hmax) as u8,
            64,
        )
    })
    .expect("gradient: non-zero dimensions")
}

/// Alternating `cell x cell` squares of `a` and `b`, starting with `a`.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> PixelBuffer {
    let cell = cell.max(1);
    PixelBuffer::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
    .expect("checkerboard: non-zero dimensions")
}

/// Pseudo-random bytes from a fixed seed (same seed, same image).
pub fn noise(width: u32, height: u32, seed: u32) -> PixelBuffer {
    let mut rng = SimpleRng::new(seed);
    PixelBuffer::from_fn(width, height, |_, _| {
        let v = rng.next().to_be_bytes();
        rgba(v[0], v[1], v[2], v[3])
    })
    .expect("noise: non-zero dimensions")
}

/// Linear congruential generator for reproducible noise
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // Knuth's MMIX constants
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}
