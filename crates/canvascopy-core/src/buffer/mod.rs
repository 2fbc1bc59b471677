//! PixelBuffer - The RGBA image container
//!
//! `PixelBuffer` is the only image type the resamplers read and write.
//!
//! # Pixel layout
//!
//! - 4 channels per pixel, 8 bits each, in R, G, B, A order
//! - Rows are contiguous, top to bottom, with no padding
//! - `data.len() == width * height * 4` whenever the buffer is valid
//!
//! # Ownership model
//!
//! The caller allocates both the source and the destination buffer. The
//! fields are public so that a caller can hand over bytes captured from a
//! rendering surface without copying; [`PixelBuffer::validate`] checks the
//! shape invariant before any sampler touches the data.

mod access;

use crate::channel::CHANNELS;
use crate::error::{Error, Result};

/// Interleaved RGBA image with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use canvascopy_core::PixelBuffer;
///
/// let buf = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buf.width, 640);
/// assert_eq!(buf.data.len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Channel data, row-major, RGBA interleaved
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(PixelBuffer {
            width,
            height,
            data: vec![0u8; Self::expected_len(width, height)],
        })
    }

    /// Create a buffer where every pixel has the same color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, rgba: [u8; CHANNELS]) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        buf.fill(rgba);
        Ok(buf)
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> [u8; CHANNELS],
    {
        let mut buf = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                buf.set_rgba_unchecked(x, y, f(x, y));
            }
        }
        Ok(buf)
    }

    /// Adopt caller-provided channel data.
    ///
    /// Zero-sized buffers are accepted here (the data must then be empty);
    /// resamplers reject them as destinations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let buf = PixelBuffer {
            width,
            height,
            data,
        };
        buf.validate()?;
        Ok(buf)
    }

    /// Number of bytes a `width x height` buffer must hold.
    #[inline]
    pub fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * CHANNELS
    }

    /// Check the shape invariant `data.len() == width * height * 4`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the invariant does not hold.
    pub fn validate(&self) -> Result<()> {
        let expected = Self::expected_len(self.width, self.height);
        if self.data.len() != expected {
            return Err(Error::ShapeMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// True if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Get the dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get raw access to the channel data.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its channel data.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Set every pixel to `rgba`.
    pub fn fill(&mut self, rgba: [u8; CHANNELS]) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Return the common color if every pixel is identical.
    ///
    /// Returns `None` for an empty buffer or a buffer with at least two
    /// distinct colors.
    pub fn is_uniform(&self) -> Option<[u8; CHANNELS]> {
        let mut pixels = self.data.chunks_exact(CHANNELS);
        let first = pixels.next()?;
        if pixels.all(|px| px == first) {
            let mut rgba = [0u8; CHANNELS];
            rgba.copy_from_slice(first);
            Some(rgba)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.data.len(), 24);
        assert!(buf.data.iter().all(|&b| b == 0));
        assert_eq!(buf.row_stride(), 12);
        assert_eq!(buf.pixel_count(), 6);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            PixelBuffer::new(0, 5),
            Err(Error::InvalidDimension {
                width: 0,
                height: 5
            })
        );
        assert!(PixelBuffer::new(5, 0).is_err());
    }

    #[test]
    fn test_from_raw_shape() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
        let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_from_raw_accepts_empty() {
        let buf = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_validate_detects_tampering() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.data.pop();
        assert!(matches!(buf.validate(), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_filled_is_uniform() {
        let buf = PixelBuffer::filled(4, 3, [9, 8, 7, 6]).unwrap();
        assert_eq!(buf.is_uniform(), Some([9, 8, 7, 6]));
    }

    #[test]
    fn test_is_uniform_detects_variation() {
        let buf = PixelBuffer::from_fn(2, 2, |x, _| [x as u8, 0, 0, 255]).unwrap();
        assert_eq!(buf.is_uniform(), None);
        assert_eq!(PixelBuffer::default().is_uniform(), None);
    }

    #[test]
    fn test_from_fn_layout() {
        let buf = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 0, 1]).unwrap();
        // pixel (2, 1) starts at (1 * 3 + 2) * 4 = 20
        assert_eq!(&buf.data[20..24], &[2, 1, 0, 1]);
        assert_eq!(buf.into_raw().len(), 24);
    }
}
