//! Pixel access functions
//!
//! Getting and setting individual RGBA pixels. The `_unchecked` variants
//! assume the coordinates are in bounds and the buffer has a valid shape;
//! they panic on a slice index otherwise.

use super::PixelBuffer;
use crate::channel::CHANNELS;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Get the RGBA quad at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index_of(x, y);
        let px = self.data.get(idx..idx + CHANNELS)?;
        let mut rgba = [0u8; CHANNELS];
        rgba.copy_from_slice(px);
        Some(rgba)
    }

    /// Get the RGBA quad at `(x, y)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside `data`.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        let idx = self.index_of(x, y);
        let mut rgba = [0u8; CHANNELS];
        rgba.copy_from_slice(&self.data[idx..idx + CHANNELS]);
        rgba
    }

    /// Set the RGBA quad at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; CHANNELS]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.validate()?;
        self.set_rgba_unchecked(x, y, rgba);
        Ok(())
    }

    /// Set the RGBA quad at `(x, y)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside `data`.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, rgba: [u8; CHANNELS]) {
        let idx = self.index_of(x, y);
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.set_rgba(3, 2, [1, 2, 3, 4]).unwrap();
        assert_eq!(buf.get_rgba(3, 2), Some([1, 2, 3, 4]));
        assert_eq!(buf.get_rgba_unchecked(3, 2), [1, 2, 3, 4]);
        assert_eq!(buf.get_rgba(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(buf.get_rgba(2, 0), None);
        assert_eq!(buf.get_rgba(0, 2), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        assert_eq!(
            buf.set_rgba(1, 3, [0; 4]),
            Err(Error::IndexOutOfBounds {
                x: 1,
                y: 3,
                width: 2,
                height: 3
            })
        );
    }

    #[test]
    fn test_get_on_truncated_data() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.data.truncate(8);
        assert_eq!(buf.get_rgba(1, 1), None);
        assert!(buf.set_rgba(1, 1, [1; 4]).is_err());
    }

    #[test]
    fn test_index_of() {
        let buf = PixelBuffer::new(5, 5).unwrap();
        assert_eq!(buf.index_of(0, 0), 0);
        assert_eq!(buf.index_of(1, 0), 4);
        assert_eq!(buf.index_of(0, 1), 20);
    }
}
