//! Owned rectangular pixel buffers

use alloc::vec::Vec;

use crate::error::{DrawError, Result};
use crate::Color;

/// Rectangular grid of colors stored row-major
///
/// The pixel vector always holds exactly `width * height` entries; pixel
/// `(x, y)` lives at `y * width + x`. Dimensions cannot change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a buffer with every pixel set to `color`
    ///
    /// Allocation failure is reported as `OutOfMemory` instead of aborting.
    pub fn try_filled(width: usize, height: usize, color: Color) -> Result<Self> {
        let len = pixel_count(width, height)?;
        let mut pixels = Vec::new();
        if pixels.try_reserve_exact(len).is_err() {
            log::error!("Memory could not be allocated for a {}x{} buffer", width, height);
            return Err(DrawError::OutOfMemory { pixels: len });
        }
        pixels.resize(len, color);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Take ownership of existing pixel data
    pub fn try_from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(DrawError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`)
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable pixel access; the slice length is fixed so the size
    /// invariant holds.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Get the pixel at `(x, y)`, or `None` outside the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Get row `y` as a slice
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }
}

/// `width * height`, treating overflow as an impossible allocation
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| {
        log::error!("Buffer dimensions {}x{} overflow", width, height);
        DrawError::OutOfMemory { pixels: usize::MAX }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_filled_buffer() {
        let buffer = PixelBuffer::try_filled(4, 3, Color::RED).unwrap();
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.len(), 12);
        assert!(buffer.pixels().iter().all(|&p| p == Color::RED));
    }

    #[test]
    fn test_row_major_indexing() {
        let pixels = (0..6).map(Color::from_raw).collect::<Vec<_>>();
        let buffer = PixelBuffer::try_from_pixels(3, 2, pixels).unwrap();

        assert_eq!(buffer.get(0, 0), Some(Color::from_raw(0)));
        assert_eq!(buffer.get(2, 0), Some(Color::from_raw(2)));
        assert_eq!(buffer.get(0, 1), Some(Color::from_raw(3)));
        assert_eq!(buffer.get(2, 1), Some(Color::from_raw(5)));
        assert_eq!(buffer.get(3, 0), None);
        assert_eq!(buffer.get(0, 2), None);

        assert_eq!(
            buffer.row(1),
            Some(&[Color::from_raw(3), Color::from_raw(4), Color::from_raw(5)][..])
        );
        assert_eq!(buffer.row(2), None);
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let err = PixelBuffer::try_from_pixels(3, 2, vec![Color::BLACK; 5]).unwrap_err();
        assert_eq!(
            err,
            DrawError::DimensionMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_overflowing_dimensions() {
        let err = PixelBuffer::try_filled(usize::MAX, 2, Color::BLACK).unwrap_err();
        assert!(matches!(err, DrawError::OutOfMemory { .. }));
    }

    #[test]
    fn test_unallocatable_buffer() {
        // Fits in usize but not in any address space
        let err = PixelBuffer::try_filled(usize::MAX / 2, 1, Color::BLACK).unwrap_err();
        assert!(matches!(err, DrawError::OutOfMemory { .. }));
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::try_filled(0, 7, Color::WHITE).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.height(), 7);
        assert_eq!(buffer.row(0), Some(&[][..]));
    }
}
