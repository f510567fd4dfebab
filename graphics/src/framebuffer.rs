//! In-memory framebuffer surface
//!
//! Backs a [`DisplaySurface`] with a caller-provided pixel slice. Useful for
//! host-side simulators and for reading back what a sequence of draw calls
//! produced.

use shared::{Color, DisplayGeometry, DrawError, DrawRegion, PixelBuffer, Result};

use crate::surface::{DisplaySurface, SurfaceError};

/// Display surface writing into a row-major slice of panel-order pixels
pub struct Framebuffer<'a> {
    geometry: DisplayGeometry,
    buffer: &'a mut [Color],
}

impl<'a> Framebuffer<'a> {
    /// Wrap `buffer`, which must hold exactly `width * height` pixels
    pub fn new(geometry: DisplayGeometry, buffer: &'a mut [Color]) -> Result<Self> {
        let expected = geometry.width.saturating_mul(geometry.height);
        if buffer.len() != expected {
            return Err(DrawError::DimensionMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(Self { geometry, buffer })
    }

    /// Get the width in pixels
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    /// Get the height in pixels
    pub fn height(&self) -> usize {
        self.geometry.height
    }

    /// Pixel at `(x, y)` as stored, i.e. in panel byte order
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.buffer[y * self.width() + x])
    }

    pub fn buffer(&self) -> &[Color] {
        &self.buffer[..]
    }
}

impl DisplaySurface for Framebuffer<'_> {
    fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    fn submit(&mut self, region: DrawRegion, buffer: &PixelBuffer) -> core::result::Result<(), SurfaceError> {
        if !self.geometry.contains_region(region) {
            return Err(SurfaceError::new("region outside framebuffer"));
        }
        if buffer.width() != region.width || buffer.height() != region.height {
            return Err(SurfaceError::new("buffer size does not match region"));
        }
        if region.is_empty() {
            return Ok(());
        }

        let stride = self.geometry.width;
        for (row, source) in buffer.pixels().chunks_exact(region.width).enumerate() {
            let start = (region.y + row) * stride + region.x;
            self.buffer[start..start + region.width].copy_from_slice(source);
        }
        Ok(())
    }
}
