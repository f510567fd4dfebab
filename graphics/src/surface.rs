//! Display surface abstraction
//!
//! Everything below the rendering core (bus setup, panel commands, DMA) sits
//! behind [`DisplaySurface`]. The core only asks for the display geometry and
//! hands over finished, byte-order-correct buffers.

use shared::{DisplayGeometry, DrawRegion, PixelBuffer};

pub use shared::SurfaceError;

/// A display that accepts fully prepared pixel buffers
pub trait DisplaySurface {
    /// Addressable size, panel offset and pixel format of the display
    fn geometry(&self) -> DisplayGeometry;

    /// Push `buffer` to `region`
    ///
    /// `region` has already been validated against [`geometry`] and
    /// `buffer` holds exactly `region.width * region.height` pixels in the
    /// panel's byte order. The panel offset is the implementor's concern.
    /// May block until the transfer completes.
    ///
    /// [`geometry`]: DisplaySurface::geometry
    fn submit(&mut self, region: DrawRegion, buffer: &PixelBuffer) -> Result<(), SurfaceError>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn geometry(&self) -> DisplayGeometry {
        (**self).geometry()
    }

    fn submit(&mut self, region: DrawRegion, buffer: &PixelBuffer) -> Result<(), SurfaceError> {
        (**self).submit(region, buffer)
    }
}
