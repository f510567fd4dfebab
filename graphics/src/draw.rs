//! Rectangle fills and image blits
//!
//! Each call validates its region against the display before allocating or
//! submitting anything. Zero-area regions are accepted and submit nothing.

use shared::{
    swap_byte_order, Color, DisplayGeometry, DrawError, DrawRegion, PixelBuffer, Point, Rect,
    Result,
};

use crate::surface::DisplaySurface;

/// Fill `region` with a single color
///
/// `color` is given in host order and swapped once before the fill buffer is
/// built.
pub fn fill_rect<S: DisplaySurface + ?Sized>(surface: &mut S, region: Rect, color: Color) -> Result<()> {
    check_bounds(&surface.geometry(), region)?;
    if region.is_empty() {
        return Ok(());
    }

    let buffer = PixelBuffer::try_filled(region.width, region.height, swap_byte_order(color))?;
    submit(surface, region, &buffer)
}

/// Fill the whole display with a single color
pub fn fill_display<S: DisplaySurface + ?Sized>(surface: &mut S, color: Color) -> Result<()> {
    let bounds = surface.geometry().bounds();
    fill_rect(surface, bounds, color).inspect_err(|err| {
        log::error!("Fill failed: {}", err);
    })
}

/// Draw an image whose pixels are already in panel byte order, top-left
/// corner at `origin`
pub fn draw_image<S: DisplaySurface + ?Sized>(surface: &mut S, origin: Point, image: &PixelBuffer) -> Result<()> {
    let region = Rect::from_point_size(origin, image.width(), image.height());
    check_bounds(&surface.geometry(), region)?;
    if region.is_empty() {
        return Ok(());
    }

    submit(surface, region, image)
}

/// Reject regions that do not lie entirely on the display
pub(crate) fn check_bounds(geometry: &DisplayGeometry, region: DrawRegion) -> Result<()> {
    if geometry.contains_region(region) {
        return Ok(());
    }

    log::error!(
        "Draw region {:?} is out of bounds for a {}x{} display",
        region,
        geometry.width,
        geometry.height
    );
    Err(DrawError::OutOfBounds {
        region,
        width: geometry.width,
        height: geometry.height,
    })
}

pub(crate) fn submit<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    region: DrawRegion,
    buffer: &PixelBuffer,
) -> Result<()> {
    log::trace!("Submitting {}x{} at ({}, {})", region.width, region.height, region.x, region.y);
    surface.submit(region, buffer).map_err(|err| {
        log::error!("Display rejected region {:?}: {}", region, err);
        DrawError::from(err)
    })
}
