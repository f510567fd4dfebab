//! Fill and image submission tests

mod common;

use common::RecordingSurface;
use graphics::{
    draw_image, fill_display, fill_rect, swap_byte_order, Color, DisplayGeometry, DrawError,
    PixelBuffer, Point, Rect,
};

#[test]
fn test_fill_display_black() {
    let mut surface = RecordingSurface::new(10, 10);
    fill_display(&mut surface, Color::BLACK).unwrap();

    let (region, buffer) = surface.last().unwrap();
    assert_eq!(*region, Rect::new(0, 0, 10, 10));
    assert_eq!(buffer.len(), 100);
    assert!(buffer.pixels().iter().all(|&p| p == swap_byte_order(Color::BLACK)));
}

#[test]
fn test_fill_display_uses_full_geometry() {
    let mut surface = RecordingSurface::with_geometry(DisplayGeometry::TTGO_T_DISPLAY);
    fill_display(&mut surface, Color::RED).unwrap();

    let (region, buffer) = surface.last().unwrap();
    assert_eq!(*region, Rect::new(0, 0, 135, 240));
    assert!(buffer.pixels().iter().all(|&p| p.raw() == 0x00F8));
}

#[test]
fn test_fill_rect_submits_exact_region() {
    let mut surface = RecordingSurface::new(135, 240);
    let region = Rect::new(20, 30, 40, 8);
    fill_rect(&mut surface, region, Color::LIGHT_PURPLE).unwrap();

    assert_eq!(surface.regions(), [region]);
    let (_, buffer) = surface.last().unwrap();
    assert_eq!((buffer.width(), buffer.height()), (40, 8));
    assert!(buffer.pixels().iter().all(|&p| p.raw() == 0x9EC3));
}

#[test]
fn test_fill_rect_at_origin_is_checked() {
    // A region starting at 0 must still be validated against the far edge
    let mut surface = RecordingSurface::new(10, 10);
    assert!(matches!(
        fill_rect(&mut surface, Rect::new(0, 0, 11, 1), Color::WHITE),
        Err(DrawError::OutOfBounds { .. })
    ));
    assert!(matches!(
        fill_rect(&mut surface, Rect::new(0, 0, 1, 11), Color::WHITE),
        Err(DrawError::OutOfBounds { .. })
    ));
    assert!(surface.submissions.is_empty());
}

#[test]
fn test_fill_rect_surface_failure() {
    let mut surface = RecordingSurface::new(10, 10).failing_on(0);
    let result = fill_rect(&mut surface, Rect::new(0, 0, 2, 2), Color::GREEN);
    assert!(matches!(result, Err(DrawError::SurfaceFailure(_))));
}

#[test]
fn test_fill_display_surface_failure() {
    let mut surface = RecordingSurface::new(10, 10).failing_on(0);
    assert!(matches!(
        fill_display(&mut surface, Color::GREEN),
        Err(DrawError::SurfaceFailure(_))
    ));
}

#[test]
fn test_draw_image_passes_pixels_through() {
    let pixels = (0..6u16).map(Color::from_raw).collect::<Vec<_>>();
    let image = PixelBuffer::try_from_pixels(3, 2, pixels).unwrap();
    let mut surface = RecordingSurface::new(10, 10);

    draw_image(&mut surface, Point::new(7, 8), &image).unwrap();

    let (region, buffer) = surface.last().unwrap();
    assert_eq!(*region, Rect::new(7, 8, 3, 2));
    assert_eq!(buffer, &image);
}

#[test]
fn test_draw_image_out_of_bounds() {
    let image = PixelBuffer::try_filled(3, 2, Color::BLUE).unwrap();
    let mut surface = RecordingSurface::new(10, 10);

    assert_eq!(
        draw_image(&mut surface, Point::new(8, 0), &image),
        Err(DrawError::OutOfBounds {
            region: Rect::new(8, 0, 3, 2),
            width: 10,
            height: 10,
        })
    );
    assert!(surface.submissions.is_empty());
}
