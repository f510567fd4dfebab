// graphics/src/lib.rs

#![cfg_attr(not(test), no_std)]

//! Rendering core for small 5-6-5 displays
//!
//! Turns glyph tables and solid fills into panel-ready pixel buffers and
//! hands them to a [`DisplaySurface`]. All buffers reaching the surface are
//! already in the panel's byte order.

extern crate alloc;

pub mod draw;
pub mod framebuffer;
pub mod number;
pub mod scaler;
pub mod surface;
pub mod text;

pub use draw::{draw_image, fill_display, fill_rect};
pub use font::{FontKind, FontMetrics, GlyphTable};
pub use framebuffer::Framebuffer;
pub use number::{draw_number, format, NumberText};
pub use scaler::scale;
pub use shared::{
    apply_palette, swap_buffer_byte_order, swap_byte_order, Color, DisplayGeometry, DrawError,
    DrawRegion, Palette, PanelWindow, PixelBuffer, PixelFormat, Point, Rect, Result,
};
pub use surface::{DisplaySurface, SurfaceError};
pub use text::{draw_text, text_width, Cursor, TextStyle};
