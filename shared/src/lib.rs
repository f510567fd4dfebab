#![cfg_attr(not(test), no_std)]

// Shared crate for the display stack
// Pixel, color and geometry types used by the font and graphics crates

extern crate alloc;

pub mod buffer;
pub mod color;
pub mod error;
pub mod framebuffer;

/// 16-bit packed RGB color in 5-6-5 layout
///
/// Bits 15..11 hold red, 10..5 green and 4..0 blue. The raw value is kept
/// as-is, so byte-order conversion is a bit-exact swap rather than a
/// recomputation from components.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(u16);

impl Color {
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const PINK: Color = Color(0xF81F);
    pub const PURPLE: Color = Color(0x981F);
    pub const LIGHT_PURPLE: Color = Color(0xC39E);
    pub const AAU_BLUE: Color = Color(0x318F);

    /// Wrap an already packed 5-6-5 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 5-bit red, 6-bit green and 5-bit blue components
    ///
    /// Components wider than their field are masked, never carried into the
    /// neighbouring field.
    pub const fn from_rgb565(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0x1F) << 11) | ((g as u16 & 0x3F) << 5) | (b as u16 & 0x1F))
    }

    /// Truncate 8-bit-per-channel RGB to 5-6-5
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb565(r >> 3, g >> 2, b >> 3)
    }

    /// The packed 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn r(self) -> u8 {
        ((self.0 >> 11) & 0x1F) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Swap the high and low bytes of the packed value
    pub const fn swap_bytes(self) -> Self {
        Self(self.0.swap_bytes())
    }

    /// Exchange the red and blue fields (RGB <-> BGR panel ordering)
    pub const fn swap_red_blue(self) -> Self {
        Self::from_rgb565(self.b(), self.g(), self.r())
    }
}

/// Point in 2D display space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    /// Create a new Point
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Rectangle structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Rectangle in display coordinates targeted by a buffer submission
pub type DrawRegion = Rect;

impl Rect {
    /// Create a new Rectangle
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle whose top-left corner is `point`
    pub const fn from_point_size(point: Point, width: usize, height: usize) -> Self {
        Self::new(point.x, point.y, width, height)
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the right edge (x + width), saturating at `usize::MAX`
    pub const fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (y + height), saturating at `usize::MAX`
    pub const fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check that the rectangle lies inside a `width` x `height` area anchored
    /// at the origin.
    ///
    /// Uses checked addition: a rectangle whose edge overflows `usize` never
    /// fits.
    pub const fn fits_within(&self, width: usize, height: usize) -> bool {
        let right = match self.x.checked_add(self.width) {
            Some(right) => right,
            None => return false,
        };
        let bottom = match self.y.checked_add(self.height) {
            Some(bottom) => bottom,
            None => return false,
        };
        right <= width && bottom <= height
    }
}

pub use buffer::PixelBuffer;
pub use color::{apply_palette, swap_buffer_byte_order, swap_byte_order, Palette};
pub use error::{DrawError, Result, SurfaceError};
pub use framebuffer::{DisplayGeometry, PanelWindow, PixelFormat};
