// Display geometry description
// What the rendering core knows about a panel: addressable size, the fixed
// offset of its visible area in controller memory, and its pixel format

use crate::{Color, Rect};

/// Pixel format of the panel
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// 16-bit 5-6-5, red in the high bits
    #[default]
    Rgb565,
    /// 16-bit 5-6-5, blue in the high bits
    Bgr565,
}

impl PixelFormat {
    /// Get bytes per pixel for this format
    pub const fn bytes_per_pixel(&self) -> usize {
        2
    }

    /// Serialize one buffer pixel into the byte order the panel reads
    ///
    /// `color` is a buffer pixel, i.e. already byte-swapped by the renderer;
    /// the panel receives its high byte first.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is shorter than two bytes.
    pub fn write_color(&self, buffer: &mut [u8], color: Color) {
        let native = color.swap_bytes();
        let native = match self {
            PixelFormat::Rgb565 => native,
            PixelFormat::Bgr565 => native.swap_red_blue(),
        };
        buffer[..2].copy_from_slice(&native.raw().to_be_bytes());
    }
}

/// Panel-space window covered by a draw region
///
/// Coordinates include the panel offset; the end coordinates are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelWindow {
    pub x_start: usize,
    pub y_start: usize,
    pub x_end: usize,
    pub y_end: usize,
}

/// Addressable geometry of a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayGeometry {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Column of the visible area's left edge in controller memory
    pub x_offset: usize,
    /// Row of the visible area's top edge in controller memory
    pub y_offset: usize,
    /// Pixel format
    pub pixel_format: PixelFormat,
}

impl DisplayGeometry {
    /// 1.14" 135x240 ST7789 panel, whose visible area sits at (52, 40) in
    /// the controller's 240x320 memory.
    pub const TTGO_T_DISPLAY: DisplayGeometry = DisplayGeometry {
        width: 135,
        height: 240,
        x_offset: 52,
        y_offset: 40,
        pixel_format: PixelFormat::Rgb565,
    };

    /// Geometry with no panel offset
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            x_offset: 0,
            y_offset: 0,
            pixel_format: PixelFormat::Rgb565,
        }
    }

    pub const fn with_offset(mut self, x_offset: usize, y_offset: usize) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub const fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    /// The whole display as a region
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Check that `region` lies entirely on the display
    pub const fn contains_region(&self, region: Rect) -> bool {
        region.fits_within(self.width, self.height)
    }

    /// Translate a display region into panel coordinates
    ///
    /// Regions that passed [`contains_region`](Self::contains_region) map
    /// exactly; coordinates of anything else saturate at `usize::MAX`.
    pub const fn panel_window(&self, region: Rect) -> PanelWindow {
        PanelWindow {
            x_start: region.x.saturating_add(self.x_offset),
            y_start: region.y.saturating_add(self.y_offset),
            x_end: region.right().saturating_add(self.x_offset),
            y_end: region.bottom().saturating_add(self.y_offset),
        }
    }

    /// Get the size of a full frame in bytes
    pub const fn frame_bytes(&self) -> usize {
        self.width * self.height * self.pixel_format.bytes_per_pixel()
    }
}
