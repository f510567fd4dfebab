//! Palette mapping and byte-order conversion for 5-6-5 colors
//!
//! Indexed images are stored in the same `Color` slots they will later hold
//! real colors in: a template pixel with raw value `1` is rewritten in place
//! to whatever color index `1` maps to.

use heapless::Vec;

use crate::error::{DrawError, Result};
use crate::Color;

/// Maximum number of index -> color entries in a palette
pub const PALETTE_CAPACITY: usize = 8;

/// Small ordered mapping from pixel indices to colors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(u16, Color), PALETTE_CAPACITY>,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Palette for 1-bit glyph templates: index 0 is the background, index 1
    /// the foreground.
    pub fn two_tone(foreground: Color, background: Color) -> Self {
        let mut entries = Vec::new();
        // Capacity is far above two; neither push can fail.
        let _ = entries.push((0, background));
        let _ = entries.push((1, foreground));
        Self { entries }
    }

    /// Map `index` to `color`, replacing an existing mapping for the same
    /// index.
    pub fn insert(&mut self, index: u16, color: Color) -> Result<()> {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == index) {
            entry.1 = color;
            return Ok(());
        }
        self.entries
            .push((index, color))
            .map_err(|_| DrawError::PaletteFull)
    }

    pub fn lookup(&self, index: u16) -> Option<Color> {
        self.entries
            .iter()
            .find(|(key, _)| *key == index)
            .map(|&(_, color)| color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Swap the high and low bytes of a color
///
/// Converts between host order and the big-endian order the panel reads.
/// Applying it twice yields the original value.
pub const fn swap_byte_order(color: Color) -> Color {
    color.swap_bytes()
}

/// Replace every pixel whose raw value is a palette index with the mapped
/// color. Pixels with no mapping are left untouched.
pub fn apply_palette(pixels: &mut [Color], palette: &Palette) {
    for pixel in pixels.iter_mut() {
        if let Some(color) = palette.lookup(pixel.raw()) {
            *pixel = color;
        }
    }
}

/// Byte-swap a whole buffer in place
pub fn swap_buffer_byte_order(pixels: &mut [Color]) {
    for pixel in pixels.iter_mut() {
        *pixel = swap_byte_order(*pixel);
    }
}
