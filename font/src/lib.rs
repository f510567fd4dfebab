// font/src/lib.rs

#![cfg_attr(not(test), no_std)]

//! Fixed-size bitmap fonts for 5-6-5 displays
//!
//! A [`GlyphTable`] is built once from one of the built-in templates and a
//! foreground/background color pair. Glyph pixels are stored already
//! byte-swapped into the order the panel reads, so selected glyphs can be
//! submitted without further conversion.

extern crate alloc;

mod glyphs;

use shared::{apply_palette, swap_buffer_byte_order, Color, DrawError, Palette, PixelBuffer};

pub type Result<T> = shared::Result<T>;

/// Dimensions and character range of a glyph family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub glyph_width: usize,
    pub glyph_height: usize,
    pub glyph_count: usize,
    /// Character code mapped to glyph 0
    pub code_point_offset: u32,
}

impl FontMetrics {
    /// Number of pixels in one glyph
    pub const fn glyph_len(&self) -> usize {
        self.glyph_width * self.glyph_height
    }

    /// First character covered by the family
    pub const fn first_char(&self) -> char {
        match char::from_u32(self.code_point_offset) {
            Some(c) => c,
            None => char::REPLACEMENT_CHARACTER,
        }
    }
}

/// Built-in glyph families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontKind {
    /// 5x6 lowercase 'a'..='z', then a colon at '{' and a blank at '|'
    Letters,
    /// 3x5 '(' ')' '*' '+' ',' '-' '.' '/' and '0'..='9'
    Digits,
}

impl FontKind {
    pub const fn metrics(self) -> FontMetrics {
        match self {
            FontKind::Letters => FontMetrics {
                glyph_width: 5,
                glyph_height: 6,
                glyph_count: 28,
                code_point_offset: 97,
            },
            FontKind::Digits => FontMetrics {
                glyph_width: 3,
                glyph_height: 5,
                glyph_count: 18,
                code_point_offset: 40,
            },
        }
    }

    fn template(self) -> &'static [u8] {
        match self {
            FontKind::Letters => &glyphs::LETTERS,
            FontKind::Digits => &glyphs::DIGITS,
        }
    }
}

/// Colored glyphs of one family stored in a single backing buffer
///
/// The backing buffer is `glyph_width` wide with the glyphs stacked
/// vertically, so glyph `i` is the contiguous pixel run starting at
/// `i * glyph_width * glyph_height`. The table is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    kind: FontKind,
    metrics: FontMetrics,
    backing: PixelBuffer,
}

impl GlyphTable {
    /// Instantiate a built-in template in the given colors
    ///
    /// Template index 0 becomes `background`, index 1 `foreground`; every
    /// pixel is then byte-swapped once so later draws need no conversion.
    pub fn build(kind: FontKind, foreground: Color, background: Color) -> Result<Self> {
        let metrics = kind.metrics();
        let template = kind.template();

        let mut backing = PixelBuffer::try_filled(
            metrics.glyph_width,
            metrics.glyph_height * metrics.glyph_count,
            background,
        )?;
        debug_assert_eq!(backing.len(), template.len());

        let pixels = backing.pixels_mut();
        for (pixel, &index) in pixels.iter_mut().zip(template) {
            *pixel = Color::from_raw(index as u16);
        }
        apply_palette(pixels, &Palette::two_tone(foreground, background));
        swap_buffer_byte_order(pixels);

        log::debug!(
            "Built {:?} glyph table: {} glyphs of {}x{}",
            kind,
            metrics.glyph_count,
            metrics.glyph_width,
            metrics.glyph_height
        );

        Ok(Self {
            kind,
            metrics,
            backing,
        })
    }

    /// Copy the glyph for `character` into a standalone buffer
    ///
    /// The copy is owned by the caller; modifying it leaves the table
    /// untouched.
    pub fn select(&self, character: char) -> Result<PixelBuffer> {
        let index = self.glyph_index(character).ok_or_else(|| {
            log::warn!("Glyph {:?} not present in {:?} table", character, self.kind);
            DrawError::GlyphOutOfRange {
                character,
                first: self.metrics.first_char(),
                count: self.metrics.glyph_count,
            }
        })?;

        let len = self.metrics.glyph_len();
        let start = index * len;
        let mut glyph = PixelBuffer::try_filled(
            self.metrics.glyph_width,
            self.metrics.glyph_height,
            Color::BLACK,
        )?;
        glyph
            .pixels_mut()
            .copy_from_slice(&self.backing.pixels()[start..start + len]);

        Ok(glyph)
    }

    /// Check whether `character` has a glyph in this table
    pub fn contains(&self, character: char) -> bool {
        self.glyph_index(character).is_some()
    }

    pub fn kind(&self) -> FontKind {
        self.kind
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    pub fn glyph_width(&self) -> usize {
        self.metrics.glyph_width
    }

    pub fn glyph_height(&self) -> usize {
        self.metrics.glyph_height
    }

    pub fn glyph_count(&self) -> usize {
        self.metrics.glyph_count
    }

    pub fn code_point_offset(&self) -> u32 {
        self.metrics.code_point_offset
    }

    fn glyph_index(&self, character: char) -> Option<usize> {
        (character as u32)
            .checked_sub(self.metrics.code_point_offset)
            .map(|index| index as usize)
            .filter(|&index| index < self.metrics.glyph_count)
    }
}
