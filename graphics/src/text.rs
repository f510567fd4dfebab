//! Glyph-sequence layout
//!
//! Text runs left to right on a single line. There is no wrapping: the
//! cursor only ever moves along x, and a glyph that would leave the display
//! ends the run with `OutOfBounds`.

use font::GlyphTable;
use shared::{DrawError, Point, Rect, Result};

use crate::draw::{check_bounds, submit};
use crate::scaler::scale;
use crate::surface::DisplaySurface;

/// Position where the next glyph's top-left corner lands
pub type Cursor = Point;

/// Layout parameters for a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Integer enlargement applied to every glyph (at least 1)
    pub scale: usize,
    /// Unscaled gap between glyphs, in glyph pixels
    pub spacing: usize,
}

impl TextStyle {
    pub const DEFAULT: TextStyle = TextStyle {
        scale: 1,
        spacing: 1,
    };

    pub const fn new(scale: usize, spacing: usize) -> Self {
        Self { scale, spacing }
    }

    pub const fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Horizontal cursor step after a glyph `glyph_width` pixels wide
    pub const fn advance(&self, glyph_width: usize) -> usize {
        self.spacing
            .saturating_add(glyph_width)
            .saturating_mul(self.scale)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Draw `text` with its first glyph at `start`
///
/// Each glyph is selected from `table`, enlarged when `style.scale > 1`,
/// checked against the display bounds and submitted; the cursor then moves
/// right by `(spacing + glyph_width) * scale`. The first failure stops the
/// run: glyphs already submitted stay on the display and nothing after the
/// failing glyph is drawn. On success the cursor after the last glyph is
/// returned.
pub fn draw_text<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    start: Point,
    table: &GlyphTable,
    style: TextStyle,
    text: &str,
) -> Result<Cursor> {
    if style.scale == 0 {
        log::error!("Text scale cannot be 0");
        return Err(DrawError::InvalidScaleFactor {
            scale_x: 0,
            scale_y: 0,
        });
    }

    let geometry = surface.geometry();
    let advance = style.advance(table.glyph_width());
    let mut cursor = start;

    for character in text.chars() {
        let glyph = table.select(character)?;
        let glyph = if style.scale > 1 {
            scale(&glyph, style.scale, style.scale)?
        } else {
            glyph
        };

        let region = Rect::from_point_size(cursor, glyph.width(), glyph.height());
        check_bounds(&geometry, region)?;
        submit(surface, region, &glyph)?;

        cursor.x = cursor.x.saturating_add(advance);
    }

    Ok(cursor)
}

/// Horizontal extent of `len` glyphs drawn with `style`, without the
/// trailing spacing after the last one
pub fn text_width(table: &GlyphTable, style: TextStyle, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    style
        .advance(table.glyph_width())
        .saturating_mul(len)
        .saturating_sub(style.spacing.saturating_mul(style.scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use alloc::vec;
    use font::FontKind;
    use shared::{Color, DisplayGeometry};

    #[test]
    fn test_style_advance() {
        assert_eq!(TextStyle::DEFAULT.advance(5), 6);
        assert_eq!(TextStyle::new(3, 1).advance(5), 18);
        assert_eq!(TextStyle::new(2, 0).advance(3), 6);
        assert_eq!(TextStyle::default().with_scale(4).with_spacing(2), TextStyle::new(4, 2));
    }

    #[test]
    fn test_text_width() {
        let table = GlyphTable::build(FontKind::Letters, Color::WHITE, Color::BLACK).unwrap();
        assert_eq!(text_width(&table, TextStyle::DEFAULT, 0), 0);
        assert_eq!(text_width(&table, TextStyle::DEFAULT, 1), 5);
        assert_eq!(text_width(&table, TextStyle::DEFAULT, 3), 17);
        assert_eq!(text_width(&table, TextStyle::new(2, 1), 3), 34);
    }

    #[test]
    fn test_rendered_width_matches_text_width() {
        let table = GlyphTable::build(FontKind::Letters, Color::WHITE, Color::BLACK).unwrap();
        let style = TextStyle::new(2, 1);
        let mut pixels = vec![Color::BLACK; 40 * 12];
        let mut fb = Framebuffer::new(DisplayGeometry::new(40, 12), &mut pixels).unwrap();

        let cursor = draw_text(&mut fb, Point::new(0, 0), &table, style, "abc").unwrap();
        assert_eq!(cursor, Point::new(36, 0));
        assert_eq!(text_width(&table, style, 3), cursor.x - style.spacing * style.scale);
    }

    #[test]
    fn test_zero_scale_draws_nothing() {
        let table = GlyphTable::build(FontKind::Digits, Color::WHITE, Color::BLACK).unwrap();
        let mut pixels = vec![Color::PINK; 100];
        let mut fb = Framebuffer::new(DisplayGeometry::new(10, 10), &mut pixels).unwrap();

        assert!(matches!(
            draw_text(&mut fb, Point::new(0, 0), &table, TextStyle::new(0, 1), "1"),
            Err(DrawError::InvalidScaleFactor { .. })
        ));
        assert!(fb.buffer().iter().all(|&p| p == Color::PINK));
    }
}
