//! Decimal formatting for numeric glyph rendering

use core::fmt::Write;

use font::GlyphTable;
use shared::{Point, Result};

use crate::surface::DisplaySurface;
use crate::text::{draw_text, Cursor, TextStyle};

/// Longest decimal form of an `i32`: ten digits and a sign
pub const NUMBER_TEXT_CAPACITY: usize = 11;

/// Fixed-capacity decimal text of an `i32`
pub type NumberText = heapless::String<NUMBER_TEXT_CAPACITY>;

/// Canonical decimal representation of `value`
///
/// Negative values get a leading `-`; there are no leading zeros except for
/// `0` itself.
pub fn format(value: i32) -> NumberText {
    let mut text = NumberText::new();
    let written = write!(text, "{}", value);
    debug_assert!(written.is_ok(), "{} does not fit in {} chars", value, NUMBER_TEXT_CAPACITY);
    text
}

/// Draw `value` in decimal using `table`, which must cover '-' and the digits
pub fn draw_number<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    start: Point,
    table: &GlyphTable,
    style: TextStyle,
    value: i32,
) -> Result<Cursor> {
    let text = format(value);
    log::debug!("Drawing number {} at ({}, {})", text, start.x, start.y);
    draw_text(surface, start, table, style, &text)
}
