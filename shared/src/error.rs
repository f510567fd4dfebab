// Error types for drawing operations

use thiserror::Error;

use crate::Rect;

pub type Result<T> = core::result::Result<T, DrawError>;

/// Opaque failure reported by a display surface
///
/// The rendering core never inspects the reason; it is only carried back to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("display surface failure: {reason}")]
pub struct SurfaceError {
    reason: &'static str,
}

impl SurfaceError {
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Drawing-related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("Scale factors must be non-zero (got {scale_x}x{scale_y})")]
    InvalidScaleFactor { scale_x: usize, scale_y: usize },

    #[error("Glyph {character:?} out of range (table starts at {first:?} with {count} glyphs)")]
    GlyphOutOfRange {
        character: char,
        first: char,
        count: usize,
    },

    #[error("Draw region {region:?} exceeds display bounds {width}x{height}")]
    OutOfBounds {
        region: Rect,
        width: usize,
        height: usize,
    },

    #[error("Could not allocate a buffer of {pixels} pixels")]
    OutOfMemory { pixels: usize },

    #[error(transparent)]
    SurfaceFailure(#[from] SurfaceError),

    #[error("Pixel data length {actual} does not match dimensions ({expected} expected)")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Palette already holds the maximum number of entries")]
    PaletteFull,
}
