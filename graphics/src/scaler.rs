//! Integer image scaling by block replication

use shared::{Color, DrawError, PixelBuffer, Result};

/// Produce a copy of `buffer` enlarged `scale_x` times horizontally and
/// `scale_y` times vertically
///
/// Every source pixel becomes a `scale_x` x `scale_y` block of the same
/// color. Each output block row is built once by horizontal replication and
/// then copied `scale_y - 1` times beneath itself.
pub fn scale(buffer: &PixelBuffer, scale_x: usize, scale_y: usize) -> Result<PixelBuffer> {
    if scale_x == 0 || scale_y == 0 {
        log::error!("Scaling cannot be 0 ({}x{})", scale_x, scale_y);
        return Err(DrawError::InvalidScaleFactor { scale_x, scale_y });
    }

    let (width, height) = match (
        buffer.width().checked_mul(scale_x),
        buffer.height().checked_mul(scale_y),
    ) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            log::error!("Scaled image size overflows");
            return Err(DrawError::OutOfMemory { pixels: usize::MAX });
        }
    };

    let mut scaled = PixelBuffer::try_filled(width, height, Color::BLACK)?;
    if scaled.is_empty() {
        return Ok(scaled);
    }

    let block_len = width * scale_y;
    let source_rows = buffer.pixels().chunks_exact(buffer.width());
    let blocks = scaled.pixels_mut().chunks_exact_mut(block_len);

    for (source, block) in source_rows.zip(blocks) {
        for (run, &pixel) in block[..width].chunks_exact_mut(scale_x).zip(source) {
            run.fill(pixel);
        }
        for line in 1..scale_y {
            block.copy_within(..width, line * width);
        }
    }

    Ok(scaled)
}
