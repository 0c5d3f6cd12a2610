// Block grid model: the image cut into b×b blocks.
// Visual: every click lands in exactly one block; that block's interior is
// what changes on screen. Remainder pixels on the bottom/right edge never do.

use crate::error::Error;
use crate::types::{BlockIndex, Interior};
use image::{Rgb, RgbImage};
use log::debug;

/// Width of the separator left untouched on the top and right of each block.
pub const FENCE_INSET: u32 = 2;

pub struct BlockGrid {
    image: RgbImage,    // working buffer: every edit lands here
    original: RgbImage, // snapshot at load time, source for revert
    block_size: u32,
    fence: bool,
    rows: u32,
    cols: u32,
}

impl BlockGrid {
    /// Take ownership of the loaded image; both buffers start identical.
    pub fn new(image: RgbImage, block_size: u32, fence: bool) -> Result<Self, Error> {
        if block_size == 0 {
            return Err(Error::InvalidBlockSize(block_size));
        }
        let rows = image.height() / block_size;
        let cols = image.width() / block_size;
        let original = image.clone();
        debug!("block grid {rows}x{cols} (block size {block_size}, fence {fence})");
        Ok(Self { image, original, block_size, fence, rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn fence(&self) -> bool {
        self.fence
    }

    pub fn contains(&self, index: BlockIndex) -> bool {
        index.row < self.rows && index.col < self.cols
    }

    /// Map an image-space pointer position to the block under it.
    ///
    /// Coordinates are floored first; anything negative, non-finite or past
    /// the last full block is `OutOfBounds`.
    pub fn resolve(&self, x: f32, y: f32) -> Result<BlockIndex, Error> {
        let out = || Error::OutOfBounds { x, y };
        if !x.is_finite() || !y.is_finite() {
            return Err(out());
        }
        let (px, py) = (x.floor(), y.floor());
        if px < 0.0 || py < 0.0 {
            return Err(out());
        }
        // Past the last full block; also keeps the u32 casts below in range.
        let (width, height) = (self.cols * self.block_size, self.rows * self.block_size);
        if px >= width as f32 || py >= height as f32 {
            return Err(out());
        }
        let (col, row) = (px as u32 / self.block_size, py as u32 / self.block_size);
        Ok(BlockIndex::new(row, col))
    }

    /// Pixel rectangle that paint/revert write for this block.
    /// Fence on: top rows and right columns (FENCE_INSET wide) are skipped.
    pub fn interior(&self, index: BlockIndex) -> Option<Interior> {
        if !self.contains(index) {
            return None;
        }
        let b = self.block_size;
        let (top, left) = (index.row * b, index.col * b);
        let (bottom, right) = (top + b, left + b);
        let rect = if self.fence {
            Interior {
                x0: left,
                x1: right.saturating_sub(FENCE_INSET).max(left),
                y0: (top + FENCE_INSET).min(bottom),
                y1: bottom,
            }
        } else {
            Interior { x0: left, x1: right, y0: top, y1: bottom }
        };
        Some(rect)
    }

    /// Fill the block interior with `color`. Out-of-range blocks are ignored.
    pub fn paint(&mut self, index: BlockIndex, color: Rgb<u8>) {
        let Some(rect) = self.interior(index) else {
            return;
        };
        for (x, y) in rect.pixels() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Copy the block interior back from the original buffer.
    /// Fence pixels are left as they are.
    pub fn revert(&mut self, index: BlockIndex) {
        let Some(rect) = self.interior(index) else {
            return;
        };
        for (x, y) in rect.pixels() {
            let px = *self.original.get_pixel(x, y);
            self.image.put_pixel(x, y, px);
        }
    }

    /// Color at the block's midpoint in the working buffer.
    ///
    /// Always `(row*b + b/2, col*b + b/2)`, fence or not, so with the fence on
    /// and tiny blocks the sampled pixel can sit outside the painted interior.
    pub fn sample_color_at(&self, index: BlockIndex) -> Option<Rgb<u8>> {
        if !self.contains(index) {
            return None;
        }
        let half = self.block_size / 2;
        let y = index.row * self.block_size + half;
        let x = index.col * self.block_size + half;
        Some(*self.image.get_pixel(x, y))
    }

    /// The working buffer as it should be written out. Read only.
    pub fn snapshot(&self) -> &RgbImage {
        &self.image
    }

    pub fn original(&self) -> &RgbImage {
        &self.original
    }

    /// True when any interior pixel differs from the original.
    pub fn is_modified(&self, index: BlockIndex) -> bool {
        self.interior(index).is_some_and(|rect| {
            rect.pixels()
                .any(|(x, y)| self.image.get_pixel(x, y) != self.original.get_pixel(x, y))
        })
    }

    /// All blocks that currently differ from the original, row-major.
    pub fn modified_blocks(&self) -> Vec<BlockIndex> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| BlockIndex::new(row, col)))
            .filter(|&index| self.is_modified(index))
            .collect()
    }
}
