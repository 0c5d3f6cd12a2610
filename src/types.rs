// Core value types shared by the grid, the controller and the window.

/// Packed pixels ready for the window.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// Address of one block in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockIndex {
    pub row: u32,
    pub col: u32,
}

impl BlockIndex {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Half-open pixel rectangle of a block that paint/revert touch.
/// Empty when the fence eats the whole block (tiny block sizes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interior {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

impl Interior {
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Every (x, y) inside the rectangle, row by row.
    pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        let Interior { x0, x1, y0, y1 } = self;
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Paint the block with the active color.
    Primary,
    /// Copy the block's color into the picker.
    Secondary,
    /// Put the block back the way it was loaded.
    Tertiary,
}

/// A click in image pixel space. Coordinates are floored before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, button: PointerButton) -> Self {
        Self { x, y, button }
    }
}
