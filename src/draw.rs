// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the working image, zoomed by an integer factor.
// 2) A crosshair and a block outline that follow your mouse.
// 3) A tiny 5x7 bitmap font for the HUD strip under the image.

use crate::color::pack_rgb;
use crate::controller::Renderer;
use crate::error::Error;
use crate::types::{FrameBuffer, Interior, PointerButton};
use image::{Rgb, RgbImage};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Height of the HUD strip drawn below the image, in screen pixels.
pub const HUD_HEIGHT: usize = 14;

pub struct Drawer {
    window: Window,           // the on-screen window you see
    scale: usize,             // screen pixels per image pixel
    buttons_down: [bool; 3],  // last frame's primary/secondary/tertiary state
}

impl Drawer {
    /// Create a window big enough for the zoomed image plus the HUD strip.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, scale: usize) -> Result<Self, Error> {
        let window = Window::new(title, width * scale, height * scale + HUD_HEIGHT, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, scale, buttons_down: [false; 3] })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Mouse position in *image* pixels, or None when the cursor is outside
    /// the window. Not floored; the grid does that.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        let s = self.scale as f32;
        self.window.get_mouse_pos(MouseMode::Discard).map(|(x, y)| (x / s, y / s))
    }

    /// Buttons that went down since the last call (one click = one event).
    pub fn clicked_buttons(&mut self) -> Vec<PointerButton> {
        const BUTTONS: [(MouseButton, PointerButton); 3] = [
            (MouseButton::Left, PointerButton::Primary),
            (MouseButton::Right, PointerButton::Secondary),
            (MouseButton::Middle, PointerButton::Tertiary),
        ];
        let mut clicked = Vec::new();
        for (slot, (mouse, button)) in BUTTONS.into_iter().enumerate() {
            let down = self.window.get_mouse_down(mouse);
            if down && !self.buttons_down[slot] {
                clicked.push(button);
            }
            self.buttons_down[slot] = down;
        }
        clicked
    }

    pub fn keys_pressed(&self) -> Vec<Key> {
        self.window.get_keys_pressed(KeyRepeat::No)
    }
}

/// Dirty flag the controller raises after a block changes.
#[derive(Debug, Default)]
pub struct RedrawFlag {
    dirty: bool,
}

impl RedrawFlag {
    /// Returns true once per request and clears the flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Renderer for RedrawFlag {
    fn request_redraw(&mut self) {
        self.dirty = true;
    }
}

/// Copy the image into the top of the framebuffer, each pixel as a
/// `scale`×`scale` square.
/// Visual: the edited image at the chosen zoom.
pub fn blit_image(fb: &mut FrameBuffer, image: &RgbImage, scale: usize) {
    for (x, y, px) in image.enumerate_pixels() {
        let color = pack_rgb(*px);
        let (sx, sy) = (x as usize * scale, y as usize * scale);
        for dy in 0..scale {
            let row = (sy + dy) * fb.width;
            if sy + dy >= fb.height {
                break;
            }
            let start = row + sx;
            let end = (start + scale).min(row + fb.width);
            if start < end {
                fb.pixels[start..end].fill(color);
            }
        }
    }
}

/* ---------- Software drawing: pixels, lines, rectangles ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Solid rectangle, clipped to the framebuffer.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/// 1-pixel outline around a block's interior (image coords), zoomed.
/// Visual: a thin frame shows which block a click would hit.
pub fn draw_block_outline(fb: &mut FrameBuffer, rect: Interior, scale: usize, color: u32) {
    if rect.is_empty() {
        return;
    }
    let s = scale as i32;
    let (x0, y0) = (rect.x0 as i32 * s, rect.y0 as i32 * s);
    let (x1, y1) = (rect.x1 as i32 * s - 1, rect.y1 as i32 * s - 1);
    draw_line(fb, x0, y0, x1, y0, color);
    draw_line(fb, x1, y0, x1, y1, color);
    draw_line(fb, x1, y1, x0, y1, color);
    draw_line(fb, x0, y1, x0, y0, color);
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a “+” shape (with a tiny gap at the center) follows your mouse.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
    put_pixel(fb, cx, cy, color);
}

/// HUD strip: color swatch, picker label, then a status message.
/// Visual: dark bar under the image, e.g. "[■] #0000ff | SAVED".
pub fn draw_hud(fb: &mut FrameBuffer, top: usize, swatch: Rgb<u8>, label: &str, status: &str) {
    let top = top as i32;
    fill_rect(fb, 0, top, fb.width as i32, HUD_HEIGHT as i32, 0x00_20_20_20);
    fill_rect(fb, 3, top + 2, 10, 10, 0x00_FF_FF_FF);
    fill_rect(fb, 4, top + 3, 8, 8, pack_rgb(swatch));
    let text = if status.is_empty() { label.to_string() } else { format!("{label} | {status}") };
    draw_text_5x7(fb, 18, top + 4, &text, 0x00_FF_FF_FF);
}

/* ---------- 5x7 bitmap font (hex digits + the few words the HUD uses) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
/// Lower-case letters borrow the upper-case shapes.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '#' => g!(0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, 6 pixels per character.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
