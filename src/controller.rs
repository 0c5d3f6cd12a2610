// Editor controller: turns clicks, picker changes and save requests into
// grid operations. Knows nothing about windows; the collaborators below are
// the seams the launcher (or a test) plugs into.

use crate::color::{hex_to_rgb, rgb_to_hex, DEFAULT_PICKER_HEX};
use crate::error::Error;
use crate::grid::BlockGrid;
use crate::types::{BlockIndex, PointerButton, PointerEvent};
use image::{Rgb, RgbImage};
use log::{debug, info, warn};

/// Color picker widget as seen from the controller.
pub trait ColorPicker {
    /// Display this `#rrggbb` value in the widget.
    fn show(&mut self, hex: &str);
}

/// Whatever puts the working buffer on screen.
pub trait Renderer {
    /// The working buffer changed; repaint on the next cycle.
    fn request_redraw(&mut self);
}

/// Where a saved image ends up.
pub trait ImageSink {
    /// Human-readable name of the target, used in the confirmation.
    fn target(&self) -> String;
    fn write(&mut self, image: &RgbImage) -> Result<(), Error>;
}

/// All inputs the controller understands, one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Pointer(PointerEvent),
    ColorChanged(String),
    Save,
}

/// What an event ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ignored,
    Painted(BlockIndex),
    Sampled(BlockIndex, Rgb<u8>),
    Reverted(BlockIndex),
    ColorSet(Rgb<u8>),
    Saved(String),
}

pub struct EditorController<P, R, S> {
    grid: BlockGrid,
    active: Rgb<u8>,
    picker: P,
    renderer: R,
    sink: S,
}

impl<P: ColorPicker, R: Renderer, S: ImageSink> EditorController<P, R, S> {
    /// Picker starts at `#0000FF` and the active color follows it.
    pub fn new(grid: BlockGrid, mut picker: P, renderer: R, sink: S) -> Result<Self, Error> {
        let active = hex_to_rgb(DEFAULT_PICKER_HEX)?;
        picker.show(DEFAULT_PICKER_HEX);
        Ok(Self { grid, active, picker, renderer, sink })
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn active_color(&self) -> Rgb<u8> {
        self.active
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut P {
        &mut self.picker
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn handle(&mut self, event: EditorEvent) -> Result<Outcome, Error> {
        match event {
            EditorEvent::Pointer(p) => Ok(self.handle_pointer(p)),
            EditorEvent::ColorChanged(hex) => self.on_color_change(&hex).map(Outcome::ColorSet),
            EditorEvent::Save => self.save().map(Outcome::Saved),
        }
    }

    /// One click → at most one grid operation. Clicks off the grid do nothing.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Outcome {
        let index = match self.grid.resolve(event.x, event.y) {
            Ok(index) => index,
            Err(e) => {
                debug!("ignoring {:?} click: {e}", event.button);
                return Outcome::Ignored;
            }
        };

        match event.button {
            PointerButton::Primary => {
                self.grid.paint(index, self.active);
                self.renderer.request_redraw();
                debug!("painted block ({}, {}) {}", index.row, index.col, rgb_to_hex(self.active));
                Outcome::Painted(index)
            }
            PointerButton::Secondary => {
                let Some(color) = self.grid.sample_color_at(index) else {
                    return Outcome::Ignored;
                };
                let hex = rgb_to_hex(color);
                self.picker.show(&hex);
                // The widget reports its new value right back, like a user edit.
                match self.on_color_change(&hex) {
                    Ok(color) => {
                        debug!("sampled block ({}, {}) {hex}", index.row, index.col);
                        Outcome::Sampled(index, color)
                    }
                    Err(e) => {
                        warn!("sampled color rejected: {e}");
                        Outcome::Ignored
                    }
                }
            }
            PointerButton::Tertiary => {
                self.grid.revert(index);
                self.renderer.request_redraw();
                debug!("reverted block ({}, {})", index.row, index.col);
                Outcome::Reverted(index)
            }
        }
    }

    /// New value from the picker. A bad string leaves the active color alone.
    pub fn on_color_change(&mut self, hex: &str) -> Result<Rgb<u8>, Error> {
        let color = hex_to_rgb(hex).inspect_err(|e| warn!("{e}"))?;
        self.active = color;
        Ok(color)
    }

    /// Hand the working buffer to the sink and return the confirmation line,
    /// e.g. "Image saved as out.png (3 blocks edited)".
    pub fn save(&mut self) -> Result<String, Error> {
        self.sink.write(self.grid.snapshot())?;
        let edited = self.grid.modified_blocks().len();
        let plural = if edited == 1 { "" } else { "s" };
        let msg = format!("Image saved as {} ({edited} block{plural} edited)", self.sink.target());
        info!("{msg}");
        Ok(msg)
    }
}
