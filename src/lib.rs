//! Block-grid image editor.
//!
//! An image is cut into square blocks; each block can be repainted with the
//! active color, sampled into the color picker, or reverted to how it was
//! loaded. [`grid::BlockGrid`] owns the pixels, [`controller::EditorController`]
//! turns input events into grid operations, and everything window-related
//! sits behind the traits in [`controller`].

pub mod cli;
pub mod color;
pub mod controller;
pub mod draw;
pub mod error;
pub mod grid;
pub mod io;
pub mod picker;
pub mod types;

pub use controller::{ColorPicker, EditorController, EditorEvent, ImageSink, Outcome, Renderer};
pub use error::Error;
pub use grid::BlockGrid;
pub use types::{BlockIndex, PointerButton, PointerEvent};
