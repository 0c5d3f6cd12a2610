// One error type for the whole editor.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Pointer landed outside the block grid. The controller drops these silently.
    #[error("pointer ({x}, {y}) is outside the block grid")]
    OutOfBounds { x: f32, y: f32 },

    /// Color string from the picker could not be parsed as `#rrggbb`.
    #[error("invalid color {0:?}: expected #rrggbb")]
    Decode(String),

    /// Writing the edited image failed.
    #[error("save failed: {0}")]
    Persistence(String),

    #[error("image load error: {0}")]
    ImageLoad(String),

    #[error("block size must be at least 1 (got {0})")]
    InvalidBlockSize(u32),

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),
}
