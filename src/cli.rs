// Launcher arguments.
//
// Usage:
//   block-painter som.png --fence -o som_edited.png
//   block-painter map.png -b 8 -s 4

use clap::Parser;
use std::path::PathBuf;

/// Repaint an image block by block.
///
/// Left click paints the block under the cursor, right click picks up its
/// color, middle click restores it. H + six hex digits + Enter sets the
/// paint color; S saves; Escape quits.
#[derive(Parser, Debug)]
#[command(name = "block-painter", version)]
pub struct Args {
    /// Image to edit (any format the `image` crate reads).
    pub input: PathBuf,

    /// Where S writes the edited image; format follows the extension.
    #[arg(short, long, default_value = "edited.png", value_name = "FILE")]
    pub output: PathBuf,

    /// Side length of a block in image pixels.
    #[arg(short, long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..))]
    pub block_size: u32,

    /// Keep a 2-pixel separator on the top and right of every block.
    #[arg(long)]
    pub fence: bool,

    /// Display zoom (screen pixels per image pixel).
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=16))]
    pub scale: u32,
}
