// What you SEE:
// • The loaded image, zoomed by --scale, with a HUD strip underneath.
// • Left click: paint the block under the cursor with the active color.
// • Right click: pick up that block's color (HUD swatch updates).
// • Middle click: put the block back the way it was loaded.
// • H, six hex digits, Enter: type a new color. S saves. ESC quits.

use block_painter::cli::Args;
use block_painter::draw::{
    blit_image, draw_block_outline, draw_crosshair, draw_hud, Drawer, RedrawFlag, HUD_HEIGHT,
};
use block_painter::io::{load_rgb_image, FileSink};
use block_painter::picker::HexPicker;
use block_painter::types::FrameBuffer;
use block_painter::{BlockGrid, ColorPicker, EditorController, EditorEvent, Error, Outcome, PointerEvent};
use clap::Parser;
use log::{error, info};
use minifb::Key;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    /* --- Image + grid ---
       Visual: nothing yet; the working copy and the untouched original are set up. */
    let image = load_rgb_image(&args.input)?;
    let (w, h) = (image.width() as usize, image.height() as usize);
    let scale = args.scale as usize;
    let grid = BlockGrid::new(image, args.block_size, args.fence)?;
    info!(
        "{}: {w}x{h}, {}x{} blocks of {} px (fence {})",
        args.input.display(),
        grid.rows(),
        grid.cols(),
        grid.block_size(),
        if grid.fence() { "on" } else { "off" },
    );

    let mut editor = EditorController::new(
        grid,
        HexPicker::default(),
        RedrawFlag::default(),
        FileSink::new(&args.output),
    )?;

    /* --- Window ---
       Visual: window opens showing the image with the HUD bar below it. */
    let mut drawer = Drawer::new("Block Painter", w, h, scale)?;

    /* --- Screen buffers ---
       `image_layer` only changes after an edit; `screen` gets overlays each frame. */
    let mut image_layer = FrameBuffer::new(w * scale, h * scale + HUD_HEIGHT);
    blit_image(&mut image_layer, editor.grid().snapshot(), scale);
    let mut screen = image_layer.clone();
    let mut status = String::new();

    /* ------------------------------ Main loop ------------------------------ */
    'frames: while drawer.is_open() {
        /* 1) Keyboard: picker entry first, then save/quit. */
        for key in drawer.keys_pressed() {
            if editor.picker().is_editing() {
                if let Some(hex) = editor.picker_mut().on_key(key) {
                    match editor.handle(EditorEvent::ColorChanged(hex.clone())) {
                        Ok(_) => {
                            editor.picker_mut().show(&hex);
                            status.clear();
                        }
                        Err(_) => status = "ERR".into(), // visual: picker keeps the old color
                    }
                }
                continue;
            }
            match key {
                Key::Escape => break 'frames,
                Key::S => match editor.handle(EditorEvent::Save) {
                    Ok(Outcome::Saved(_)) => status = "SAVED".into(),
                    Ok(_) => {}
                    Err(e) => {
                        error!("{e}");
                        status = "ERR".into();
                    }
                },
                other => {
                    editor.picker_mut().on_key(other);
                }
            }
        }

        /* 2) Mouse: each new button press is one editor event.
              Off-window clicks have no position and are dropped here; off-grid
              clicks are dropped by the controller. */
        let pointer = drawer.mouse_pos();
        let clicks = drawer.clicked_buttons();
        if let Some((x, y)) = pointer {
            for button in clicks {
                editor.handle_pointer(PointerEvent::new(x, y, button));
            }
        }

        /* 3) Re-blit the image only when a block changed. */
        if editor.renderer_mut().take() {
            blit_image(&mut image_layer, editor.grid().snapshot(), scale);
        }
        screen.pixels.copy_from_slice(&image_layer.pixels);

        /* 4) Overlays: hovered block outline, crosshair, HUD. */
        if let Some((x, y)) = pointer {
            let grid = editor.grid();
            if let Some(rect) = grid.resolve(x, y).ok().and_then(|index| grid.interior(index)) {
                draw_block_outline(&mut screen, rect, scale, 0x00_FF_FF_FF); // visual: white frame
            }
            let s = scale as f32;
            draw_crosshair(&mut screen, (x * s) as i32, (y * s) as i32, 6, 0x00_FF_CC_33);
        }
        let picker = editor.picker();
        draw_hud(&mut screen, h * scale, picker.swatch(), &picker.label(), &status);

        /* 5) Present to the window. */
        drawer.present(&screen)?;
    }

    Ok(())
}
