use block_painter::draw::RedrawFlag;
use block_painter::io::{load_rgb_image, FileSink};
use block_painter::picker::HexPicker;
use block_painter::{
    BlockGrid, BlockIndex, EditorController, EditorEvent, Outcome, PointerButton, PointerEvent,
};
use image::{Rgb, RgbImage};
use tempfile::{tempdir, TempDir};

type Editor = EditorController<HexPicker, RedrawFlag, FileSink>;

fn noise(size: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, y| {
        let v = x * 31 + y * 17;
        Rgb([(v % 251) as u8, (v * 3 % 241) as u8, (v * 7 % 239) as u8])
    })
}

// The TempDir must outlive the editor; dropping it removes the saved file.
fn editor(fence: bool) -> (Editor, TempDir) {
    let dir = tempdir().unwrap();
    let grid = BlockGrid::new(noise(36), 12, fence).unwrap();
    let sink = FileSink::new(dir.path().join("edited.png"));
    let ed = EditorController::new(grid, HexPicker::default(), RedrawFlag::default(), sink).unwrap();
    (ed, dir)
}

fn click(x: f32, y: f32, button: PointerButton) -> EditorEvent {
    EditorEvent::Pointer(PointerEvent::new(x, y, button))
}

#[test]
fn paint_revert_sample_save_on_a_three_by_three_grid() {
    let (mut ed, _dir) = editor(false);
    assert_eq!((ed.grid().rows(), ed.grid().cols()), (3, 3));

    // paint (0,0) with the default blue
    ed.handle(click(5.0, 5.0, PointerButton::Primary)).unwrap();
    assert!(ed.renderer_mut().take());
    for y in 0..12 {
        for x in 0..12 {
            assert_eq!(*ed.grid().snapshot().get_pixel(x, y), Rgb([0, 0, 255]));
        }
    }

    // revert it
    ed.handle(click(5.0, 5.0, PointerButton::Tertiary)).unwrap();
    assert!(ed.renderer_mut().take());
    assert_eq!(ed.grid().snapshot(), ed.grid().original());

    // sample (1,1): picker shows the original centre pixel, nothing redraws
    let centre = *ed.grid().original().get_pixel(18, 18);
    let out = ed.handle(click(20.0, 20.0, PointerButton::Secondary)).unwrap();
    assert_eq!(out, Outcome::Sampled(BlockIndex::new(1, 1), centre));
    assert_eq!(ed.active_color(), centre);
    assert_eq!(ed.picker().swatch(), centre);
    assert!(!ed.renderer_mut().take());
    assert_eq!(ed.grid().snapshot(), ed.grid().original());

    // paint (0,0) once more with the sampled color and save
    ed.handle(click(5.0, 5.0, PointerButton::Primary)).unwrap();
    let msg = match ed.handle(EditorEvent::Save).unwrap() {
        Outcome::Saved(msg) => msg,
        other => panic!("expected a save, got {other:?}"),
    };
    assert!(msg.starts_with("Image saved as "));

    let saved = load_rgb_image(ed.sink().path()).unwrap();
    let original = ed.grid().original();
    for (x, y, px) in saved.enumerate_pixels() {
        if x < 12 && y < 12 {
            assert_eq!(*px, centre, "({x}, {y})");
        } else {
            assert_eq!(px, original.get_pixel(x, y), "({x}, {y}) should be untouched");
        }
    }
    assert_eq!(ed.grid().modified_blocks(), vec![BlockIndex::new(0, 0)]);
}

#[test]
fn fenced_paint_keeps_separators_and_reverts_cleanly() {
    let (mut ed, _dir) = editor(true);
    ed.handle(EditorEvent::ColorChanged("#ff00ff".into())).unwrap();
    ed.handle(click(30.0, 14.0, PointerButton::Primary)).unwrap(); // block (1,2)

    let (snap, orig) = (ed.grid().snapshot(), ed.grid().original());
    for y in 12..24 {
        for x in 24..36 {
            let fence = y < 14 || x >= 34;
            if fence {
                assert_eq!(snap.get_pixel(x, y), orig.get_pixel(x, y), "fence ({x}, {y})");
            } else {
                assert_eq!(*snap.get_pixel(x, y), Rgb([255, 0, 255]), "interior ({x}, {y})");
            }
        }
    }

    ed.handle(click(30.0, 14.0, PointerButton::Tertiary)).unwrap();
    assert_eq!(ed.grid().snapshot(), ed.grid().original());
}

#[test]
fn stray_clicks_and_bad_colors_change_nothing() {
    let (mut ed, _dir) = editor(false);
    for (x, y) in [(-3.0, 4.0), (40.0, 4.0), (4.0, 36.0), (f32::NEG_INFINITY, 0.0)] {
        assert_eq!(ed.handle(click(x, y, PointerButton::Primary)).unwrap(), Outcome::Ignored);
    }
    assert!(ed.handle(EditorEvent::ColorChanged("blue".into())).is_err());
    assert_eq!(ed.active_color(), Rgb([0, 0, 255]));
    assert_eq!(ed.grid().snapshot(), ed.grid().original());
    assert!(!ed.renderer_mut().take());
}

#[test]
fn saved_file_is_gone_once_the_scratch_dir_drops() {
    let (mut ed, dir) = editor(false);
    ed.handle(click(5.0, 5.0, PointerButton::Primary)).unwrap();
    let msg = match ed.handle(EditorEvent::Save).unwrap() {
        Outcome::Saved(msg) => msg,
        other => panic!("expected a save, got {other:?}"),
    };
    assert!(msg.ends_with("(1 block edited)"), "{msg}");
    let saved = ed.sink().path().to_path_buf();
    assert!(saved.exists());
    drop(ed);
    dir.close().unwrap();
    assert!(!saved.exists());
}
