// Loading the input image and writing the edited one.
// Both go through the `image` crate; the format follows the file extension.

use crate::controller::ImageSink;
use crate::error::Error;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Decode any supported image and flatten it to 8-bit RGB (alpha dropped).
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, Error> {
    let img = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?
        .into_rgb8();
    Ok(img)
}

/// Writes the snapshot to a fixed path on every save.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for FileSink {
    fn target(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, image: &RgbImage) -> Result<(), Error> {
        image
            .save(&self.path)
            .map_err(|e| Error::Persistence(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    #[test]
    fn sink_output_loads_back_identically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");
        let img = RgbImage::from_fn(9, 5, |x, y| Rgb([x as u8 * 20, y as u8 * 40, 7]));
        let mut sink = FileSink::new(&path);
        sink.write(&img).unwrap();
        assert_eq!(load_rgb_image(&path).unwrap(), img);
        assert_eq!(sink.target(), path.display().to_string());
    }

    #[test]
    fn missing_input_is_a_load_error() {
        let dir = tempdir().unwrap();
        let err = load_rgb_image(&dir.path().join("does-not-exist.png")).unwrap_err();
        assert!(matches!(err, Error::ImageLoad(_)));
    }

    #[test]
    fn unwritable_target_is_a_persistence_error() {
        let dir = tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("no-such-dir").join("out.png"));
        let err = sink.write(&RgbImage::new(2, 2)).unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }
}
