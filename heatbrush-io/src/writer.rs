//! Snapshot writers for composite frames.

use std::path::{Path, PathBuf};

use image::RgbImage;

use heatbrush_core::RgbFrame;

use crate::error::{Error, Result};

/// JPEG quality for saved composites.
const JPEG_QUALITY: u8 = 90;

/// Writes a frame as JPEG to an explicit path.
///
/// # Errors
/// Returns [`Error::Image`] on encode failure and [`Error::Io`] on write
/// failure.
pub fn write_jpeg<P: AsRef<Path>>(path: P, frame: &RgbFrame) -> Result<()> {
    let img = frame_to_image(frame)?;
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    img.write_with_encoder(encoder)?;
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn frame_to_image(frame: &RgbFrame) -> Result<RgbImage> {
    RgbImage::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.as_slice().to_vec(),
    )
    .ok_or_else(|| {
        // from_raw only fails on a length mismatch, which RgbFrame rules out.
        Error::Core(heatbrush_core::Error::BufferSize {
            expected: frame.width() * frame.height() * 3,
            actual: frame.as_slice().len(),
        })
    })
}

/// Writer for sequentially numbered composite snapshots.
///
/// File names are `{prefix}_{n:04}.jpg` with `n` starting at 1. Before
/// each write the counter advances past any existing file of the generated
/// name, so a save never overwrites earlier output, within a run or
/// across runs into the same directory.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
    prefix: String,
    counter: u32,
}

impl SnapshotWriter {
    /// Creates a writer targeting `dir` with the default `heatbrush` prefix.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self::with_prefix(dir, "heatbrush")
    }

    /// Creates a writer with a custom file-name prefix.
    pub fn with_prefix<P: Into<PathBuf>>(dir: P, prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.to_string(),
            counter: 1,
        }
    }

    /// The path the next save would use.
    #[must_use]
    pub fn peek_path(&self) -> PathBuf {
        self.path_for(self.counter)
    }

    /// Number the next save will try first.
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    fn path_for(&self, n: u32) -> PathBuf {
        self.dir.join(format!("{}_{n:04}.jpg", self.prefix))
    }

    /// Claims the next unused numbered path and advances the counter.
    pub fn next_path(&mut self) -> PathBuf {
        while self.path_for(self.counter).exists() {
            self.counter += 1;
        }
        let path = self.path_for(self.counter);
        self.counter += 1;
        path
    }

    /// Writes the frame to the next numbered file, returning its path.
    ///
    /// # Errors
    /// Propagates encode/write failures; the counter still advances, so a
    /// retry targets a fresh name.
    pub fn save(&mut self, frame: &RgbFrame) -> Result<PathBuf> {
        let path = self.next_path();
        write_jpeg(&path, frame)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_2x2() -> RgbFrame {
        RgbFrame::from_raw(2, 2, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 40, 40, 40]).unwrap()
    }

    #[test]
    fn test_saves_get_increasing_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = SnapshotWriter::new(dir.path());

        let first = writer.save(&frame_2x2()).unwrap();
        let second = writer.save(&frame_2x2()).unwrap();
        let third = writer.save(&frame_2x2()).unwrap();

        assert_eq!(first.file_name().unwrap(), "heatbrush_0001.jpg");
        assert_eq!(second.file_name().unwrap(), "heatbrush_0002.jpg");
        assert_eq!(third.file_name().unwrap(), "heatbrush_0003.jpg");
        assert!(first.exists() && second.exists() && third.exists());
    }

    #[test]
    fn test_existing_files_are_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("heatbrush_0001.jpg");
        std::fs::write(&blocker, b"pre-existing").unwrap();

        let mut writer = SnapshotWriter::new(dir.path());
        let saved = writer.save(&frame_2x2()).unwrap();

        assert_eq!(saved.file_name().unwrap(), "heatbrush_0002.jpg");
        assert_eq!(std::fs::read(&blocker).unwrap(), b"pre-existing");
    }

    #[test]
    fn test_saved_file_is_decodable_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = SnapshotWriter::with_prefix(dir.path(), "snap");
        let path = writer.save(&frame_2x2()).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
    }
}
