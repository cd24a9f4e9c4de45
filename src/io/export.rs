//! Animated GIF export of rendered frames

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, TileBloomError, computation_error, invalid_parameter};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Collects rendered frames and writes them as an endlessly looping GIF
///
/// Frame rates faster than viewers can display are thinned: only every n-th
/// frame is kept and shown for n frame intervals, which preserves the
/// apparent animation speed.
#[derive(Debug, Clone)]
pub struct GifRecorder {
    frames: Vec<RgbaImage>,
    frame_delay_ms: u32,
    skip_factor: usize,
    captured: usize,
}

impl GifRecorder {
    /// Recorder for frames captured at `fps` frames per second
    ///
    /// # Errors
    ///
    /// Returns an error if `fps` is zero
    pub fn new(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(invalid_parameter("fps", &fps, &"must be at least 1"));
        }
        let requested = (1000 / fps).max(1);
        let skip_factor = if requested < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(requested)
        } else {
            1
        };
        Ok(Self {
            frames: Vec::new(),
            frame_delay_ms: requested * skip_factor,
            skip_factor: skip_factor as usize,
            captured: 0,
        })
    }

    /// Delay each kept frame is shown for
    pub const fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    /// Offer a captured frame; thinned frames are dropped
    pub fn push(&mut self, frame: RgbaImage) {
        if self.captured % self.skip_factor == 0 {
            self.frames.push(frame);
        }
        self.captured += 1;
    }

    /// Number of frames that will be written
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been kept
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Write the kept frames to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if no frame was captured, a directory or the file
    /// cannot be created, or GIF encoding fails
    pub fn export(self, path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(computation_error("gif export", &"no frames captured"));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TileBloomError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(path).map_err(|e| TileBloomError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |source| TileBloomError::Export {
            path: path.to_path_buf(),
            source,
        };
        let delay = Delay::from_numer_denom_ms(self.frame_delay_ms, 1);
        let count = self.frames.len();
        let mut encoder = GifEncoder::new(std::io::BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder
            .encode_frames(
                self.frames
                    .into_iter()
                    .map(|image| Frame::from_parts(image, 0, 0, delay)),
            )
            .map_err(export_error)?;

        tracing::debug!(path = %path.display(), frames = count, "gif written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/export.rs"]
mod tests;
