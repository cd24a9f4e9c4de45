//! Frame progress display for recording runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} frames")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendered frames across all loop passes of one recording
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Progress drawn to the terminal
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(FRAME_STYLE.clone());
        Self { bar }
    }

    /// Progress that counts but never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset for a recording of `total_frames` frames
    pub fn initialize(&self, total_frames: usize) {
        self.bar.set_length(total_frames as u64);
        self.bar.set_position(0);
        self.bar.set_message("pass 1");
    }

    /// Show which loop pass is being rendered
    pub fn set_pass(&self, pass: u32, loops: u32) {
        self.bar.set_message(format!("pass {pass}/{loops}"));
    }

    /// Count one rendered frame
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Frames counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/progress.rs"]
mod tests;
