//! Command-line interface for recording a tile entrance animation as a GIF

use crate::animation::looping::{LoopAction, LoopSchedule};
use crate::config::Config;
use crate::io::assets::AssetLibrary;
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FPS, DEFAULT_LOOPS, DEFAULT_OUTPUT_NAME,
    DEFAULT_SEED, DEFAULT_USES_PER_IMAGE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::GifRecorder;
use crate::io::progress::ProgressManager;
use crate::io::render::Rasterizer;
use crate::layout::engine::UsageReport;
use crate::math::Extent;
use crate::scene::stage::Scene;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilebloom")]
#[command(
    author,
    version,
    about = "Lay out image tiles without overlaps and record their entrance animation"
)]
/// Command-line arguments for the recording tool
pub struct Cli {
    /// Directory of PNG, JPEG or WebP tile images
    #[arg(value_name = "DIR")]
    pub source: PathBuf,

    /// Output GIF path (defaults to tilebloom.gif inside DIR)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Connector sprite drawn between horizontally adjacent tiles
    #[arg(short, long)]
    pub connector: Option<PathBuf>,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_CANVAS_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Number of times every image should appear
    #[arg(short, long, default_value_t = DEFAULT_USES_PER_IMAGE,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub uses: u32,

    /// Frames rendered per second of animation
    #[arg(short, long, default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Entrance passes recorded back to back
    #[arg(short, long, default_value_t = DEFAULT_LOOPS,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub loops: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the GIF is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.source.join(DEFAULT_OUTPUT_NAME))
    }

    /// Scene configuration with command-line overrides applied
    pub fn config(&self) -> Config {
        Config {
            uses_per_image: self.uses,
            ..Config::default()
        }
    }

    /// Canvas extent
    pub fn extent(&self) -> Extent {
        Extent::new(f64::from(self.width), f64::from(self.height))
    }
}

/// What one recording produced
#[derive(Debug, Clone)]
pub struct RecordingSummary {
    /// Tile images loaded
    pub images: usize,
    /// Tiles placed
    pub nodes: usize,
    /// Connectors inferred
    pub connections: usize,
    /// Frames written to the GIF
    pub frames: usize,
    /// Usage and termination report of the layout
    pub report: UsageReport,
    /// GIF location
    pub output: PathBuf,
}

impl fmt::Display for RecordingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} tiles from {} images, {} connectors, {} frames -> {}",
            self.nodes,
            self.images,
            self.connections,
            self.frames,
            self.output.display()
        )?;
        for (uses, images) in self.report.usage_histogram() {
            writeln!(f, "  used {uses}x: {images} images")?;
        }
        write!(
            f,
            "  termination: {:?} after {} attempts, {} reseeds",
            self.report.termination, self.report.attempts, self.report.reseeds
        )
    }
}

/// Runs one recording from the command-line arguments
pub struct RecordingSession {
    cli: Cli,
    progress: ProgressManager,
}

impl RecordingSession {
    /// Create a session for `cli`
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };
        Self { cli, progress }
    }

    /// Load assets, lay them out, render every loop pass and write the GIF
    ///
    /// # Errors
    ///
    /// Returns an error if the source directory holds no usable image, the
    /// configuration is invalid, rendering fails or the GIF cannot be written
    pub fn run(&self) -> Result<RecordingSummary> {
        let mut library = AssetLibrary::load_dir(&self.cli.source)?;
        if let Some(connector) = &self.cli.connector {
            library = library.with_connector_file(connector);
        }
        if library.is_empty() {
            return Err(invalid_parameter(
                "source",
                &self.cli.source.display(),
                &"contains no decodable PNG, JPEG or WebP images",
            ));
        }

        let mut scene =
            Scene::new(self.cli.config(), self.cli.seed)?.with_connector(library.connector_asset());
        let snapshot = scene.generate(self.cli.extent(), library.assets())?;

        let mut schedule =
            LoopSchedule::new(scene.config().animation_duration_ms, self.cli.loops);
        let interval_ms = 1000.0 / f64::from(self.cli.fps);
        let max_frames = (schedule.total_duration() / interval_ms).ceil() as usize;
        let rasterizer = Rasterizer::new(&library, self.cli.width, self.cli.height);
        let mut recorder = GifRecorder::new(self.cli.fps)?;

        self.progress.initialize(max_frames);
        self.progress.set_pass(1, schedule.loops());
        scene.start(0.0);
        let mut pass_start = 0.0;

        for index in 0..=max_frames {
            let now = index as f64 * interval_ms;
            match schedule.tick(now - pass_start) {
                LoopAction::Continue => {}
                LoopAction::Restart => {
                    pass_start = now;
                    scene.restart(false, now);
                    self.progress
                        .set_pass(schedule.completed() + 1, schedule.loops());
                }
                LoopAction::Stop => break,
            }
            let canvas = rasterizer.render(&scene.frame_state(now))?;
            recorder.push(canvas);
            self.progress.advance();
        }

        let frames = recorder.len();
        let output = self.cli.output_path();
        recorder.export(&output)?;
        self.progress.finish();

        let summary = RecordingSummary {
            images: library.len(),
            nodes: snapshot.layout.nodes.len(),
            connections: snapshot.connections.len(),
            frames,
            report: snapshot.layout.report.clone(),
            output,
        };
        tracing::info!(
            nodes = summary.nodes,
            connections = summary.connections,
            frames = summary.frames,
            "recording complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/cli.rs"]
mod tests;
