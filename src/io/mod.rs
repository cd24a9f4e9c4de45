//! Collaborators around the core: asset decoding, rasterizing, export and the CLI

/// Image directory loading and downscaling
pub mod assets;
/// Command-line parsing and the recording session
pub mod cli;
/// Named defaults and tuning constants
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Animated GIF export
pub mod export;
/// Terminal progress display
pub mod progress;
/// Software rasterizer for frame draw records
pub mod render;
