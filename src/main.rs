//! CLI entry point for recording tile entrance animations

use clap::Parser;
use tilebloom::io::cli::{Cli, RecordingSession};
use tracing_subscriber::EnvFilter;

// Allow print for the final user-facing summary
#[allow(clippy::print_stdout)]
fn main() -> tilebloom::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let summary = RecordingSession::new(cli).run()?;
    println!("{summary}");
    Ok(())
}
