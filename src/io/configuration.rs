//! Layout and animation constants and runtime configuration defaults

// Node sizing
/// Edge length of a tile before any capacity-driven shrinking
pub const DEFAULT_BASE_NODE_SIZE: f64 = 120.0;
/// Smallest edge length the sizing pass may shrink a tile to
pub const MIN_NODE_SIZE: f64 = 80.0;
/// Configured minimum distance between node centers
pub const DEFAULT_MIN_DISTANCE: f64 = 200.0;
/// Extra edge-to-edge padding between tiles
pub const DEFAULT_OVERLAP_PADDING: f64 = 40.0;
/// Canvas border excluded from the capacity estimate
pub const CAPACITY_EDGE_MARGIN: f64 = 100.0;
/// Dart-throwing packing efficiency used by the capacity estimate
pub const PACKING_FACTOR: f64 = 0.7;
/// Safety margin applied when shrinking tiles to fit
pub const SHRINK_SAFETY_FACTOR: f64 = 0.9;

// Radii derived from the minimum distance
/// Connector reach as a multiple of the minimum distance
pub const CONNECTOR_DISTANCE_FACTOR: f64 = 1.1;
/// Same-image exclusion radius as a multiple of the minimum distance
pub const EXCLUSION_RADIUS_FACTOR: f64 = 1.5;
/// Upper bound of the sampling annulus as a multiple of the minimum distance
pub const SAMPLING_RADIUS_FACTOR: f64 = 1.5;
/// Bucket count limit per axis of the placement grid
pub const MAX_GRID_CELLS_PER_AXIS: usize = 512;

// Image usage
/// Exact number of times every image should appear
pub const DEFAULT_USES_PER_IMAGE: u32 = 2;
/// Hard ceiling on placed nodes
pub const DEFAULT_MAX_NODES: usize = 1000;

// Placement termination caps
/// Global anchor-pick budget per generation
pub const DEFAULT_MAX_ATTEMPTS: usize = 300_000;
/// Candidate offsets tried around one anchor before it is dropped
pub const DEFAULT_OFFSET_ATTEMPTS: usize = 200;
/// Number of existing nodes pulled back into an exhausted frontier
pub const DEFAULT_RESEED_SAMPLE: usize = 20;
/// Number of frontier reseeds allowed per generation
pub const DEFAULT_MAX_RESEEDS: usize = 8;

// Animation timing
/// Length of one entrance pass in milliseconds
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 1500.0;
/// Entrance delay of the center node
pub const DEFAULT_CENTER_DELAY_MS: f64 = 0.0;
/// Entrance delay of the first non-center node
pub const DEFAULT_OTHER_START_DELAY_MS: f64 = 0.0;
/// Delay added per placement order step
pub const DEFAULT_STAGGER_STEP_MS: f64 = 15.0;
/// Share of the pass the center node spends moving
pub const CENTER_DURATION_SHARE: f64 = 0.4;
/// Share of the remaining pass other nodes spend moving
pub const OTHER_DURATION_SHARE: f64 = 0.8;
/// Pause appended to each pass before a loop restarts
pub const LOOP_BUFFER_MS: f64 = 500.0;
/// Vertical tolerance that groups nodes into one draw row
pub const DRAW_ROW_BUCKET: f64 = 10.0;

// Visuals
/// Corner radius of the rounded tile clip
pub const DEFAULT_BORDER_RADIUS: f64 = 12.0;
/// Configured connector reach before sizing recomputes it
pub const DEFAULT_CONNECTOR_MAX_DISTANCE: f64 = 150.0;
/// Edge length of the connector sprite
pub const DEFAULT_CONNECTOR_SIZE: f64 = 30.0;

// Asset loading and export
/// Largest dimension decoded assets are downscaled to
pub const MAX_ASSET_DIMENSION: u32 = 200;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1280;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 720;
/// Default capture frame rate
pub const DEFAULT_FPS: u32 = 20;
/// Default number of recorded loop passes
pub const DEFAULT_LOOPS: u32 = 3;
/// Output file name written next to the asset directory
pub const DEFAULT_OUTPUT_NAME: &str = "tilebloom.gif";
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

#[cfg(test)]
#[path = "../../tests/unit/io/configuration.rs"]
mod tests;
