//! Collision-free placement of image tiles grown outward from the canvas center

/// Image handles and aspect-fit sizing
pub mod asset;
/// Growth-from-seed placement loop and its report
pub mod engine;
/// Per-image use counts against the usage quota
pub mod ledger;
/// Placed tile records
pub mod node;
/// Tiered image choice with nearby-duplicate exclusion
pub mod selection;
/// Capacity estimate and adaptive tile sizing
pub mod sizing;
/// Uniform grid for radius queries over placed tiles
pub mod spatial;

pub use asset::{AssetId, ImageAsset};
pub use engine::{Layout, LayoutEngine, Termination, UsageDeficit, UsageReport};
pub use node::Node;
pub use sizing::{LayoutMetrics, calculate_optimal_node_size};
