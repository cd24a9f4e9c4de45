//! Collision-free random layout of image tiles with a staggered, eased entrance animation
//!
//! Tiles grow outward from the canvas center by dart throwing under a
//! minimum-distance constraint, while a usage ledger steers every image
//! towards an exact number of appearances and keeps identical images apart.
//! Horizontally adjacent tiles are linked by connectors, and an injected-time
//! clock turns the finished layout into per-frame draw records.

#![forbid(unsafe_code)]

/// Entrance timing, frame composition and loop scheduling
pub mod animation;
/// Scene configuration and validation
pub mod config;
/// Connector inference between adjacent tiles
pub mod connectivity;
/// Asset loading, rendering, export, errors and the command-line interface
pub mod io;
/// Tile placement, image selection and sizing
pub mod layout;
/// Geometry and easing helpers
pub mod math;
/// The owned scene tying layout, connectivity and the clock together
pub mod scene;

pub use config::Config;
pub use io::error::{Result, TileBloomError};
pub use layout::{AssetId, ImageAsset, Layout, LayoutEngine, Node};
pub use math::{Extent, Point};
pub use scene::{LayoutSnapshot, Scene};
