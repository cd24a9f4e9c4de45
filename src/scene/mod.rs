//! Owned scene state exposed to hosts and renderers

/// Scene lifecycle and atomically published layout snapshots
pub mod stage;

pub use stage::{LayoutSnapshot, Scene};
