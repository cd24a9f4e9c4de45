//! Mathematical utilities for layout geometry and animation timing

/// Easing, clamping and interpolation functions
pub mod easing;
/// Points and canvas extents
pub mod geometry;

pub use geometry::{Extent, Point};
