//! Placed tiles produced by one layout generation

use crate::layout::asset::AssetId;
use crate::math::Point;

/// One image tile placed on the canvas
///
/// Nodes are created once per generation and never mutated afterwards; a new
/// generation replaces the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Where the entrance animation starts (always the canvas center)
    pub start_pos: Point,
    /// Resting position once the entrance animation completes
    pub target_pos: Point,
    /// Edge length of the square the image is fitted into
    pub size: f64,
    /// Image drawn in this tile
    pub image: AssetId,
    /// Whether this is the seed tile at the canvas center
    pub is_center: bool,
    /// Milliseconds after the pass start before this tile begins moving
    pub entrance_delay_ms: f64,
}

impl Node {
    /// Create the seed tile resting at `center`
    pub const fn center(center: Point, size: f64, image: AssetId, delay_ms: f64) -> Self {
        Self {
            start_pos: center,
            target_pos: center,
            size,
            image,
            is_center: true,
            entrance_delay_ms: delay_ms,
        }
    }

    /// Create a tile that travels from `start` to `target`
    pub const fn travelling(
        start: Point,
        target: Point,
        size: f64,
        image: AssetId,
        delay_ms: f64,
    ) -> Self {
        Self {
            start_pos: start,
            target_pos: target,
            size,
            image,
            is_center: false,
            entrance_delay_ms: delay_ms,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/node.rs"]
mod tests;
