//! Capacity-driven tile sizing and the spacing radii derived from it
//!
//! Sizing runs before any sampling so the target node count is feasible by
//! area; without it the placement loop could only end by exhausting its caps.

use crate::config::Config;
use crate::io::configuration::{
    CAPACITY_EDGE_MARGIN, CONNECTOR_DISTANCE_FACTOR, EXCLUSION_RADIUS_FACTOR, MIN_NODE_SIZE,
    PACKING_FACTOR, SAMPLING_RADIUS_FACTOR, SHRINK_SAFETY_FACTOR,
};
use crate::math::Extent;

/// Spacing in effect for one layout generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Tile edge length
    pub node_size: f64,
    /// Minimum distance between node centers as configured or recomputed
    pub min_distance: f64,
    /// Edge-to-edge padding between tiles
    pub overlap_padding: f64,
    /// Maximum center distance for a connector
    pub connector_max_distance: f64,
    /// Nodes the canvas is estimated to hold at the base size
    pub estimated_capacity: usize,
    /// Nodes required to use every image its quota of times
    pub nodes_needed: usize,
    /// Upper bound on nodes the canvas and configuration allow
    pub node_budget: usize,
}

impl LayoutMetrics {
    /// Distance every pair of node centers must respect
    ///
    /// The larger of the minimum distance and two padded half-tiles, so
    /// tiles never overlap even when the minimum distance was shrunk.
    pub fn effective_min_distance(&self) -> f64 {
        self.min_distance
            .max((self.node_size / 2.0 + self.overlap_padding) * 2.0)
    }

    /// Radius within which the same image may not appear twice
    pub fn exclusion_radius(&self) -> f64 {
        self.min_distance * EXCLUSION_RADIUS_FACTOR
    }

    /// Outer radius of the sampling annulus around an anchor
    pub fn sampling_radius(&self) -> f64 {
        self.min_distance * SAMPLING_RADIUS_FACTOR
    }

    /// Distance a tile center must keep from the canvas border
    pub fn edge_margin(&self) -> f64 {
        self.node_size / 2.0 + self.overlap_padding
    }
}

/// Choose a tile size that lets `num_images * uses_per_image` nodes fit
///
/// Capacity is estimated from the canvas interior divided by the squared
/// base minimum distance, scaled by the packing factor. When it falls short
/// the tile shrinks by the square root of the shortfall (with a safety
/// margin) down to [`MIN_NODE_SIZE`]; a base size already below that floor
/// is never grown.
pub fn calculate_optimal_node_size(
    config: &Config,
    extent: Extent,
    num_images: usize,
) -> LayoutMetrics {
    let nodes_needed = num_images.saturating_mul(config.uses_per_image as usize);
    let base_size = config.base_node_size;
    let base_min_distance = config
        .min_distance
        .max((base_size / 2.0 + config.overlap_padding) * 2.0);

    let available_area = extent.inner_area(CAPACITY_EDGE_MARGIN);
    let node_area = (base_min_distance * base_min_distance).max(f64::MIN_POSITIVE);
    let estimated_capacity = ((available_area / node_area) * PACKING_FACTOR)
        .floor()
        .max(0.0) as usize;

    let (node_size, min_distance) = if estimated_capacity < nodes_needed {
        let scale =
            (estimated_capacity as f64 / nodes_needed as f64).sqrt() * SHRINK_SAFETY_FACTOR;
        let new_size = (base_size * scale)
            .floor()
            .max(MIN_NODE_SIZE.min(base_size));
        tracing::info!(
            from = base_size,
            to = new_size,
            estimated_capacity,
            nodes_needed,
            "reducing node size to fit all images"
        );
        (new_size, new_size + config.overlap_padding)
    } else {
        (base_size, base_min_distance)
    };

    LayoutMetrics {
        node_size,
        min_distance,
        overlap_padding: config.overlap_padding,
        connector_max_distance: min_distance * CONNECTOR_DISTANCE_FACTOR,
        estimated_capacity,
        nodes_needed,
        node_budget: config.max_nodes.min(nodes_needed.max(estimated_capacity)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizing.rs"]
mod tests;
