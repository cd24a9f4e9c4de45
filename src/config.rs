//! Sizing and timing parameters for one layout and animation run

use crate::io::configuration::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_BASE_NODE_SIZE, DEFAULT_BORDER_RADIUS,
    DEFAULT_CENTER_DELAY_MS, DEFAULT_CONNECTOR_MAX_DISTANCE, DEFAULT_CONNECTOR_SIZE,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_NODES, DEFAULT_MAX_RESEEDS, DEFAULT_MIN_DISTANCE,
    DEFAULT_OFFSET_ATTEMPTS, DEFAULT_OTHER_START_DELAY_MS, DEFAULT_OVERLAP_PADDING,
    DEFAULT_RESEED_SAMPLE, DEFAULT_STAGGER_STEP_MS, DEFAULT_USES_PER_IMAGE,
};
use crate::io::error::{Result, invalid_parameter};

/// Parameters fixed for the lifetime of a scene
///
/// Size-dependent values (`node_size`, `min_distance`, connector reach) are
/// recomputed per generation into [`crate::layout::sizing::LayoutMetrics`];
/// the fields here are the configured starting points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Tile edge length before capacity-driven shrinking
    pub base_node_size: f64,
    /// Configured minimum distance between node centers
    pub min_distance: f64,
    /// Extra edge-to-edge padding between tiles
    pub overlap_padding: f64,
    /// Length of one entrance pass
    pub animation_duration_ms: f64,
    /// Entrance delay of the center tile
    pub center_delay_ms: f64,
    /// Entrance delay of the first non-center tile
    pub other_start_delay_ms: f64,
    /// Delay added per placement order step
    pub stagger_step_ms: f64,
    /// Corner radius of the rounded tile clip
    pub border_radius: f64,
    /// Hard ceiling on placed nodes
    pub max_nodes: usize,
    /// Configured connector reach (recomputed from the minimum distance per generation)
    pub connector_max_distance: f64,
    /// Edge length of the connector sprite
    pub connector_size: f64,
    /// Exact number of times every image should appear
    pub uses_per_image: u32,
    /// Global anchor-pick budget per generation
    pub max_attempts: usize,
    /// Candidate offsets tried around one anchor
    pub offset_attempts: usize,
    /// Nodes pulled back into an exhausted frontier per reseed
    pub reseed_sample: usize,
    /// Reseeds allowed per generation
    pub max_reseeds: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_node_size: DEFAULT_BASE_NODE_SIZE,
            min_distance: DEFAULT_MIN_DISTANCE,
            overlap_padding: DEFAULT_OVERLAP_PADDING,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            center_delay_ms: DEFAULT_CENTER_DELAY_MS,
            other_start_delay_ms: DEFAULT_OTHER_START_DELAY_MS,
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            border_radius: DEFAULT_BORDER_RADIUS,
            max_nodes: DEFAULT_MAX_NODES,
            connector_max_distance: DEFAULT_CONNECTOR_MAX_DISTANCE,
            connector_size: DEFAULT_CONNECTOR_SIZE,
            uses_per_image: DEFAULT_USES_PER_IMAGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            offset_attempts: DEFAULT_OFFSET_ATTEMPTS,
            reseed_sample: DEFAULT_RESEED_SAMPLE,
            max_reseeds: DEFAULT_MAX_RESEEDS,
        }
    }
}

impl Config {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A length or duration is negative or not finite
    /// - The base node size or minimum distance is zero
    /// - `uses_per_image`, `max_nodes`, `max_attempts` or `offset_attempts` is zero
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("overlap_padding", self.overlap_padding),
            ("animation_duration_ms", self.animation_duration_ms),
            ("center_delay_ms", self.center_delay_ms),
            ("other_start_delay_ms", self.other_start_delay_ms),
            ("stagger_step_ms", self.stagger_step_ms),
            ("border_radius", self.border_radius),
            ("connector_max_distance", self.connector_max_distance),
            ("connector_size", self.connector_size),
        ];
        for (parameter, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be finite and non-negative",
                ));
            }
        }

        let positive = [
            ("base_node_size", self.base_node_size),
            ("min_distance", self.min_distance),
        ];
        for (parameter, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be finite and positive",
                ));
            }
        }

        if self.uses_per_image == 0 {
            return Err(invalid_parameter(
                "uses_per_image",
                &self.uses_per_image,
                &"every image must be used at least once",
            ));
        }

        let counts = [
            ("max_nodes", self.max_nodes),
            ("max_attempts", self.max_attempts),
            ("offset_attempts", self.offset_attempts),
        ];
        for (parameter, value) in counts {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
