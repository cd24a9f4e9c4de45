//! The owned engine instance tying layout, connectivity and timing together
//!
//! A [`Scene`] holds the configuration, the seeded random generator, the
//! asset list and the clock. Each generation publishes a fresh
//! [`LayoutSnapshot`] behind one [`Arc`], so a reader that grabbed the
//! previous snapshot keeps a consistent node, connection and draw-order set.

use crate::animation::clock::{AnimationClock, ClockState};
use crate::animation::frame::{FrameState, FrameStyle, draw_order};
use crate::config::Config;
use crate::connectivity::builder::{Connection, ConnectivityBuilder};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::asset::ImageAsset;
use crate::layout::engine::{Layout, LayoutEngine};
use crate::layout::sizing::calculate_optimal_node_size;
use crate::math::Extent;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// One generation's nodes, connections and draw order, published together
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    /// Placed tiles, metrics and usage report
    pub layout: Layout,
    /// Connectors between horizontally adjacent tiles
    pub connections: Vec<Connection>,
    /// Node positions back to front
    pub draw_order: Vec<usize>,
}

impl LayoutSnapshot {
    /// Build connections and draw order for `layout`
    pub fn from_layout(layout: Layout) -> Self {
        let connections =
            ConnectivityBuilder::new(layout.metrics.connector_max_distance).build(&layout.nodes);
        let draw_order = draw_order(&layout.nodes);
        Self {
            layout,
            connections,
            draw_order,
        }
    }
}

/// Layout, connectivity and animation state for one canvas
#[derive(Debug)]
pub struct Scene {
    config: Config,
    engine: LayoutEngine,
    rng: StdRng,
    assets: Vec<ImageAsset>,
    connector: Option<ImageAsset>,
    extent: Extent,
    snapshot: Arc<LayoutSnapshot>,
    clock: AnimationClock,
}

impl Scene {
    /// Create an empty scene whose randomness derives from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;
        let extent = Extent::default();
        let metrics = calculate_optimal_node_size(&config, extent, 0);
        Ok(Self {
            config,
            engine: LayoutEngine::new(config),
            rng: StdRng::seed_from_u64(seed),
            assets: Vec::new(),
            connector: None,
            extent,
            snapshot: Arc::new(LayoutSnapshot::from_layout(Layout::empty(metrics, extent))),
            clock: AnimationClock::new(&config),
        })
    }

    /// Attach a connector image; connectors are only drawn when one is set
    #[must_use]
    pub fn with_connector(mut self, connector: Option<ImageAsset>) -> Self {
        self.connector = connector;
        self
    }

    /// Configuration the scene was built with
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Assets of the last generation
    pub fn assets(&self) -> &[ImageAsset] {
        &self.assets
    }

    /// Connector image, if any
    pub const fn connector(&self) -> Option<&ImageAsset> {
        self.connector.as_ref()
    }

    /// Canvas of the last generation
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Current clock state
    pub const fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// The clock driving the entrance animation
    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<LayoutSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Place `assets` on a canvas of `extent` and publish the result
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas dimension is negative or not finite
    pub fn generate(
        &mut self,
        extent: Extent,
        assets: Vec<ImageAsset>,
    ) -> Result<Arc<LayoutSnapshot>> {
        validate_extent(extent)?;
        self.assets = assets;
        self.extent = extent;
        Ok(self.regenerate())
    }

    /// Regenerate the current assets for a new canvas size
    ///
    /// The clock is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas dimension is negative or not finite
    pub fn resize(&mut self, extent: Extent) -> Result<Arc<LayoutSnapshot>> {
        validate_extent(extent)?;
        self.extent = extent;
        Ok(self.regenerate())
    }

    /// Start the entrance animation at `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.clock.start(now_ms);
    }

    /// Replay the entrance from `now_ms`, optionally with fresh positions
    pub fn restart(&mut self, reset_positions: bool, now_ms: f64) {
        if reset_positions {
            self.regenerate();
        }
        self.clock.restart(now_ms);
    }

    /// Freeze the animation at `now_ms`
    pub fn stop(&mut self, now_ms: f64) {
        self.clock.stop(now_ms);
    }

    /// Draw records for `now_ms`
    pub fn frame_state(&self, now_ms: f64) -> FrameState {
        let style = FrameStyle {
            border_radius: self.config.border_radius,
            connector_size: self.connector.map(|_| self.config.connector_size),
        };
        FrameState::compose(
            &self.clock,
            &self.snapshot.layout.nodes,
            &self.snapshot.connections,
            &self.snapshot.draw_order,
            &self.assets,
            &style,
            now_ms,
        )
    }

    fn regenerate(&mut self) -> Arc<LayoutSnapshot> {
        let layout = self
            .engine
            .generate(self.extent, &self.assets, &mut self.rng);
        self.snapshot = Arc::new(LayoutSnapshot::from_layout(layout));
        Arc::clone(&self.snapshot)
    }
}

fn validate_extent(extent: Extent) -> Result<()> {
    for (name, value) in [("width", extent.width), ("height", extent.height)] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_parameter(
                name,
                &value,
                &"canvas dimensions must be finite and non-negative",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stage.rs"]
mod tests;
