//! Growth-from-seed placement of image tiles under spacing and usage constraints
//!
//! The engine seeds the canvas center with one tile and grows outward by dart
//! throwing around randomly chosen frontier anchors. Each accepted dart must
//! clear every placed tile by the effective minimum distance and must find an
//! image through the tiered selection policy. Termination is guaranteed by
//! the per-anchor offset budget, the global attempt cap and the reseed budget.

use crate::config::Config;
use crate::layout::asset::{AssetId, ImageAsset};
use crate::layout::ledger::ImageUsageLedger;
use crate::layout::node::Node;
use crate::layout::selection::select_image_for_position;
use crate::layout::sizing::{LayoutMetrics, calculate_optimal_node_size};
use crate::layout::spatial::SpatialIndex;
use crate::math::{Extent, Point};
use rand::Rng;
use std::collections::BTreeMap;
use std::f64::consts::TAU;

/// Why a layout generation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every required node was placed
    TargetReached,
    /// The asset list was empty; there is nothing to draw
    NoAssets,
    /// The frontier emptied and no reseed was possible
    FrontierExhausted,
    /// The global attempt cap was hit
    AttemptCapReached,
}

/// An asset whose final use count differs from the quota
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageDeficit {
    /// The affected image
    pub image: AssetId,
    /// How often it was placed
    pub count: u32,
    /// How often it should have been placed
    pub expected: u32,
}

/// Outcome summary of one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReport {
    /// Nodes the generation aimed for
    pub target_nodes: usize,
    /// Nodes actually placed
    pub placed_nodes: usize,
    /// Anchor picks consumed
    pub attempts: usize,
    /// Frontier reseeds consumed
    pub reseeds: usize,
    /// Final use count per asset, in handle order
    pub counts: Vec<u32>,
    /// Assets whose count differs from the quota
    pub deficits: Vec<UsageDeficit>,
    /// Why the generation stopped
    pub termination: Termination,
}

impl UsageReport {
    /// Whether every asset was used exactly its quota of times
    pub fn is_complete(&self) -> bool {
        self.deficits.is_empty()
    }

    /// Number of assets for each observed use count
    pub fn usage_histogram(&self) -> BTreeMap<u32, usize> {
        let mut histogram = BTreeMap::new();
        for &count in &self.counts {
            *histogram.entry(count).or_insert(0) += 1;
        }
        histogram
    }
}

/// The result of one layout generation
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Placed tiles; the first one is the center tile when non-empty
    pub nodes: Vec<Node>,
    /// Spacing the tiles were placed with
    pub metrics: LayoutMetrics,
    /// Canvas the tiles were placed on
    pub extent: Extent,
    /// Usage and termination summary
    pub report: UsageReport,
}

impl Layout {
    /// A layout with no tiles, reported as having no assets
    pub const fn empty(metrics: LayoutMetrics, extent: Extent) -> Self {
        Self {
            nodes: Vec::new(),
            metrics,
            extent,
            report: UsageReport {
                target_nodes: 0,
                placed_nodes: 0,
                attempts: 0,
                reseeds: 0,
                counts: Vec::new(),
                deficits: Vec::new(),
                termination: Termination::NoAssets,
            },
        }
    }

    /// Whether the layout has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The tile at the canvas center, if any
    pub fn center_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|node| node.is_center)
    }
}

/// Places tiles for a canvas and asset list according to a [`Config`]
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    config: Config,
}

/// Mutable state of one generation
struct Placement {
    nodes: Vec<Node>,
    index: SpatialIndex,
    ledger: ImageUsageLedger,
    active: Vec<usize>,
}

impl LayoutEngine {
    /// Create an engine for `config`
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration the engine places with
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a layout for `assets` on a canvas of `extent`
    ///
    /// Never fails: an empty asset list yields an empty layout, and running
    /// out of attempts yields the nodes placed so far with the shortfall
    /// listed in the report.
    #[tracing::instrument(
        level = "debug",
        skip(self, assets, rng),
        fields(assets = assets.len())
    )]
    pub fn generate<R: Rng>(
        &self,
        extent: Extent,
        assets: &[ImageAsset],
        rng: &mut R,
    ) -> Layout {
        let metrics = calculate_optimal_node_size(&self.config, extent, assets.len());
        let quota = self.config.uses_per_image;

        if assets.is_empty() {
            tracing::warn!("no image assets available, layout is empty");
            return Layout::empty(metrics, extent);
        }

        let target = metrics.nodes_needed.min(self.config.max_nodes);
        let cell_size = metrics
            .effective_min_distance()
            .max(metrics.exclusion_radius());
        let mut state = Placement {
            nodes: Vec::with_capacity(target),
            index: SpatialIndex::new(extent, cell_size),
            ledger: ImageUsageLedger::new(assets.len(), quota),
            active: Vec::with_capacity(target),
        };

        let center = extent.center();
        let center_image = AssetId(rng.random_range(0..assets.len()));
        state.ledger.record_use(center_image);
        state.nodes.push(Node::center(
            center,
            metrics.node_size,
            center_image,
            self.config.center_delay_ms,
        ));
        state.index.insert(center);
        state.active.push(0);

        let mut attempts = 0;
        let mut reseeds = 0;
        let termination = loop {
            if state.nodes.len() >= target {
                break Termination::TargetReached;
            }
            if attempts >= self.config.max_attempts {
                break Termination::AttemptCapReached;
            }
            if state.active.is_empty() {
                if state.ledger.outstanding() == 0 || reseeds >= self.config.max_reseeds {
                    break Termination::FrontierExhausted;
                }
                let sample = self.config.reseed_sample.clamp(1, state.nodes.len());
                state.active =
                    rand::seq::index::sample(rng, state.nodes.len(), sample).into_vec();
                reseeds += 1;
                tracing::debug!(reseeds, sample, "reseeded exhausted frontier");
            }

            attempts += 1;
            let slot = rng.random_range(0..state.active.len());
            let Some(anchor) = state
                .active
                .get(slot)
                .and_then(|&i| state.nodes.get(i))
                .map(|node| node.target_pos)
            else {
                state.active.swap_remove(slot);
                continue;
            };

            let placement = self.try_place_around(&state, &metrics, extent, anchor, rng);
            if let Some((position, image)) = placement {
                let order = state.nodes.len();
                let delay = (order - 1) as f64 * self.config.stagger_step_ms
                    + self.config.other_start_delay_ms;
                state.ledger.record_use(image);
                state.nodes.push(Node::travelling(
                    center,
                    position,
                    metrics.node_size,
                    image,
                    delay,
                ));
                let placed = state.index.insert(position);
                state.active.push(placed);
            } else {
                state.active.swap_remove(slot);
            }
        };

        let report = Self::summarize(
            state.ledger,
            state.nodes.len(),
            target,
            attempts,
            reseeds,
            termination,
        );
        Self::log_report(&report);

        Layout {
            nodes: state.nodes,
            metrics,
            extent,
            report,
        }
    }

    /// Throw darts around `anchor` until one lands on a free spot with an eligible image
    fn try_place_around<R: Rng>(
        &self,
        state: &Placement,
        metrics: &LayoutMetrics,
        extent: Extent,
        anchor: Point,
        rng: &mut R,
    ) -> Option<(Point, AssetId)> {
        let min_radius = metrics.min_distance;
        let span = (metrics.sampling_radius() - min_radius).max(0.0);
        let clearance = metrics.effective_min_distance();
        let margin = metrics.edge_margin();
        let exclusion = metrics.exclusion_radius();

        for _ in 0..self.config.offset_attempts {
            let angle = rng.random::<f64>() * TAU;
            let radius = rng.random::<f64>().mul_add(span, min_radius);
            let candidate = anchor.offset_polar(angle, radius);

            if !extent.contains_with_margin(candidate, margin)
                || state.index.any_within(candidate, clearance)
            {
                continue;
            }

            // A free spot without an eligible image is consumed like a rejected one
            if let Some(image) = select_image_for_position(
                &state.ledger,
                &state.nodes,
                &state.index,
                candidate,
                exclusion,
                rng,
            ) {
                return Some((candidate, image));
            }
        }
        None
    }

    fn summarize(
        ledger: ImageUsageLedger,
        placed_nodes: usize,
        target_nodes: usize,
        attempts: usize,
        reseeds: usize,
        termination: Termination,
    ) -> UsageReport {
        let expected = ledger.quota();
        let deficits = ledger
            .deficits()
            .into_iter()
            .map(|(image, count)| UsageDeficit {
                image,
                count,
                expected,
            })
            .collect();

        UsageReport {
            target_nodes,
            placed_nodes,
            attempts,
            reseeds,
            counts: ledger.into_counts(),
            deficits,
            termination,
        }
    }

    fn log_report(report: &UsageReport) {
        tracing::debug!(
            placed = report.placed_nodes,
            target = report.target_nodes,
            attempts = report.attempts,
            reseeds = report.reseeds,
            termination = ?report.termination,
            "layout generated"
        );
        if report.is_complete() {
            return;
        }
        tracing::warn!(
            deficits = report.deficits.len(),
            termination = ?report.termination,
            "not every image reached its usage quota"
        );
        for deficit in &report.deficits {
            tracing::warn!(
                image = deficit.image.index(),
                count = deficit.count,
                expected = deficit.expected,
                "image usage off quota"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
