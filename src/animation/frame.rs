//! Per-frame draw records composed from a node set and the clock
//!
//! Nothing here mutates nodes or connections. A frame is a pure function of
//! the snapshot, the asset sizes and the query timestamp.

use crate::animation::clock::{AnimationClock, Progress};
use crate::connectivity::builder::Connection;
use crate::io::configuration::DRAW_ROW_BUCKET;
use crate::layout::asset::{AssetId, ImageAsset};
use crate::layout::node::Node;
use crate::math::Point;
use crate::math::easing::ease_out_cubic;

/// Drawing instructions for one tile in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDraw {
    /// Position of the tile in the node list
    pub node: usize,
    /// Image to draw
    pub image: AssetId,
    /// Current center of the tile
    pub center: Point,
    /// Aspect-fit width after scaling
    pub draw_width: f64,
    /// Aspect-fit height after scaling
    pub draw_height: f64,
    /// Eased scale factor
    pub scale: f64,
    /// Raw entrance progress in `[0, 1]`
    pub progress: f64,
    /// Eased opacity
    pub opacity: f64,
    /// Rounded-corner radius after scaling
    pub corner_radius: f64,
}

/// Drawing instructions for one connector sprite in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorDraw {
    /// Left tile of the pair
    pub source: usize,
    /// Right tile of the pair
    pub target: usize,
    /// Sprite center x
    pub x: f64,
    /// Sprite center y
    pub y: f64,
    /// Rotation in radians
    pub angle: f64,
    /// Eased opacity
    pub opacity: f64,
    /// Eased scale factor
    pub scale: f64,
    /// Unscaled sprite edge length
    pub size: f64,
}

/// Visual parameters that do not depend on time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    /// Corner radius at full scale
    pub border_radius: f64,
    /// Connector sprite size, `None` when no connector image is configured
    pub connector_size: Option<f64>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameState {
    /// Milliseconds into the current pass, `None` while the clock is idle
    pub elapsed_ms: Option<f64>,
    /// Tiles in back-to-front order
    pub nodes: Vec<NodeDraw>,
    /// Connectors, drawn before tiles
    pub connectors: Vec<ConnectorDraw>,
}

impl FrameState {
    /// Whether the frame has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connectors.is_empty()
    }

    /// Whether every tile has completed its entrance
    pub fn is_settled(&self) -> bool {
        self.elapsed_ms.is_some() && self.nodes.iter().all(|draw| draw.progress >= 1.0)
    }

    /// Compose a frame at `now_ms`
    ///
    /// `draw_order` lists node positions back to front, see [`draw_order`].
    pub fn compose(
        clock: &AnimationClock,
        nodes: &[Node],
        connections: &[Connection],
        draw_order: &[usize],
        assets: &[ImageAsset],
        style: &FrameStyle,
        now_ms: f64,
    ) -> Self {
        let Some(elapsed) = clock.elapsed(now_ms) else {
            return Self::default();
        };
        let progress: Vec<Progress> = nodes
            .iter()
            .map(|node| clock.progress_at(node, elapsed))
            .collect();

        let node_draws = draw_order
            .iter()
            .filter_map(|&index| {
                let node = nodes.get(index)?;
                let p = progress.get(index)?;
                Some(node_draw(index, node, *p, assets, style.border_radius))
            })
            .collect();

        let connector_draws = style.connector_size.map_or_else(Vec::new, |size| {
            connections
                .iter()
                .filter_map(|connection| {
                    let source = nodes.get(connection.source)?;
                    let target = nodes.get(connection.target)?;
                    let source_progress = progress.get(connection.source)?;
                    let target_progress = progress.get(connection.target)?;
                    Some(connector_draw(
                        connection,
                        (source, *source_progress),
                        (target, *target_progress),
                        size,
                    ))
                })
                .collect()
        });

        Self {
            elapsed_ms: Some(elapsed),
            nodes: node_draws,
            connectors: connector_draws,
        }
    }
}

fn node_draw(
    index: usize,
    node: &Node,
    progress: Progress,
    assets: &[ImageAsset],
    border_radius: f64,
) -> NodeDraw {
    let scale = progress.eased;
    let (width, height) = assets
        .get(node.image.index())
        .map_or((node.size, node.size), |asset| asset.fit_within(node.size));
    NodeDraw {
        node: index,
        image: node.image,
        center: node.start_pos.lerp(node.target_pos, progress.eased),
        draw_width: width * scale,
        draw_height: height * scale,
        scale,
        progress: progress.raw,
        opacity: progress.eased,
        corner_radius: border_radius * scale,
    }
}

fn connector_draw(
    connection: &Connection,
    (source, source_progress): (&Node, Progress),
    (target, target_progress): (&Node, Progress),
    size: f64,
) -> ConnectorDraw {
    let from = source.start_pos.lerp(source.target_pos, source_progress.eased);
    let to = target.start_pos.lerp(target.target_pos, target_progress.eased);
    // atan2(0, 0) is 0, so coincident endpoints anchor to the right edge
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let anchor = from.offset_polar(angle, source.size / 2.0);
    let eased = ease_out_cubic(source_progress.raw.min(target_progress.raw));

    ConnectorDraw {
        source: connection.source,
        target: connection.target,
        x: anchor.x,
        y: anchor.y,
        angle,
        opacity: eased,
        scale: eased,
        size,
    }
}

/// Node positions sorted back to front
///
/// Tiles are bucketed into rows of ten pixels by resting `y`, then ordered by
/// resting `x`, with the list position as the final tie breaker.
pub fn draw_order(nodes: &[Node]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| {
        let key = |index: usize| {
            nodes.get(index).map_or((0.0, 0.0), |node| {
                (
                    (node.target_pos.y / DRAW_ROW_BUCKET).floor(),
                    node.target_pos.x,
                )
            })
        };
        let (row_a, x_a) = key(a);
        let (row_b, x_b) = key(b);
        row_a
            .total_cmp(&row_b)
            .then(x_a.total_cmp(&x_b))
            .then(a.cmp(&b))
    });
    order
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame.rs"]
mod tests;
