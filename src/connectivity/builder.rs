//! Connector inference from final tile positions
//!
//! Tiles are visited in ascending `x`. Each one links to its nearest
//! qualifying neighbour on the right and on the left, where qualifying means
//! within the connector distance and displaced more horizontally than
//! vertically. Every tile owns one right slot and one left slot, so no tile
//! ends up with more than two connectors.

use crate::layout::node::Node;
use bitvec::prelude::{BitVec, bitvec};

/// Scan direction that discovered a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionSide {
    /// Found while scanning right of the source
    Right,
    /// Found while scanning left of the target
    Left,
}

/// A connector between two tiles, identified by their positions in the node list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Left tile; the connector is anchored on its edge
    pub source: usize,
    /// Right tile
    pub target: usize,
    /// Which scan produced this connection
    pub side: ConnectionSide,
}

impl Connection {
    /// The pair as `(min, max)`, independent of direction
    pub fn unordered(&self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }

    /// Whether `node` is one of the two endpoints
    pub const fn touches(&self, node: usize) -> bool {
        self.source == node || self.target == node
    }
}

/// Builds connections for a node set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectivityBuilder {
    max_distance: f64,
}

/// Occupied connector slots per node
struct Slots {
    right: BitVec,
    left: BitVec,
}

impl Slots {
    fn new(len: usize) -> Self {
        Self {
            right: bitvec![0; len],
            left: bitvec![0; len],
        }
    }

    fn is_free(&self, source: usize, target: usize) -> bool {
        let right_taken = self.right.get(source).is_some_and(|bit| *bit);
        let left_taken = self.left.get(target).is_some_and(|bit| *bit);
        !right_taken && !left_taken
    }

    fn occupy(&mut self, source: usize, target: usize) {
        self.right.set(source, true);
        self.left.set(target, true);
    }
}

impl ConnectivityBuilder {
    /// Create a builder linking tiles at most `max_distance` apart
    pub const fn new(max_distance: f64) -> Self {
        Self { max_distance }
    }

    /// Maximum centre distance of a connected pair
    pub const fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Whether `right` is a connector candidate for `left`
    pub fn qualifies(&self, left: &Node, right: &Node) -> bool {
        let dx = right.target_pos.x - left.target_pos.x;
        let dy = right.target_pos.y - left.target_pos.y;
        dx.hypot(dy) <= self.max_distance && dx.abs() > dy.abs()
    }

    /// Infer connections for `nodes`
    ///
    /// The result has no duplicate unordered pairs and every node appears at
    /// most once as a source and once as a target.
    pub fn build(&self, nodes: &[Node]) -> Vec<Connection> {
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_by(|&a, &b| {
            let ax = nodes.get(a).map_or(0.0, |n| n.target_pos.x);
            let bx = nodes.get(b).map_or(0.0, |n| n.target_pos.x);
            ax.total_cmp(&bx).then(a.cmp(&b))
        });

        let mut slots = Slots::new(nodes.len());
        let mut connections = Vec::new();

        for (rank, &current) in order.iter().enumerate() {
            let Some(node) = nodes.get(current) else {
                continue;
            };

            let right = order.iter().skip(rank + 1).copied().find(|&other| {
                nodes
                    .get(other)
                    .is_some_and(|candidate| self.qualifies(node, candidate))
            });
            if let Some(other) = right
                && slots.is_free(current, other)
            {
                slots.occupy(current, other);
                connections.push(Connection {
                    source: current,
                    target: other,
                    side: ConnectionSide::Right,
                });
            }

            let left = order.iter().take(rank).rev().copied().find(|&other| {
                nodes
                    .get(other)
                    .is_some_and(|candidate| self.qualifies(candidate, node))
            });
            if let Some(other) = left
                && slots.is_free(other, current)
            {
                slots.occupy(other, current);
                connections.push(Connection {
                    source: other,
                    target: current,
                    side: ConnectionSide::Left,
                });
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            connections = connections.len(),
            "connections built"
        );
        connections
    }
}

#[cfg(test)]
#[path = "../../tests/unit/connectivity/builder.rs"]
mod tests;
