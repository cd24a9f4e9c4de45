//! Tiered image assignment with same-image exclusion

use crate::layout::asset::AssetId;
use crate::layout::ledger::ImageUsageLedger;
use crate::layout::node::Node;
use crate::layout::spatial::SpatialIndex;
use crate::math::Point;
use rand::Rng;

/// Whether a node carrying `image` lies strictly within `radius` of `position`
pub fn has_nearby_duplicate(
    nodes: &[Node],
    index: &SpatialIndex,
    position: Point,
    radius: f64,
    image: AssetId,
) -> bool {
    index
        .within(position, radius)
        .any(|i| nodes.get(i).is_some_and(|node| node.image == image))
}

/// Pick an image for a node at `position`, or `None` if no image is eligible
///
/// Candidates are grouped into tiers by how often they have been used:
/// never-used images first, then images used once, and so on while below the
/// quota. Within a tier, images already carried by a node inside
/// `exclusion_radius` are excluded. The first non-empty tier wins and the
/// choice inside it is uniform.
pub fn select_image_for_position<R: Rng>(
    ledger: &ImageUsageLedger,
    nodes: &[Node],
    index: &SpatialIndex,
    position: Point,
    exclusion_radius: f64,
    rng: &mut R,
) -> Option<AssetId> {
    let eligible = |image: &AssetId| {
        !has_nearby_duplicate(nodes, index, position, exclusion_radius, *image)
    };

    let first_use: Vec<AssetId> = ledger.awaiting_first_use().filter(eligible).collect();
    if let Some(image) = pick(&first_use, rng) {
        return Some(image);
    }

    for uses in 1..ledger.quota() {
        let tier: Vec<AssetId> = ledger.used_exactly(uses).filter(eligible).collect();
        if let Some(image) = pick(&tier, rng) {
            return Some(image);
        }
    }

    None
}

fn pick<R: Rng>(candidates: &[AssetId], rng: &mut R) -> Option<AssetId> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.random_range(0..candidates.len())).copied()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/selection.rs"]
mod tests;
