//! Tests for tiered image selection and duplicate exclusion

use super::*;
use crate::math::Extent;
use rand::{SeedableRng, rngs::StdRng};

fn place(nodes: &mut Vec<Node>, index: &mut SpatialIndex, at: Point, image: usize) {
    nodes.push(Node::travelling(at, at, 80.0, AssetId(image), 0.0));
    index.insert(at);
}

// Tests never-used images win over once-used ones
// Verified by checking the second tier first
#[test]
fn test_first_use_tier_preferred() {
    let mut ledger = ImageUsageLedger::new(2, 2);
    ledger.record_use(AssetId(0));
    let index = SpatialIndex::new(Extent::new(800.0, 600.0), 300.0);
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..20 {
        let pick = select_image_for_position(
            &ledger,
            &[],
            &index,
            Point::new(100.0, 100.0),
            300.0,
            &mut rng,
        );
        assert_eq!(pick, Some(AssetId(1)));
    }
}

// Tests nearby duplicates push selection into the next tier
// Verified by ignoring the exclusion radius
#[test]
fn test_nearby_duplicate_excluded() {
    let mut ledger = ImageUsageLedger::new(2, 2);
    let mut nodes = Vec::new();
    let mut index = SpatialIndex::new(Extent::new(800.0, 600.0), 300.0);
    ledger.record_use(AssetId(0));
    place(&mut nodes, &mut index, Point::new(400.0, 300.0), 0);

    let mut rng = StdRng::seed_from_u64(2);
    let near = select_image_for_position(
        &ledger,
        &nodes,
        &index,
        Point::new(600.0, 300.0),
        300.0,
        &mut rng,
    );
    assert_eq!(near, Some(AssetId(1)));

    // Asset 1 now also used once and placed nearby: nothing remains eligible
    ledger.record_use(AssetId(1));
    place(&mut nodes, &mut index, Point::new(600.0, 300.0), 1);
    let blocked = select_image_for_position(
        &ledger,
        &nodes,
        &index,
        Point::new(500.0, 420.0),
        300.0,
        &mut rng,
    );
    assert_eq!(blocked, None);
}

// Tests once-used images are offered when far from their twin
// Verified by restricting selection to unused images
#[test]
fn test_second_tier_when_far() {
    let mut ledger = ImageUsageLedger::new(1, 2);
    let mut nodes = Vec::new();
    let mut index = SpatialIndex::new(Extent::new(2000.0, 600.0), 300.0);
    ledger.record_use(AssetId(0));
    place(&mut nodes, &mut index, Point::new(100.0, 300.0), 0);

    let mut rng = StdRng::seed_from_u64(3);
    let pick = select_image_for_position(
        &ledger,
        &nodes,
        &index,
        Point::new(1500.0, 300.0),
        300.0,
        &mut rng,
    );
    assert_eq!(pick, Some(AssetId(0)));
}

// Tests images at quota are never offered
// Verified by allowing count equal to quota
#[test]
fn test_exhausted_images_skipped() {
    let mut ledger = ImageUsageLedger::new(1, 2);
    ledger.record_use(AssetId(0));
    ledger.record_use(AssetId(0));
    let index = SpatialIndex::new(Extent::new(800.0, 600.0), 300.0);
    let mut rng = StdRng::seed_from_u64(4);

    let pick = select_image_for_position(
        &ledger,
        &[],
        &index,
        Point::new(10.0, 10.0),
        300.0,
        &mut rng,
    );
    assert_eq!(pick, None);
}

// Tests quotas above two keep filling by ascending count
// Verified by stopping after the once-used tier
#[test]
fn test_higher_quota_tiers() {
    let mut ledger = ImageUsageLedger::new(2, 3);
    for _ in 0..2 {
        ledger.record_use(AssetId(0));
    }
    for _ in 0..3 {
        ledger.record_use(AssetId(1));
    }
    let index = SpatialIndex::new(Extent::new(800.0, 600.0), 300.0);
    let mut rng = StdRng::seed_from_u64(5);

    let pick = select_image_for_position(
        &ledger,
        &[],
        &index,
        Point::new(10.0, 10.0),
        300.0,
        &mut rng,
    );
    assert_eq!(pick, Some(AssetId(0)));
}

// Tests the duplicate probe only matches the same image
// Verified by matching any nearby node
#[test]
fn test_has_nearby_duplicate() {
    let mut nodes = Vec::new();
    let mut index = SpatialIndex::new(Extent::new(800.0, 600.0), 100.0);
    place(&mut nodes, &mut index, Point::new(200.0, 200.0), 3);

    assert!(has_nearby_duplicate(
        &nodes,
        &index,
        Point::new(250.0, 200.0),
        100.0,
        AssetId(3)
    ));
    assert!(!has_nearby_duplicate(
        &nodes,
        &index,
        Point::new(250.0, 200.0),
        100.0,
        AssetId(4)
    ));
    assert!(!has_nearby_duplicate(
        &nodes,
        &index,
        Point::new(400.0, 200.0),
        100.0,
        AssetId(3)
    ));
}
