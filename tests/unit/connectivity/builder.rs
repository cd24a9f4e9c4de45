//! Tests for connector inference and slot limits

use super::*;
use crate::config::Config;
use crate::layout::asset::{AssetId, ImageAsset};
use crate::layout::engine::LayoutEngine;
use crate::math::{Extent, Point};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

fn at(x: f64, y: f64) -> Node {
    Node::travelling(Point::default(), Point::new(x, y), 80.0, AssetId(0), 0.0)
}

fn assert_well_formed(builder: &ConnectivityBuilder, nodes: &[Node], connections: &[Connection]) {
    let mut pairs = HashSet::new();
    let mut sources = HashSet::new();
    let mut targets = HashSet::new();
    for connection in connections {
        assert!(pairs.insert(connection.unordered()), "duplicate pair");
        assert!(sources.insert(connection.source), "two right connectors");
        assert!(targets.insert(connection.target), "two left connectors");
        let (Some(left), Some(right)) = (nodes.get(connection.source), nodes.get(connection.target))
        else {
            panic!("connection refers to a missing node");
        };
        assert!(builder.qualifies(left, right));
    }
}

// Tests a horizontal row links each neighbour once
// Verified by recording the left scan without a pair check
#[test]
fn test_row_links_neighbours() {
    let nodes = vec![at(300.0, 100.0), at(100.0, 100.0), at(200.0, 110.0)];
    let builder = ConnectivityBuilder::new(150.0);
    let connections = builder.build(&nodes);

    assert_eq!(connections.len(), 2);
    let pairs: HashSet<(usize, usize)> = connections.iter().map(Connection::unordered).collect();
    assert!(pairs.contains(&(1, 2)));
    assert!(pairs.contains(&(0, 2)));
    assert!(connections.iter().all(|c| c.side == ConnectionSide::Right));
    assert!(
        connections
            .iter()
            .all(|c| nodes.get(c.source).map(|n| n.target_pos.x)
                < nodes.get(c.target).map(|n| n.target_pos.x))
    );
    assert_well_formed(&builder, &nodes, &connections);
}

// Tests vertical and distant pairs are ignored
// Verified by comparing dx against dy with the wrong sign
#[test]
fn test_vertical_and_far_pairs_ignored() {
    let builder = ConnectivityBuilder::new(150.0);
    let stacked = vec![at(100.0, 100.0), at(110.0, 220.0)];
    assert!(builder.build(&stacked).is_empty());

    let far = vec![at(100.0, 100.0), at(260.0, 100.0)];
    assert!(builder.build(&far).is_empty());

    let diagonal = vec![at(100.0, 100.0), at(180.0, 180.0)];
    assert!(builder.build(&diagonal).is_empty());
}

// Tests the boundary distance is inclusive
// Verified by using a strict comparison
#[test]
fn test_distance_boundary_inclusive() {
    let builder = ConnectivityBuilder::new(150.0);
    let nodes = vec![at(0.0, 0.0), at(150.0, 0.0)];
    assert_eq!(builder.build(&nodes).len(), 1);
}

// Tests an occupied left slot refuses a second connector
// Verified by dropping the slot bookkeeping
#[test]
fn test_occupied_slot_refused() {
    let nodes = vec![at(0.0, 0.0), at(5.0, 60.0), at(100.0, 30.0)];
    let builder = ConnectivityBuilder::new(150.0);
    let connections = builder.build(&nodes);

    assert_eq!(
        connections,
        vec![Connection {
            source: 0,
            target: 2,
            side: ConnectionSide::Right,
        }]
    );
    assert!(connections.iter().all(|c| !c.touches(1)));
}

// Tests the left scan fills a slot the right scan could not
// Verified by skipping the left scan
#[test]
fn test_left_scan_adds_connection() {
    let nodes = vec![at(0.0, 50.0), at(20.0, 0.0), at(120.0, 50.0), at(150.0, -20.0)];
    let builder = ConnectivityBuilder::new(150.0);
    let connections = builder.build(&nodes);

    assert_eq!(
        connections,
        vec![
            Connection {
                source: 0,
                target: 2,
                side: ConnectionSide::Right,
            },
            Connection {
                source: 1,
                target: 3,
                side: ConnectionSide::Left,
            },
        ]
    );
    assert_well_formed(&builder, &nodes, &connections);
}

// Tests empty and single-node inputs
// Verified by indexing the first sorted node unconditionally
#[test]
fn test_degenerate_inputs() {
    let builder = ConnectivityBuilder::new(150.0);
    assert!(builder.build(&[]).is_empty());
    assert!(builder.build(&[at(1.0, 1.0)]).is_empty());
    assert!(ConnectivityBuilder::new(f64::NAN).build(&[at(0.0, 0.0), at(10.0, 0.0)]).is_empty());
}

// Tests generated layouts yield well-formed connections
// Verified by allowing a node three connectors
#[test]
fn test_generated_layouts_well_formed() {
    for seed in 0..6 {
        let mut rng = StdRng::seed_from_u64(seed);
        let assets = vec![ImageAsset::new(120, 90); 15];
        let layout = LayoutEngine::new(Config::default()).generate(
            Extent::new(1600.0, 900.0),
            &assets,
            &mut rng,
        );
        let builder = ConnectivityBuilder::new(layout.metrics.connector_max_distance);
        let connections = builder.build(&layout.nodes);
        assert_well_formed(&builder, &layout.nodes, &connections);
        for index in 0..layout.nodes.len() {
            assert!(connections.iter().filter(|c| c.touches(index)).count() <= 2);
        }
    }
}

// Tests crowded layouts with shrunk tiles produce no connectors
// Verified by widening the reach to the effective minimum distance
#[test]
fn test_shrunk_layout_has_no_connectors() {
    let mut rng = StdRng::seed_from_u64(9);
    let assets = vec![ImageAsset::new(100, 100); 40];
    let layout = LayoutEngine::new(Config::default()).generate(
        Extent::new(1920.0, 1080.0),
        &assets,
        &mut rng,
    );
    assert!(layout.metrics.node_size < Config::default().base_node_size);
    assert!(layout.nodes.len() > 1);

    let connections =
        ConnectivityBuilder::new(layout.metrics.connector_max_distance).build(&layout.nodes);
    assert!(connections.is_empty());
}
