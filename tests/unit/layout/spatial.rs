//! Tests for the bucket grid radius queries

use super::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

// Tests grid dimensions round up to cover the extent
// Verified by flooring the column count
#[test]
fn test_dimensions_cover_extent() {
    let index = SpatialIndex::new(Extent::new(250.0, 100.0), 100.0);
    assert_eq!(index.dimensions(), (1, 3));
    assert!(index.is_empty());
}

// Tests radius queries are strict and cross cell borders
// Verified by using an inclusive distance comparison
#[test]
fn test_within_strict_radius() {
    let mut index = SpatialIndex::new(Extent::new(400.0, 400.0), 50.0);
    let a = index.insert(Point::new(98.0, 100.0));
    let b = index.insert(Point::new(102.0, 100.0));
    let _far = index.insert(Point::new(300.0, 300.0));

    let mut near: Vec<usize> = index.within(Point::new(100.0, 100.0), 10.0).collect();
    near.sort_unstable();
    assert_eq!(near, vec![a, b]);

    assert!(!index.any_within(Point::new(100.0, 100.0), 2.0));
    assert_eq!(index.len(), 3);
}

// Tests points outside the extent are still found
// Verified by dropping out-of-range points on insert
#[test]
fn test_out_of_extent_points() {
    let mut index = SpatialIndex::new(Extent::new(100.0, 100.0), 25.0);
    index.insert(Point::new(-30.0, 150.0));
    assert!(index.any_within(Point::new(-20.0, 140.0), 20.0));
    assert!(!index.any_within(Point::new(50.0, 50.0), 20.0));
}

// Tests queries agree with a brute-force scan on random data
// Verified by visiting only the query point's own cell
#[test]
fn test_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    let extent = Extent::new(640.0, 480.0);
    let mut index = SpatialIndex::new(extent, 60.0);
    let mut points = Vec::new();
    for _ in 0..300 {
        let p = Point::new(
            rng.random_range(0.0..extent.width),
            rng.random_range(0.0..extent.height),
        );
        index.insert(p);
        points.push(p);
    }

    for _ in 0..50 {
        let query = Point::new(
            rng.random_range(0.0..extent.width),
            rng.random_range(0.0..extent.height),
        );
        let radius = rng.random_range(1.0..150.0);
        let mut fast: Vec<usize> = index.within(query, radius).collect();
        fast.sort_unstable();
        let slow: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.distance_squared(query) < radius * radius)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(fast, slow);
    }
}

// Tests a degenerate cell size falls back to a single cell
// Verified by dividing by the zero cell size
#[test]
fn test_zero_cell_size() {
    let mut index = SpatialIndex::new(Extent::new(200.0, 100.0), 0.0);
    assert_eq!(index.dimensions(), (1, 1));
    index.insert(Point::new(10.0, 10.0));
    assert!(index.any_within(Point::new(15.0, 10.0), 6.0));
}

// Tests tiny cells on a huge canvas are capped per axis and stay exact
// Verified by sizing the grid from the requested cell size alone
#[test]
fn test_cell_count_capped_per_axis() {
    let mut index = SpatialIndex::new(Extent::new(1_000_000.0, 500_000.0), 1e-9);
    assert_eq!(index.dimensions(), (256, 512));

    let a = index.insert(Point::new(10.0, 10.0));
    let _b = index.insert(Point::new(10.0, 10.0 + 2e-9));
    let c = index.insert(Point::new(10.0 + 5e-10, 10.0));
    let mut near: Vec<usize> = index.within(Point::new(10.0, 10.0), 1e-9).collect();
    near.sort_unstable();
    assert_eq!(near, vec![a, c]);
}
