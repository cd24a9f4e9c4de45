//! Sparse horizontal adjacency between placed tiles

/// Nearest-neighbour scans producing connector pairs
pub mod builder;

pub use builder::{Connection, ConnectionSide, ConnectivityBuilder};
