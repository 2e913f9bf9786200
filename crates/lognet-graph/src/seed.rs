//! Seed topologies.
//!
//! The built-in seed is a 4x4 grid (A..P, row-major) with two blue corners,
//! one red node and one white node. Custom seeds use the same JSON shape as
//! a graph snapshot's node list.

use std::fs;
use std::path::Path;

use lognet_core::{Color, Node};

use crate::error::Result;
use crate::store::GraphStore;

/// The built-in sixteen-node seed.
pub fn seed_nodes() -> Vec<Node> {
    vec![
        Node::new("A", Color::Blue, &["B", "E"]),
        Node::new("B", Color::Gray, &["A", "C", "F"]),
        Node::new("C", Color::Red, &["B", "D", "G"]),
        Node::new("D", Color::Gray, &["C", "H"]),
        Node::new("E", Color::White, &["A", "F", "I"]),
        Node::new("F", Color::Gray, &["B", "E", "G", "J"]),
        Node::new("G", Color::Gray, &["C", "F", "H", "K"]),
        Node::new("H", Color::Gray, &["D", "G", "L"]),
        Node::new("I", Color::Gray, &["E", "J", "M"]),
        Node::new("J", Color::Gray, &["F", "I", "K", "N"]),
        Node::new("K", Color::Gray, &["G", "J", "L", "O"]),
        Node::new("L", Color::Gray, &["H", "K", "P"]),
        Node::new("M", Color::Gray, &["I", "N"]),
        Node::new("N", Color::Gray, &["J", "M", "O"]),
        Node::new("O", Color::Gray, &["K", "N", "P"]),
        Node::new("P", Color::Blue, &["L", "O"]),
    ]
}

/// Parse a seed from JSON: an array of `{"id", "color", "connections"}`.
pub fn parse_seed(json: &str) -> Result<Vec<Node>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and validate a seed file into a ready graph store.
pub fn load_seed(path: impl AsRef<Path>) -> Result<GraphStore> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let nodes = parse_seed(&json)?;
    let store = GraphStore::from_nodes(nodes)?;

    tracing::info!(
        path = %path.display(),
        nodes = store.node_count(),
        edges = store.edge_count(),
        "Loaded seed graph"
    );

    Ok(store)
}
