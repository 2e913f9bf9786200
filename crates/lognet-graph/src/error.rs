//! Error types for the lognet-graph crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node not found: {node_id}")]
    UnknownNode { node_id: String },

    #[error("Duplicate node id in seed: {node_id}")]
    DuplicateNode { node_id: String },

    #[error("Node {node_id} lists unknown connection {target}")]
    DanglingConnection { node_id: String, target: String },

    #[error("Seed contains no nodes")]
    EmptySeed,

    #[error("Failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
