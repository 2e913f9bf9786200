//! Error types for the lognet-sim crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Graph error: {0}")]
    Graph(#[from] lognet_graph::GraphError),

    #[error("Node not found: {node_id}")]
    UnknownNode { node_id: String },

    #[error("{0}")]
    Core(#[from] lognet_core::CoreError),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
