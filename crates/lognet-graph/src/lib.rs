//! lognet-graph: the graph store behind the logical network simulator.
//!
//! Holds the colored nodes of a session in insertion order with an id index
//! for O(1) lookup, provides the built-in sixteen-node seed, and loads
//! custom seed topologies from JSON.

pub mod error;
pub mod seed;
pub mod store;

pub use error::GraphError;
pub use store::{GraphSnapshot, GraphStore};
