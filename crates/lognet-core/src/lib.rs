//! lognet-core: Shared types, configuration, and error handling for the
//! logical network simulator.
//!
//! This crate provides the foundational types used across all lognet crates:
//! - Node identifiers, colors, and graph nodes
//! - Conflicts between adjacent firm-colored nodes
//! - Change records and recolor outcomes
//! - Simulation events for the presentation layer
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use self::config::{SimConfig, UnknownNodePolicy};
pub use error::CoreError;
pub use types::{ChangeEntry, Color, Conflict, Node, NodeId, Recolor, RecolorCause};
