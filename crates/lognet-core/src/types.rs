//! Core domain types for the logical network simulator.
//!
//! These types describe the colored graph the simulator operates on and the
//! records it hands to the presentation layer after every change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ── Node Identity ─────────────────────────────────────────────────

/// Label of a node in the graph ("A", "B", ...). Immutable and unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ── Colors ────────────────────────────────────────────────────────

/// The fixed set of node colors.
///
/// `Blue` and `Red` are firm: they participate in conflict detection and
/// push a derived influence color onto gray neighbors. `Gray` is the unset
/// default and `White` marks an undecided node resolved by plurality vote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Orange,
    Yellow,
    Purple,
    Gray,
    White,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 8] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Yellow,
        Color::Purple,
        Color::Gray,
        Color::White,
    ];

    /// Marker assigned when a plurality vote ends in a tie.
    pub const AMBIGUOUS: Color = Color::Yellow;

    pub fn is_firm(self) -> bool {
        matches!(self, Color::Blue | Color::Red)
    }

    /// The color this one pushes onto gray neighbors, if any.
    ///
    /// Gray carries no influence. Firm colors map to their softened form;
    /// every other color propagates as itself.
    pub fn influence(self) -> Option<Color> {
        match self {
            Color::Gray => None,
            Color::Blue => Some(Color::Green),
            Color::Red => Some(Color::Orange),
            other => Some(other),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Gray => "gray",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| CoreError::InvalidColor(s.to_string()))
    }
}

// ── Graph Nodes ───────────────────────────────────────────────────

/// A node with its current color and declared neighbors.
///
/// Connections are declared per node and are not required to be symmetric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub color: Color,
    pub connections: Vec<NodeId>,
}

impl Node {
    pub fn new(id: &str, color: Color, connections: &[&str]) -> Self {
        Self {
            id: NodeId::from(id),
            color,
            connections: connections.iter().map(|c| NodeId::from(*c)).collect(),
        }
    }
}

// ── Conflicts ─────────────────────────────────────────────────────

/// An edge whose endpoints hold the same firm color.
///
/// The pair is normalized on construction (`a <= b`), so `A ↔ B` and
/// `B ↔ A` are the same conflict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Conflict {
    pub a: NodeId,
    pub b: NodeId,
    pub color: Color,
}

impl Conflict {
    pub fn new(x: NodeId, y: NodeId, color: Color) -> Self {
        if x <= y {
            Self { a: x, b: y, color }
        } else {
            Self { a: y, b: x, color }
        }
    }

    /// Display label used by the presentation layer.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn involves(&self, id: &NodeId) -> bool {
        &self.a == id || &self.b == id
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}", self.a, self.b)
    }
}

// ── Change Records ────────────────────────────────────────────────

/// A user-initiated color change, as recorded in the history log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeEntry {
    pub changed: NodeId,
    pub to: Color,
}

impl ChangeEntry {
    pub fn new(changed: NodeId, to: Color) -> Self {
        Self { changed, to }
    }
}

/// Why a node's color changed during one user action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecolorCause {
    /// The user picked the color directly.
    User,
    /// A gray neighbor took the influence of the changed node.
    Influence,
    /// A white neighbor resolved to the strict plurality of its neighbors.
    Plurality,
    /// A white neighbor's vote tied and it was marked ambiguous.
    Tie,
}

/// One node color transition produced by a user action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recolor {
    pub node_id: NodeId,
    pub from: Color,
    pub to: Color,
    pub cause: RecolorCause,
}
