//! Request/response types exchanged with the presentation layer.

use serde::{Deserialize, Serialize};

use lognet_core::{ChangeEntry, Conflict, Recolor};
use lognet_graph::GraphSnapshot;
use lognet_ledger::LogEntry;

/// Everything one user action did to the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeOutcome {
    /// Position of this change in the history log.
    pub seq: u64,
    pub change: ChangeEntry,
    /// False when the target node did not exist and the change was ignored.
    pub applied: bool,
    /// The user recolor first, then neighbor recolors in visiting order.
    pub recolors: Vec<Recolor>,
    pub conflicts_introduced: Vec<Conflict>,
    pub conflicts_resolved: Vec<Conflict>,
}

/// The data the presentation layer renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimView {
    pub graph: GraphSnapshot,
    /// Conflict labels (`X ↔ Y`), ordered by node id.
    pub conflicts: Vec<String>,
    pub history: Vec<LogEntry>,
}
