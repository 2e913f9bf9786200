//! lognet-sim: Color propagation and conflict detection for the logical
//! network simulator.
//!
//! A [`Simulator`] owns one colored graph for the length of a session. Each
//! user color change is applied as a single step: record it in the history
//! log, recolor the target, propagate one hop to gray and white neighbors,
//! then recompute the conflict set. The presentation layer renders from
//! [`Simulator::view`].

pub mod command;
pub mod conflicts;
pub mod error;
pub mod propagation;
pub mod render;
pub mod types;

pub use error::SimError;
pub use types::{ChangeOutcome, SimView};

use std::collections::BTreeSet;

use lognet_core::events::{EventPayload, SimEvent};
use lognet_core::{ChangeEntry, Color, Conflict, Node, NodeId, Recolor, RecolorCause};
use lognet_core::{SimConfig, UnknownNodePolicy};
use lognet_graph::{GraphSnapshot, GraphStore};
use lognet_ledger::{HistoryLog, SessionRecord};

use crate::conflicts::ConflictDiff;

/// The simulation engine. Sole owner and writer of its graph.
pub struct Simulator {
    graph: GraphStore,
    seed: Vec<Node>,
    history: HistoryLog,
    conflicts: BTreeSet<Conflict>,
    events: Vec<SimEvent>,
    unknown_node: UnknownNodePolicy,
}

impl Simulator {
    /// Start a session on the given graph.
    pub fn new(graph: GraphStore) -> Self {
        let conflicts = conflicts::detect(&graph);
        Self {
            seed: graph.nodes().to_vec(),
            graph,
            history: HistoryLog::new(),
            conflicts,
            events: Vec::new(),
            unknown_node: UnknownNodePolicy::default(),
        }
    }

    /// Start a session on the built-in seed.
    pub fn seeded() -> Self {
        Self::new(GraphStore::seeded())
    }

    /// Start a session as configured: seed file if set, built-in seed otherwise.
    pub fn from_config(config: &SimConfig) -> error::Result<Self> {
        let graph = match &config.seed_path {
            Some(path) => lognet_graph::seed::load_seed(path)?,
            None => GraphStore::seeded(),
        };
        Ok(Self::new(graph).with_unknown_node_policy(config.unknown_node))
    }

    /// Set how changes to unknown node ids are handled.
    pub fn with_unknown_node_policy(mut self, policy: UnknownNodePolicy) -> Self {
        self.unknown_node = policy;
        self
    }

    /// Entry point for the presentation layer when a user picks a color.
    pub fn on_color_select(&mut self, node_id: &str, color: Color) -> error::Result<ChangeOutcome> {
        self.apply_user_change(&NodeId::from(node_id), color)
    }

    /// Apply one user-initiated color change.
    ///
    /// Orchestrates: history entry → recolor target → one-hop propagation →
    /// conflict recompute → events. With the `reject` policy an unknown id
    /// fails before anything is touched.
    pub fn apply_user_change(&mut self, id: &NodeId, color: Color) -> error::Result<ChangeOutcome> {
        if !self.graph.contains(id) && self.unknown_node == UnknownNodePolicy::Reject {
            return Err(SimError::UnknownNode {
                node_id: id.to_string(),
            });
        }

        let seq = self.history.append(ChangeEntry::new(id.clone(), color));

        let mut recolors = Vec::new();
        let applied = match self.graph.set_color(id, color) {
            Ok(previous) => {
                tracing::info!(seq, node_id = %id, from = %previous, to = %color, "Color changed");
                self.events.push(SimEvent::new(
                    seq,
                    EventPayload::ColorChanged {
                        node_id: id.clone(),
                        from: previous,
                        to: color,
                    },
                ));
                recolors.push(Recolor {
                    node_id: id.clone(),
                    from: previous,
                    to: color,
                    cause: RecolorCause::User,
                });
                recolors.extend(propagation::propagate(&mut self.graph, id, color));
                true
            }
            Err(_) => {
                tracing::warn!(seq, node_id = %id, color = %color, "Ignoring change to unknown node");
                self.events.push(SimEvent::new(
                    seq,
                    EventPayload::UnknownNodeIgnored {
                        node_id: id.clone(),
                        color,
                    },
                ));
                false
            }
        };

        for recolor in recolors.iter().filter(|r| r.cause != RecolorCause::User) {
            self.events.push(SimEvent::new(
                seq,
                EventPayload::NeighborRecolored {
                    node_id: recolor.node_id.clone(),
                    from: recolor.from,
                    to: recolor.to,
                    cause: recolor.cause,
                },
            ));
        }

        let diff = self.recompute_conflicts(seq);

        Ok(ChangeOutcome {
            seq,
            change: ChangeEntry::new(id.clone(), color),
            applied,
            recolors,
            conflicts_introduced: diff.introduced,
            conflicts_resolved: diff.resolved,
        })
    }

    /// Replace the conflict set with a full recompute over the current graph.
    fn recompute_conflicts(&mut self, seq: u64) -> ConflictDiff {
        let next = conflicts::detect(&self.graph);
        let diff = ConflictDiff::between(&self.conflicts, &next);

        for conflict in &diff.introduced {
            tracing::warn!(conflict = %conflict, color = %conflict.color, "Conflict detected");
        }
        for conflict in &diff.resolved {
            tracing::debug!(conflict = %conflict, "Conflict resolved");
        }

        self.events.push(SimEvent::new(
            seq,
            EventPayload::ConflictsUpdated {
                introduced: diff.introduced.iter().map(Conflict::label).collect(),
                resolved: diff.resolved.iter().map(Conflict::label).collect(),
                total: next.len(),
            },
        ));

        self.conflicts = next;
        diff
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.graph.snapshot()
    }

    pub fn conflicts(&self) -> &BTreeSet<Conflict> {
        &self.conflicts
    }

    /// Conflict labels (`X ↔ Y`), ordered by node id.
    pub fn conflict_labels(&self) -> Vec<String> {
        conflicts::labels(&self.conflicts)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Seal the history so far into a hashed session record.
    pub fn seal_history(&self) -> SessionRecord {
        self.history.seal()
    }

    /// Take all events buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Everything the presentation layer renders from.
    pub fn view(&self) -> SimView {
        SimView {
            graph: self.graph.snapshot(),
            conflicts: self.conflict_labels(),
            history: self.history.entries().to_vec(),
        }
    }

    /// Start a fresh session: seed colors restored, history and events cleared.
    pub fn reset(&mut self) {
        // The seed was accepted by from_nodes when this simulator was built.
        if let Ok(graph) = GraphStore::from_nodes(self.seed.clone()) {
            self.graph = graph;
        }
        self.history = HistoryLog::new();
        self.conflicts = conflicts::detect(&self.graph);
        self.events.clear();
        tracing::info!(session_id = %self.history.session_id(), "Session reset");
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::seeded()
    }
}
