//! Plain-text rendering of simulator state for the terminal.

use std::fmt::Write;

use lognet_graph::GraphSnapshot;
use lognet_ledger::LogEntry;

use crate::types::ChangeOutcome;

/// One line per node: id, color, connections.
pub fn render_graph(graph: &GraphSnapshot) -> String {
    let mut out = String::new();
    for node in &graph.nodes {
        let connections: Vec<&str> = node.connections.iter().map(|c| c.as_str()).collect();
        let _ = writeln!(
            out,
            "Node {:<4} {:<7} connections: {}",
            node.id.as_str(),
            node.color.as_str(),
            connections.join(", ")
        );
    }
    out
}

pub fn render_conflicts(conflicts: &[String]) -> String {
    if conflicts.is_empty() {
        return "No conflicts.\n".to_string();
    }
    let mut out = String::from("Conflicts detected:\n");
    for conflict in conflicts {
        let _ = writeln!(out, "  {conflict}");
    }
    out
}

pub fn render_history(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No changes yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "#{:<3} {} -> {}",
            entry.seq, entry.change.changed, entry.change.to
        );
    }
    out
}

/// Summary of a single change: what moved and which conflicts came or went.
pub fn render_outcome(outcome: &ChangeOutcome) -> String {
    let mut out = String::new();
    if !outcome.applied {
        let _ = writeln!(out, "{}: unknown node, nothing changed", outcome.change.changed);
    }
    for recolor in &outcome.recolors {
        let _ = writeln!(
            out,
            "{}: {} -> {} ({:?})",
            recolor.node_id, recolor.from, recolor.to, recolor.cause
        );
    }
    for conflict in &outcome.conflicts_introduced {
        let _ = writeln!(out, "+ conflict {conflict}");
    }
    for conflict in &outcome.conflicts_resolved {
        let _ = writeln!(out, "- conflict {conflict}");
    }
    out
}
