//! One-hop color propagation.
//!
//! After a user recolors a node, each of its declared neighbors is visited
//! once, in declaration order:
//! - white neighbors resolve to the strict plurality color of their own
//!   neighbors, or to yellow when the top count is shared;
//! - gray neighbors take the changed node's influence color;
//! - any other color is left alone.
//!
//! Recolors made during the pass are visible to later votes in the same
//! pass, but never trigger a further hop.

use std::collections::BTreeMap;

use lognet_core::{Color, NodeId, Recolor, RecolorCause};
use lognet_graph::GraphStore;

/// Outcome of a plurality vote over a node's neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// One color holds the strict maximum count.
    Winner(Color),
    /// Two or more colors share the maximum, or there was nothing to count.
    Tie,
}

impl Vote {
    pub fn color(self) -> Color {
        match self {
            Vote::Winner(c) => c,
            Vote::Tie => Color::AMBIGUOUS,
        }
    }

    fn cause(self) -> RecolorCause {
        match self {
            Vote::Winner(_) => RecolorCause::Plurality,
            Vote::Tie => RecolorCause::Tie,
        }
    }
}

/// Count the colors of `id`'s declared neighbors and pick the strict plurality.
///
/// Connections that do not resolve to a node are skipped.
pub fn plurality_vote(graph: &GraphStore, id: &NodeId) -> Vote {
    let mut counts: BTreeMap<Color, usize> = BTreeMap::new();
    for neighbor in graph.connections(id).unwrap_or_default() {
        if let Some(color) = graph.color_of(neighbor) {
            *counts.entry(color).or_default() += 1;
        }
    }

    let Some(&max) = counts.values().max() else {
        return Vote::Tie;
    };

    let mut leaders = counts.iter().filter(|(_, &n)| n == max).map(|(&c, _)| c);
    match (leaders.next(), leaders.next()) {
        (Some(color), None) => Vote::Winner(color),
        _ => Vote::Tie,
    }
}

/// Apply the propagation rule around `changed`, whose color is already `new_color`.
///
/// Returns the neighbor recolors in the order they were applied. Neighbors
/// whose computed color equals their current one are not reported.
pub fn propagate(graph: &mut GraphStore, changed: &NodeId, new_color: Color) -> Vec<Recolor> {
    let Some(influence) = new_color.influence() else {
        return Vec::new();
    };

    let neighbors: Vec<NodeId> = graph.connections(changed).unwrap_or_default().to_vec();
    let mut recolors = Vec::new();

    for neighbor in &neighbors {
        let Some(current) = graph.color_of(neighbor) else {
            continue;
        };

        let (next, cause) = match current {
            Color::White => {
                let vote = plurality_vote(graph, neighbor);
                (vote.color(), vote.cause())
            }
            Color::Gray => (influence, RecolorCause::Influence),
            _ => continue,
        };

        if next == current {
            continue;
        }

        // The neighbor was resolved from the graph just above.
        if graph.set_color(neighbor, next).is_ok() {
            tracing::debug!(
                node_id = %neighbor,
                from = %current,
                to = %next,
                ?cause,
                "Neighbor recolored"
            );
            recolors.push(Recolor {
                node_id: neighbor.clone(),
                from: current,
                to: next,
                cause,
            });
        }
    }

    recolors
}
