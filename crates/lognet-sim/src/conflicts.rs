//! Conflict detection.
//!
//! A conflict is a declared connection whose endpoints hold the same firm
//! color. The set is always recomputed from scratch over the whole graph.

use std::collections::BTreeSet;

use lognet_core::Conflict;
use lognet_graph::GraphStore;

/// Every conflicting pair in the graph, normalized and ordered by id.
///
/// A pair declared from both sides yields a single entry.
pub fn detect(graph: &GraphStore) -> BTreeSet<Conflict> {
    let mut conflicts = BTreeSet::new();
    for node in graph.nodes().iter().filter(|n| n.color.is_firm()) {
        for target in &node.connections {
            if graph.color_of(target) == Some(node.color) {
                conflicts.insert(Conflict::new(node.id.clone(), target.clone(), node.color));
            }
        }
    }
    conflicts
}

/// Difference between two conflict sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictDiff {
    /// Present now, absent before.
    pub introduced: Vec<Conflict>,
    /// Present before, absent now.
    pub resolved: Vec<Conflict>,
}

impl ConflictDiff {
    pub fn between(before: &BTreeSet<Conflict>, after: &BTreeSet<Conflict>) -> Self {
        Self {
            introduced: after.difference(before).cloned().collect(),
            resolved: before.difference(after).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.introduced.is_empty() && self.resolved.is_empty()
    }
}

/// Display labels (`X ↔ Y`) in set order.
pub fn labels(conflicts: &BTreeSet<Conflict>) -> Vec<String> {
    conflicts.iter().map(Conflict::label).collect()
}

#[cfg(test)]
mod tests {
    use lognet_core::{Color, Node, NodeId};

    use super::*;

    #[test]
    fn test_seed_has_no_conflicts() {
        assert!(detect(&GraphStore::seeded()).is_empty());
    }

    #[test]
    fn test_symmetric_pair_reported_once() {
        let g = GraphStore::from_nodes(vec![
            Node::new("B", Color::Blue, &["A"]),
            Node::new("A", Color::Blue, &["B"]),
        ])
        .unwrap();
        let conflicts = detect(&g);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(labels(&conflicts), vec!["A ↔ B".to_string()]);
    }

    #[test]
    fn test_one_sided_connection_still_conflicts() {
        let g = GraphStore::from_nodes(vec![
            Node::new("A", Color::Red, &[]),
            Node::new("B", Color::Red, &["A"]),
        ])
        .unwrap();
        assert_eq!(labels(&detect(&g)), vec!["A ↔ B".to_string()]);
    }

    #[test]
    fn test_non_firm_colors_never_conflict() {
        let g = GraphStore::from_nodes(vec![
            Node::new("A", Color::Green, &["B"]),
            Node::new("B", Color::Green, &["A"]),
        ])
        .unwrap();
        assert!(detect(&g).is_empty());
    }

    #[test]
    fn test_different_firm_colors_do_not_conflict() {
        let g = GraphStore::from_nodes(vec![
            Node::new("A", Color::Blue, &["B"]),
            Node::new("B", Color::Red, &["A"]),
        ])
        .unwrap();
        assert!(detect(&g).is_empty());
    }

    #[test]
    fn test_detect_is_idempotent() {
        let mut g = GraphStore::seeded();
        g.set_color(&NodeId::from("B"), Color::Blue).unwrap();
        g.set_color(&NodeId::from("O"), Color::Blue).unwrap();
        let first = detect(&g);
        let second = detect(&g);
        assert_eq!(first, second);
        assert_eq!(
            labels(&first),
            vec!["A ↔ B".to_string(), "O ↔ P".to_string()]
        );
    }

    #[test]
    fn test_diff() {
        let ab = Conflict::new("A".into(), "B".into(), Color::Blue);
        let cd = Conflict::new("C".into(), "D".into(), Color::Red);
        let before: BTreeSet<Conflict> = [ab.clone()].into_iter().collect();
        let after: BTreeSet<Conflict> = [cd.clone()].into_iter().collect();

        let diff = ConflictDiff::between(&before, &after);
        assert_eq!(diff.introduced, vec![cd]);
        assert_eq!(diff.resolved, vec![ab]);
        assert!(ConflictDiff::between(&after, &after).is_empty());
    }
}
