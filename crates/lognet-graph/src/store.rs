//! In-memory graph store.
//!
//! Nodes are kept in a dense vector (seed order, which is also display
//! order) with a map from node id to index. Topology is fixed once the
//! store is built; only colors change afterwards.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use lognet_core::{Color, Node, NodeId};

use crate::error::{GraphError, Result};

/// The colored graph owned by a single simulator.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// All nodes, indexed by dense index.
    nodes: Vec<Node>,
    /// Map from node id → dense index.
    node_index: HashMap<NodeId, usize>,
}

/// Point-in-time copy of the graph handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
}

impl GraphSnapshot {
    pub fn color_of(&self, id: &str) -> Option<Color> {
        self.nodes.iter().find(|n| n.id.as_str() == id).map(|n| n.color)
    }
}

impl GraphStore {
    /// Build a store from a node list.
    ///
    /// Rejects duplicate ids and connections that name a node not in the
    /// list. One-sided connections are allowed.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(GraphError::EmptySeed);
        }

        let mut node_index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNode {
                    node_id: node.id.to_string(),
                });
            }
        }

        let mut declared: HashSet<(&NodeId, &NodeId)> = HashSet::new();
        for node in &nodes {
            for target in &node.connections {
                if !node_index.contains_key(target) {
                    return Err(GraphError::DanglingConnection {
                        node_id: node.id.to_string(),
                        target: target.to_string(),
                    });
                }
                declared.insert((&node.id, target));
            }
        }

        for (from, to) in &declared {
            if !declared.contains(&(*to, *from)) {
                tracing::debug!(from = %from, to = %to, "One-sided connection");
            }
        }

        Ok(Self { nodes, node_index })
    }

    /// Store holding the built-in sixteen-node seed.
    pub fn seeded() -> Self {
        Self::from_nodes(crate::seed::seed_nodes()).expect("built-in seed is valid")
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn color_of(&self, id: &NodeId) -> Option<Color> {
        self.get_node(id).map(|n| n.color)
    }

    /// Declared connections of a node, in declaration order.
    pub fn connections(&self, id: &NodeId) -> Option<&[NodeId]> {
        self.get_node(id).map(|n| n.connections.as_slice())
    }

    /// Set a node's color and return the color it had before.
    pub fn set_color(&mut self, id: &NodeId, color: Color) -> Result<Color> {
        let idx = *self
            .node_index
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode {
                node_id: id.to_string(),
            })?;
        let previous = self.nodes[idx].color;
        self.nodes[idx].color = color;
        Ok(previous)
    }

    /// All nodes in seed order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of declared (directed) connections in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.connections.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = GraphStore::seeded();
        assert_eq!(store.node_count(), 16);
        assert_eq!(store.color_of(&"A".into()), Some(Color::Blue));
        assert_eq!(store.color_of(&"E".into()), Some(Color::White));
        assert_eq!(store.color_of(&"P".into()), Some(Color::Blue));
        assert_eq!(
            store.connections(&"F".into()).unwrap(),
            &[
                NodeId::from("B"),
                NodeId::from("E"),
                NodeId::from("G"),
                NodeId::from("J")
            ]
        );
    }

    #[test]
    fn test_set_color_returns_previous() {
        let mut store = GraphStore::seeded();
        let previous = store.set_color(&"B".into(), Color::Purple).unwrap();
        assert_eq!(previous, Color::Gray);
        assert_eq!(store.color_of(&"B".into()), Some(Color::Purple));
    }

    #[test]
    fn test_set_color_unknown_node() {
        let mut store = GraphStore::seeded();
        let before = store.snapshot();
        let result = store.set_color(&"Z".into(), Color::Red);
        assert!(matches!(result, Err(GraphError::UnknownNode { ref node_id }) if node_id == "Z"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_get_node_absent() {
        let store = GraphStore::seeded();
        assert!(store.get_node(&"Q".into()).is_none());
        assert!(!store.contains(&"Q".into()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let nodes = vec![
            Node::new("A", Color::Gray, &[]),
            Node::new("A", Color::Red, &[]),
        ];
        let result = GraphStore::from_nodes(nodes);
        assert!(matches!(result, Err(GraphError::DuplicateNode { .. })));
    }

    #[test]
    fn test_dangling_connection_rejected() {
        let nodes = vec![Node::new("A", Color::Gray, &["B"])];
        let result = GraphStore::from_nodes(nodes);
        assert!(matches!(
            result,
            Err(GraphError::DanglingConnection { ref target, .. }) if target == "B"
        ));
    }

    #[test]
    fn test_one_sided_connection_allowed() {
        let nodes = vec![
            Node::new("A", Color::Blue, &["B"]),
            Node::new("B", Color::Blue, &[]),
        ];
        let store = GraphStore::from_nodes(nodes).unwrap();
        assert_eq!(store.edge_count(), 1);
        assert!(store.connections(&"B".into()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_seed_rejected() {
        assert!(matches!(
            GraphStore::from_nodes(vec![]),
            Err(GraphError::EmptySeed)
        ));
    }

    #[test]
    fn test_snapshot_preserves_seed_order() {
        let store = GraphStore::seeded();
        let ids: String = store
            .snapshot()
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, "ABCDEFGHIJKLMNOP");
        assert_eq!(store.snapshot().color_of("C"), Some(Color::Red));
    }
}
