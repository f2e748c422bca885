//! Labelled nodes of the collaboration graph
//!
//! A node's identifier is its 1-based position in the node list, so the
//! registry is the single source of truth for both the id range used by the
//! adjacency model and the id-to-label lookup.

use super::NodeId;
use serde::{Deserialize, Serialize};

/// A node (author) in the collaboration graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// 1-based ordinal identifier
    pub id: NodeId,
    /// Display label (author name)
    pub label: String,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Node {
            id,
            label: label.into(),
        }
    }
}

/// Ordered node list; the id of each node is its position + 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from labels in id order
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for label in labels {
            registry.push(label);
        }
        registry
    }

    /// Append a node and return its assigned id
    pub fn push(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.nodes.len() as NodeId + 1;
        self.nodes.push(Node::new(id, label));
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id == 0 {
            return None;
        }
        self.nodes.get(id as usize - 1)
    }

    /// Label of `id`, if the id is registered
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.label.as_str())
    }

    /// Iterate nodes in id order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut registry = NodeRegistry::new();
        assert_eq!(registry.push("Erdos"), 1);
        assert_eq!(registry.push("Renyi"), 2);

        assert_eq!(registry.label(1), Some("Erdos"));
        assert_eq!(registry.label(2), Some("Renyi"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_out_of_range_ids() {
        let registry = NodeRegistry::from_labels(["A", "B"]);
        assert!(registry.get(0).is_none());
        assert!(registry.get(3).is_none());
        assert!(!registry.contains(3));
        assert!(registry.contains(2));
    }

    #[test]
    fn test_iter_in_id_order() {
        let registry = NodeRegistry::from_labels(vec!["A", "B", "C"]);
        let ids: Vec<NodeId> = registry.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
