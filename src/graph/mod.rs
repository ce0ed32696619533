mod weight;

pub use weight::{parse_weight, Weight};

use crate::collections::FxIndexMap;
use crate::errors::{GraphError, Result};


/// Node identifier - opaque user label, compared by exact string match
pub type NodeId = String;


/// A single undirected edge as it was inserted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: Weight,
}


/// Undirected weighted multigraph built one edge at a time
///
/// Every node maps to its neighbor list in insertion order. Parallel edges are kept
/// as separate entries and self-loops are allowed. Nodes and edges are never removed.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
    adjacency: FxIndexMap<NodeId, Vec<(NodeId, Weight)>>,
    edges: Vec<Edge>, // each undirected edge once, insertion order
}

impl GraphStore {

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge
    /// Missing endpoints are created, `(b, weight)` is appended to `a` and `(a, weight)` to `b`
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) {
        self.adjacency.entry(a.to_string()).or_default().push((b.to_string(), weight));
        self.adjacency.entry(b.to_string()).or_default().push((a.to_string(), weight));

        self.edges.push(Edge {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        });

        tracing::debug!(a, b, weight, "edge added");
    }

    /// Insert an undirected edge from raw user text
    /// The weight is validated before the graph is touched
    pub fn add_edge_str(&mut self, a: &str, b: &str, weight: &str) -> Result<()> {
        let weight = parse_weight(weight)?;
        self.add_edge(a, b, weight);
        Ok(())
    }

    /// Register a node with no edges, no-op if it already exists
    pub fn add_node(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), Vec::new());
            tracing::debug!(node, "node added");
        }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All known nodes, in the order they were first seen
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Neighbors of `node` with edge weights, in insertion order
    pub fn neighbors(&self, node: &str) -> Result<&[(NodeId, Weight)]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode(node.to_string()))
    }

    /// Every inserted edge once, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn owned(list: &[(&str, Weight)]) -> Vec<(NodeId, Weight)> {
        list.iter().map(|(n, w)| (n.to_string(), *w)).collect()
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", 4);

        assert_eq!(graph.neighbors("A").unwrap(), owned(&[("B", 4)]).as_slice());
        assert_eq!(graph.neighbors("B").unwrap(), owned(&[("A", 4)]).as_slice());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", 4);
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "A", 4);

        assert_eq!(graph.neighbors("A").unwrap(), owned(&[("B", 4), ("B", 1), ("B", 4)]).as_slice());
        assert_eq!(graph.neighbors("B").unwrap(), owned(&[("A", 4), ("A", 1), ("A", 4)]).as_slice());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_self_loop_adds_two_entries() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "A", 2);

        assert_eq!(graph.neighbors("A").unwrap(), owned(&[("A", 2), ("A", 2)]).as_slice());
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_node_ids_are_exact_match() {
        let mut graph = GraphStore::new();
        graph.add_edge("a", "A ", 1);

        assert!(graph.contains("a"));
        assert!(graph.contains("A "));
        assert!(!graph.contains("A"));
    }

    #[test]
    fn test_nodes_keep_first_seen_order() {
        let mut graph = GraphStore::new();
        graph.add_edge("C", "A", 1);
        graph.add_edge("B", "C", 1);
        graph.add_node("D");
        graph.add_node("A");

        let nodes: Vec<_> = graph.nodes().cloned().collect();
        assert_eq!(nodes, vec!["C", "A", "B", "D"]);
        assert!(graph.neighbors("D").unwrap().is_empty());
    }

    #[test]
    fn test_add_edge_str_rejects_before_mutation() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", 1);

        let err = graph.add_edge_str("A", "C", "-2").unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
        assert!(!graph.contains("C"));
        assert_eq!(graph.neighbors("A").unwrap().len(), 1);
        assert_eq!(graph.edge_count(), 1);

        graph.add_edge_str("A", "C", "3").unwrap();
        assert_eq!(graph.neighbors("C").unwrap(), owned(&[("A", 3)]).as_slice());
    }

    #[test]
    fn test_neighbors_of_unknown_node() {
        let graph = GraphStore::new();
        assert!(graph.is_empty());
        assert_eq!(graph.neighbors("X"), Err(GraphError::UnknownNode("X".to_string())));
    }
}
