use crate::errors::Result;
use crate::graph::{parse_weight, Edge, GraphStore, NodeId};
use crate::graph_algos::{compute, ShortestPaths};


/// One user's working graph
/// Owns the graph store for as long as the session lives. Each session is independent.
#[derive(Debug, Default)]
pub struct Session {
    graph: GraphStore,
}

impl Session {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge from raw user input
    /// Returns the accepted edge, the graph is left untouched on error
    pub fn add_edge(&mut self, a: &str, b: &str, weight: &str) -> Result<Edge> {
        let weight = parse_weight(weight)
            .inspect_err(|e| tracing::warn!(a, b, error = %e, "edge rejected"))?;

        self.graph.add_edge(a, b, weight);

        Ok(Edge {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        })
    }

    pub fn add_node(&mut self, node: &str) {
        self.graph.add_node(node);
    }

    /// Shortest distances and paths from `start` to every known node
    pub fn query(&self, start: &str) -> Result<ShortestPaths> {
        tracing::debug!(start, "query");
        compute(&self.graph, start)
    }

    /// Accepted edges in entry order
    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.graph.nodes()
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }
}
