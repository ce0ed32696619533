use crate::collections::FxIndexMap;
use crate::graph::NodeId;
use super::Distance;

use serde::Serialize;


/// Result of a single-source query
/// Distance and path tables cover every node known to the graph at query time,
/// in the graph's node order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortestPaths {
    start: NodeId,
    distances: FxIndexMap<NodeId, Distance>,
    paths: FxIndexMap<NodeId, Vec<NodeId>>,
}

impl ShortestPaths {

    pub(crate) fn new(
        start: NodeId,
        distances: FxIndexMap<NodeId, Distance>,
        paths: FxIndexMap<NodeId, Vec<NodeId>>,
    ) -> Self {
        Self { start, distances, paths }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn distances(&self) -> &FxIndexMap<NodeId, Distance> {
        &self.distances
    }

    pub fn paths(&self) -> &FxIndexMap<NodeId, Vec<NodeId>> {
        &self.paths
    }

    pub fn distance(&self, node: &str) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Path from the start to `node`, empty when `node` is unreachable
    pub fn path(&self, node: &str) -> Option<&[NodeId]> {
        self.paths.get(node).map(Vec::as_slice)
    }

    /// Nodes with a finite distance, including the start
    pub fn reachable(&self) -> impl Iterator<Item = (&NodeId, Distance)> {
        self.distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(n, d)| (n, *d))
    }

    /// Consecutive node pairs along every non-trivial path
    pub fn path_steps(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.paths
            .values()
            .flat_map(|path| path.windows(2).map(|pair| (&pair[0], &pair[1])))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShortestPaths {
        let mut distances = FxIndexMap::default();
        distances.insert("A".to_string(), Distance::Finite(0));
        distances.insert("B".to_string(), Distance::Finite(2));
        distances.insert("Z".to_string(), Distance::Infinite);

        let mut paths = FxIndexMap::default();
        paths.insert("A".to_string(), vec!["A".to_string()]);
        paths.insert("B".to_string(), vec!["A".to_string(), "C".to_string(), "B".to_string()]);
        paths.insert("Z".to_string(), vec![]);

        ShortestPaths::new("A".to_string(), distances, paths)
    }

    #[test]
    fn test_lookups() {
        let table = sample();
        assert_eq!(table.start(), "A");
        assert_eq!(table.distance("B"), Some(Distance::Finite(2)));
        assert_eq!(table.distance("Q"), None);
        assert_eq!(table.path("Z"), Some(&[][..]));

        let reachable: Vec<_> = table.reachable().map(|(n, _)| n.as_str()).collect();
        assert_eq!(reachable, vec!["A", "B"]);
    }

    #[test]
    fn test_path_steps() {
        let table = sample();
        let steps: Vec<_> = table.path_steps().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        assert_eq!(steps, vec![("A", "C"), ("C", "B")]);
    }

    #[test]
    fn test_serializes_infinity_as_string() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["start"], "A");
        assert_eq!(json["distances"]["B"], 2);
        assert_eq!(json["distances"]["Z"], "Infinity");
        assert_eq!(json["paths"]["B"], serde_json::json!(["A", "C", "B"]));
    }
}
