use crate::errors::{GraphError, Result};
use crate::graph::GraphStore;
use super::shortest_path::{shortest_path, NO_PARENT};
use super::{Cost, Distance, GraphNodeMap, ShortestPaths};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::{SaturatingAdd, Zero};
use indexmap::map::Entry::{Occupied, Vacant};



/// Single-source shortest paths over a `GraphStore`
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Every known node gets a distance and a path. Unreachable nodes get
/// `Distance::Infinite` and an empty path.
/// Edge weights are summed as `Cost`, wide enough that no path over `u64` weights overflows.
pub fn compute(graph: &GraphStore, start: &str) -> Result<ShortestPaths> {
    if !graph.contains(start) {
        tracing::warn!(start, "query for unknown start node");
        return Err(GraphError::UnknownStartNode(start.to_string()));
    }

    let node_map = dijkstra_nodes_full(start, |node: &&str| {
        graph
            .neighbors(node)
            .map(|list| list.iter().map(|(neighbor, weight)| (neighbor.as_str(), Cost::from(*weight))))
    })
    .inspect_err(|e| tracing::error!(error = %e, start, "graph store is inconsistent"))?;

    let mut distances = crate::collections::FxIndexMap::default();
    let mut paths = crate::collections::FxIndexMap::default();

    for node in graph.nodes() {
        match node_map.get_full(node.as_str()) {
            Some((index, _, &(_, cost))) => {
                let path = shortest_path(&node_map, index)?;
                distances.insert(node.clone(), Distance::Finite(cost));
                paths.insert(node.clone(), path.into_iter().map(String::from).collect());
            }
            None => {
                distances.insert(node.clone(), Distance::Infinite);
                paths.insert(node.clone(), Vec::new());
            }
        }
    }

    tracing::debug!(
        start,
        nodes = graph.node_count(),
        reachable = node_map.len(),
        "shortest paths computed"
    );

    Ok(ShortestPaths::new(start.to_string(), distances, paths))
}


/// Returns a full map of the graph, includes all reachable nodes and costs
/// The neighbor function fails when asked about a node it does not know,
/// that error aborts the traversal.
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, mut neighbors: NN) -> Result<GraphNodeMap<N, C>>
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: FnMut(&N) -> Result<IT>, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug + SaturatingAdd,
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest, FrontierEntry reverses that
    // We store the cost from the starting node
    let mut frontier: BinaryHeap<FrontierEntry<N, C>> = BinaryHeap::new();

    // Reached nodes
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to NO_PARENT
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start.clone(), (NO_PARENT, Zero::zero())).0;
    frontier.push(FrontierEntry {
        node: start,
        index: start_index,
        cost: Zero::zero(),
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(FrontierEntry { index, cost, .. }) = frontier.pop() {

        // fetch current best cost for node
        let Some((node, &(_, best))) = nodes_map.get_index(index) else {
            return Err(GraphError::UnknownNode(format!("#{index}")));
        };

        // A better path to this node was already found after this entry was pushed
        if cost > best {
            tracing::trace!(?node, ?cost, ?best, "skipping stale frontier entry");
            continue;
        }

        let adjacent = neighbors(node)?;

        for (neighbor, edge_cost) in adjacent {

            let new_cost = best.saturating_add(&edge_cost);

            let (neighbor, neighbor_index) = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // First time we're seeing this neighbor
                    let found = (e.key().clone(), e.index());
                    e.insert((index, new_cost));
                    found
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        // Strictly better path to this neighbor
                        e.insert((index, new_cost));
                        (e.key().clone(), e.index())
                    } else {
                        continue;
                    }
                }
            };

            frontier.push(FrontierEntry {
                node: neighbor,
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    Ok(nodes_map)
}


/// Frontier entry keyed by (cost, node)
/// - smallest cost pops first, equal costs pop in node order
/// - index points into the node map so the best cost can be looked up
#[derive(Debug)]
struct FrontierEntry<N, T> {
    node: N,
    index: usize,
    cost: T,
}

impl<N: Ord, T: Ord> Ord for FrontierEntry<N, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}
impl<N: Ord, T: Ord> PartialOrd for FrontierEntry<N, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: PartialEq, T: PartialEq> PartialEq for FrontierEntry<N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}
impl<N: Eq, T: Eq> Eq for FrontierEntry<N, T> {}
