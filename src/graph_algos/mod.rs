pub mod dijkstra;
mod distance;
mod shortest_path;
mod tables;

pub use dijkstra::compute;
pub use distance::Distance;
pub use tables::ShortestPaths;

use crate::collections::FxIndexMap;

/// Cumulative path cost - wider than `graph::Weight` so sums of `u64` weights never overflow
pub type Cost = u128;

/// Type alias for the node map built by the traversal
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
