use crate::errors::{GraphError, Result};
use super::GraphNodeMap;

/// Construct the shortest path from the start node to the node at `goal_index`
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        if path.len() > node_map.len() {
            return Err(GraphError::UnknownNode(format!("cycle in parent chain at #{current_index}")));
        }
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return Err(GraphError::UnknownNode(format!("#{current_index}"))),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}

/// Parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;
