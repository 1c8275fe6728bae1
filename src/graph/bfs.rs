use crate::graph::types::{limit_reached, Traversal, TraverseOptions};
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Perform BFS traversal from a start node.
///
/// The frontier is a FIFO queue seeded with `start`. Dequeuing a node marks
/// it visited, appends it to the output order, and enqueues its
/// not-yet-visited neighbors in adjacency order, so the output is level by
/// level within the start's connected component. A start key the graph has
/// never seen yields the singleton order `[start]`.
#[tracing::instrument(skip_all, fields(max_nodes = ?opts.max_nodes))]
pub fn bfs_traverse<V>(graph: &Graph<V>, start: &V, opts: &TraverseOptions) -> Traversal<V>
where
    V: Eq + Hash + Clone,
{
    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();
    let mut order: Vec<V> = Vec::new();
    let mut truncated = false;

    queue.push_back(start.clone());

    while let Some(node) = queue.pop_front() {
        if visited.contains(&node) {
            continue;
        }
        if limit_reached(order.len(), opts) {
            truncated = true;
            break;
        }

        visited.insert(node.clone());
        order.push(node.clone());
        for neighbor in graph.neighbors(&node).unwrap_or(&[]) {
            if !visited.contains(neighbor) {
                queue.push_back(neighbor.clone());
            }
        }
    }

    tracing::debug!(visited = order.len(), truncated, "bfs_complete");
    Traversal { order, truncated }
}

#[cfg(test)]
mod tests;
