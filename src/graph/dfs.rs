use crate::graph::types::{limit_reached, Traversal, TraverseOptions};
use crate::graph::Graph;
use std::collections::HashSet;
use std::hash::Hash;

/// Perform DFS traversal from a start node using call-stack recursion.
///
/// Visiting a node marks it, appends it to the output order, and recurses
/// into each not-yet-visited neighbor in adjacency order. Recursion depth
/// equals the depth of the traversal path, so very deep graphs can exhaust
/// the call stack; [`dfs_iterative_traverse`] produces the same order with
/// bounded auxiliary memory. A start key the graph has never seen yields
/// the singleton order `[start]`.
#[tracing::instrument(skip_all, fields(max_nodes = ?opts.max_nodes))]
pub fn dfs_recursive_traverse<V>(
    graph: &Graph<V>,
    start: &V,
    opts: &TraverseOptions,
) -> Traversal<V>
where
    V: Eq + Hash + Clone,
{
    struct Walk<'g, V> {
        graph: &'g Graph<V>,
        opts: &'g TraverseOptions,
        visited: HashSet<V>,
        order: Vec<V>,
        truncated: bool,
    }

    impl<V: Eq + Hash + Clone> Walk<'_, V> {
        fn visit(&mut self, node: &V) {
            if limit_reached(self.order.len(), self.opts) {
                self.truncated = true;
                return;
            }
            self.visited.insert(node.clone());
            self.order.push(node.clone());
            for neighbor in self.graph.neighbors(node).unwrap_or(&[]) {
                if !self.visited.contains(neighbor) {
                    self.visit(neighbor);
                }
            }
        }
    }

    let mut walk = Walk {
        graph,
        opts,
        visited: HashSet::new(),
        order: Vec::new(),
        truncated: false,
    };
    walk.visit(start);

    tracing::debug!(visited = walk.order.len(), truncated = walk.truncated, "dfs_complete");
    Traversal {
        order: walk.order,
        truncated: walk.truncated,
    }
}

/// Perform DFS traversal from a start node using an explicit LIFO stack.
///
/// Popping an unvisited node marks it, appends it to the output order, and
/// pushes its not-yet-visited neighbors in reverse adjacency order; the LIFO
/// pops them back in insertion order, so for any graph and start the output
/// matches [`dfs_recursive_traverse`]. That reverse-push rule is a deliberate
/// contract, pinned by the equivalence tests, not an incidental detail.
#[tracing::instrument(skip_all, fields(max_nodes = ?opts.max_nodes))]
pub fn dfs_iterative_traverse<V>(
    graph: &Graph<V>,
    start: &V,
    opts: &TraverseOptions,
) -> Traversal<V>
where
    V: Eq + Hash + Clone,
{
    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<V> = vec![start.clone()];
    let mut order: Vec<V> = Vec::new();
    let mut truncated = false;

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        if limit_reached(order.len(), opts) {
            truncated = true;
            break;
        }

        visited.insert(node.clone());
        order.push(node.clone());
        for neighbor in graph.neighbors(&node).unwrap_or(&[]).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
    }

    tracing::debug!(visited = order.len(), truncated, "dfs_complete");
    Traversal { order, truncated }
}
