//! Undirected adjacency-list graph and its traversal operations
//!
//! Provides the graph structure and algorithms for walking it:
//! - BFS traversal over a FIFO frontier
//! - DFS traversal in recursive and explicit-stack forms
//! - Per-call traversal options with truncation reporting

pub mod bfs;
pub mod dfs;
pub mod types;

pub use bfs::bfs_traverse;
pub use dfs::{dfs_iterative_traverse, dfs_recursive_traverse};
pub use types::{Traversal, TraverseOptions};

use std::collections::HashMap;
use std::hash::Hash;

/// Undirected graph keyed by `V`, stored as adjacency lists.
///
/// Neighbor order within a list is `add_edge` insertion order; the traversal
/// ordering contracts build on that. Symmetry invariant: `dest` appears in
/// `src`'s list exactly as many times as `src` appears in `dest`'s list.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether `key` has been registered by some `add_edge` call
    pub fn contains_node(&self, key: &V) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Neighbors of `key` in insertion order, if the node is known
    pub fn neighbors(&self, key: &V) -> Option<&[V]> {
        self.adjacency.get(key).map(Vec::as_slice)
    }

    /// Add an undirected edge between `src` and `dest`.
    ///
    /// Unseen endpoints are registered with an empty neighbor list first,
    /// so the call never fails. Nothing is deduplicated: repeating an edge
    /// appends to both lists again, and `src == dest` lands twice in the
    /// same list.
    pub fn add_edge(&mut self, src: V, dest: V) {
        self.adjacency
            .entry(src.clone())
            .or_default()
            .push(dest.clone());
        self.adjacency.entry(dest).or_default().push(src);
        tracing::trace!(nodes = self.adjacency.len(), "graph_add_edge");
    }

    /// Nodes reachable from `start` in breadth-first order
    pub fn bfs(&self, start: &V) -> Vec<V> {
        bfs::bfs_traverse(self, start, &TraverseOptions::default()).order
    }

    /// Breadth-first traversal with per-call options
    pub fn bfs_with(&self, start: &V, opts: &TraverseOptions) -> Traversal<V> {
        bfs::bfs_traverse(self, start, opts)
    }

    /// Nodes reachable from `start` in depth-first order, by recursion
    pub fn dfs_recursive(&self, start: &V) -> Vec<V> {
        dfs::dfs_recursive_traverse(self, start, &TraverseOptions::default()).order
    }

    /// Recursive depth-first traversal with per-call options
    pub fn dfs_recursive_with(&self, start: &V, opts: &TraverseOptions) -> Traversal<V> {
        dfs::dfs_recursive_traverse(self, start, opts)
    }

    /// Nodes reachable from `start` in depth-first order, by explicit stack
    pub fn dfs_iterative(&self, start: &V) -> Vec<V> {
        dfs::dfs_iterative_traverse(self, start, &TraverseOptions::default()).order
    }

    /// Explicit-stack depth-first traversal with per-call options
    pub fn dfs_iterative_with(&self, start: &V, opts: &TraverseOptions) -> Traversal<V> {
        dfs::dfs_iterative_traverse(self, start, opts)
    }
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Graph::new()
    }
}
