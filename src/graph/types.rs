use serde::Serialize;

/// Options for graph traversal
#[derive(Debug, Clone, Default)]
pub struct TraverseOptions {
    /// Maximum nodes to visit (`None` = unbounded)
    pub max_nodes: Option<usize>,
}

/// Complete traversal result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal<V> {
    /// Nodes in the order they were first visited
    pub order: Vec<V>,
    /// Whether a limit stopped the traversal before the reachable set was
    /// exhausted
    pub truncated: bool,
}

/// Whether the visit budget is spent for the given output length
pub(crate) fn limit_reached(visited: usize, opts: &TraverseOptions) -> bool {
    opts.max_nodes.is_some_and(|max| visited >= max)
}
