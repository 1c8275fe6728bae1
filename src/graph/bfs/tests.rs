use crate::graph::types::TraverseOptions;
use crate::graph::Graph;

/// Diamond-with-tail graph from the classic teaching example:
///
/// ```text
///   A
///  / \
/// B   C
/// |   |
/// D---E
/// ```
fn letter_graph() -> Graph<char> {
    let mut graph = Graph::new();
    graph.add_edge('A', 'B');
    graph.add_edge('A', 'C');
    graph.add_edge('B', 'D');
    graph.add_edge('C', 'E');
    graph.add_edge('D', 'E');
    graph
}

#[test]
fn test_bfs_visits_level_by_level() {
    let graph = letter_graph();
    assert_eq!(graph.bfs(&'A'), vec!['A', 'B', 'C', 'D', 'E']);
}

#[test]
fn test_bfs_from_interior_node() {
    let graph = letter_graph();
    assert_eq!(graph.bfs(&'C'), vec!['C', 'A', 'E', 'B', 'D']);
}

#[test]
fn test_bfs_unknown_start_yields_singleton() {
    let graph = letter_graph();
    assert_eq!(graph.bfs(&'Z'), vec!['Z']);

    let empty: Graph<char> = Graph::new();
    assert_eq!(empty.bfs(&'A'), vec!['A']);
}

#[test]
fn test_bfs_visits_reachable_set_exactly_once() {
    // Triangle cycle plus a separate component.
    let mut graph = Graph::new();
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(3, 1);
    graph.add_edge(10, 11);

    let order = graph.bfs(&1);
    let mut sorted = order.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), order.len(), "no node visited twice");
    assert_eq!(sorted, vec![1, 2, 3], "exactly the reachable component");
}

#[test]
fn test_bfs_self_loop_visited_once() {
    let mut graph = Graph::new();
    graph.add_edge('A', 'A');
    graph.add_edge('A', 'B');

    assert_eq!(graph.bfs(&'A'), vec!['A', 'B']);
}

#[test]
fn test_bfs_duplicate_edges_do_not_repeat_nodes() {
    let mut graph = Graph::new();
    graph.add_edge('A', 'B');
    graph.add_edge('A', 'B');
    graph.add_edge('B', 'C');

    assert_eq!(graph.bfs(&'A'), vec!['A', 'B', 'C']);
}

#[test]
fn test_bfs_with_max_nodes_truncates() {
    let graph = letter_graph();
    let opts = TraverseOptions { max_nodes: Some(2) };

    let result = graph.bfs_with(&'A', &opts);
    assert_eq!(result.order, vec!['A', 'B']);
    assert!(result.truncated);
}

#[test]
fn test_bfs_with_exact_budget_is_not_truncated() {
    let graph = letter_graph();
    let opts = TraverseOptions { max_nodes: Some(5) };

    let result = graph.bfs_with(&'A', &opts);
    assert_eq!(result.order, vec!['A', 'B', 'C', 'D', 'E']);
    assert!(!result.truncated);
}

#[test]
fn test_bfs_default_options_match_plain_bfs() {
    let graph = letter_graph();
    let result = graph.bfs_with(&'A', &TraverseOptions::default());
    assert_eq!(result.order, graph.bfs(&'A'));
    assert!(!result.truncated);
}
