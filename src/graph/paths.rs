//! Path finding between two entities.
//!
//! Both searches run on the undirected adjacency: any relationship, in
//! either direction, counts as a connection.
//!
//! Tie-break: neighbors are always expanded in ascending lexicographic ID
//! order. In BFS each node keeps the first parent that discovered it, so
//! among equal-length shortest paths the one found through the smallest
//! IDs at the earliest level wins, independent of input ordering.

use std::collections::VecDeque;

use super::extraction::build_network_graph;
use super::models::{Edge, NetworkGraph, Node, PathResult};

/// Shortest hop path between two node IDs, or `None` when either ID is
/// unknown or the nodes are not connected.
pub fn find_shortest_path(
    source_id: &str,
    target_id: &str,
    nodes: &[Node],
    edges: &[Edge],
) -> Option<PathResult> {
    let graph = build_network_graph(nodes, edges);
    shortest_path(&graph, source_id, target_id)
}

/// Every simple path of at most `max_depth` hops (clamped to at least 1).
pub fn find_all_paths(
    source_id: &str,
    target_id: &str,
    nodes: &[Node],
    edges: &[Edge],
    max_depth: usize,
) -> Vec<Vec<String>> {
    let graph = build_network_graph(nodes, edges);
    all_paths(&graph, source_id, target_id, max_depth)
}

/// Adjacency re-sorted by neighbor ID.
fn lexicographic_adjacency(graph: &NetworkGraph<'_>) -> Vec<Vec<usize>> {
    graph
        .adjacency
        .iter()
        .map(|neighbors| {
            let mut sorted = neighbors.clone();
            sorted.sort_by(|&a, &b| graph.node(a).id.cmp(&graph.node(b).id));
            sorted
        })
        .collect()
}

fn to_ids(graph: &NetworkGraph<'_>, path: &[usize]) -> Vec<String> {
    path.iter().map(|&i| graph.node(i).id.clone()).collect()
}

/// BFS shortest path on an extracted graph.
pub fn shortest_path(
    graph: &NetworkGraph<'_>,
    source_id: &str,
    target_id: &str,
) -> Option<PathResult> {
    let source = graph.index_of(source_id)?;
    let target = graph.index_of(target_id)?;
    if source == target {
        return Some(PathResult {
            path: vec![graph.node(source).id.clone()],
            distance: 0,
        });
    }

    let adjacency = lexicographic_adjacency(graph);
    let mut parent: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &neighbor in &adjacency[current] {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            parent[neighbor] = Some(current);
            if neighbor == target {
                let mut path = vec![target];
                let mut cursor = target;
                while let Some(p) = parent[cursor] {
                    path.push(p);
                    cursor = p;
                }
                path.reverse();
                return Some(PathResult {
                    distance: path.len() - 1,
                    path: to_ids(graph, &path),
                });
            }
            queue.push_back(neighbor);
        }
    }
    None
}

/// DFS enumeration of simple paths on an extracted graph.
///
/// Paths come out in DFS visitation order; callers sort or truncate.
pub fn all_paths(
    graph: &NetworkGraph<'_>,
    source_id: &str,
    target_id: &str,
    max_depth: usize,
) -> Vec<Vec<String>> {
    let (Some(source), Some(target)) = (graph.index_of(source_id), graph.index_of(target_id))
    else {
        return vec![];
    };
    if source == target {
        return vec![vec![graph.node(source).id.clone()]];
    }

    let max_depth = max_depth.max(1);
    let adjacency = lexicographic_adjacency(graph);
    let mut on_path = vec![false; graph.node_count()];
    let mut path = vec![source];
    let mut result = Vec::new();
    on_path[source] = true;

    // Explicit stack of (node, next neighbor position)
    let mut stack: Vec<(usize, usize)> = vec![(source, 0)];
    while let Some(&(v, pos)) = stack.last() {
        let hops = path.len() - 1;
        if pos >= adjacency[v].len() || hops >= max_depth {
            stack.pop();
            path.pop();
            on_path[v] = false;
            continue;
        }
        if let Some(top) = stack.last_mut() {
            top.1 += 1;
        }

        let w = adjacency[v][pos];
        if on_path[w] {
            continue;
        }
        if w == target {
            path.push(w);
            result.push(to_ids(graph, &path));
            path.pop();
            continue;
        }
        on_path[w] = true;
        path.push(w);
        stack.push((w, 0));
    }

    tracing::debug!(
        "Enumerated {} paths {} -> {} (max depth {})",
        result.len(),
        source_id,
        target_id,
        max_depth
    );
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::models::NodeType;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter()
            .map(|id| Node::new(*id, *id, NodeType::Actor))
            .collect()
    }

    fn links(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs
            .iter()
            .map(|(s, t)| Edge::new(*s, *t, "CONTACTED"))
            .collect()
    }

    fn diamond() -> (Vec<Node>, Vec<Edge>) {
        // s - {m, b} - t, listed so that input order favors m
        (
            nodes(&["s", "m", "b", "t"]),
            links(&[("s", "m"), ("m", "t"), ("s", "b"), ("b", "t")]),
        )
    }

    // --- Shortest path ---

    #[test]
    fn test_shortest_path_chain() {
        let n = nodes(&["A", "B", "C", "D"]);
        let e = links(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let result = find_shortest_path("A", "D", &n, &e).unwrap();
        assert_eq!(result.path, vec!["A", "B", "C", "D"]);
        assert_eq!(result.distance, 3);
    }

    #[test]
    fn test_shortest_path_ignores_direction() {
        let n = nodes(&["A", "B", "C"]);
        let e = links(&[("B", "A"), ("C", "B")]);
        let result = find_shortest_path("A", "C", &n, &e).unwrap();
        assert_eq!(result.distance, 2);
    }

    #[test]
    fn test_shortest_path_tie_break_lexicographic() {
        let (n, e) = diamond();
        let result = find_shortest_path("s", "t", &n, &e).unwrap();
        assert_eq!(result.path, vec!["s", "b", "t"]);
    }

    #[test]
    fn test_shortest_path_symmetric_hop_count() {
        let n = nodes(&["a", "b", "c", "d", "e"]);
        let e = links(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "e"), ("e", "d")]);
        let forward = find_shortest_path("a", "d", &n, &e).unwrap();
        let backward = find_shortest_path("d", "a", &n, &e).unwrap();
        assert_eq!(forward.distance, backward.distance);
        assert_eq!(forward.distance, 2);
    }

    #[test]
    fn test_shortest_path_unreachable_or_unknown() {
        let n = nodes(&["a", "b", "c"]);
        let e = links(&[("a", "b")]);
        assert!(find_shortest_path("a", "c", &n, &e).is_none());
        assert!(find_shortest_path("a", "ghost", &n, &e).is_none());
        assert!(find_shortest_path("ghost", "a", &n, &e).is_none());
    }

    #[test]
    fn test_shortest_path_to_self() {
        let n = nodes(&["a"]);
        let result = find_shortest_path("a", "a", &n, &[]).unwrap();
        assert_eq!(result.path, vec!["a"]);
        assert_eq!(result.distance, 0);
    }

    // --- All paths ---

    #[test]
    fn test_all_paths_diamond_in_dfs_order() {
        let (n, e) = diamond();
        let paths = find_all_paths("s", "t", &n, &e, 5);
        assert_eq!(paths, vec![vec!["s", "b", "t"], vec!["s", "m", "t"]]);
    }

    #[test]
    fn test_all_paths_respect_depth_bound() {
        let n = nodes(&["a", "b", "c", "d"]);
        let e = links(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")]);

        let shallow = find_all_paths("a", "d", &n, &e, 1);
        assert_eq!(shallow, vec![vec!["a", "d"]]);

        let deep = find_all_paths("a", "d", &n, &e, 3);
        assert_eq!(deep.len(), 2);
        for path in &deep {
            assert!(path.len() - 1 <= 3);
        }
    }

    #[test]
    fn test_all_paths_zero_depth_clamped_to_one() {
        let n = nodes(&["a", "b"]);
        let e = links(&[("a", "b")]);
        assert_eq!(find_all_paths("a", "b", &n, &e, 0), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_all_paths_simple_on_cyclic_graph() {
        let n = nodes(&["a", "b", "c", "d", "e"]);
        let e = links(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "b"),
            ("d", "e"),
        ]);
        let paths = find_all_paths("a", "e", &n, &e, 10);
        assert!(!paths.is_empty());
        for path in &paths {
            let mut seen = std::collections::HashSet::new();
            assert!(path.iter().all(|id| seen.insert(id)));
            assert_eq!(path.first().map(String::as_str), Some("a"));
            assert_eq!(path.last().map(String::as_str), Some("e"));
        }
        // a-b-d-e, a-b-c-d-e, a-c-d-e, a-c-b-d-e
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn test_all_paths_none_found() {
        let n = nodes(&["a", "b", "c"]);
        let e = links(&[("a", "b")]);
        assert!(find_all_paths("a", "c", &n, &e, 5).is_empty());
        assert!(find_all_paths("a", "zz", &n, &e, 5).is_empty());
    }
}
