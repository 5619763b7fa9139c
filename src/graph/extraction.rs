//! Snapshot → petgraph extraction.
//!
//! Converts the caller's node and edge lists into a [`NetworkGraph`]: an
//! undirected `petgraph::UnGraph` holding one edge per connected node pair,
//! plus a sorted adjacency list for deterministic traversal.
//!
//! Extraction is best-effort. Malformed input never fails the analysis:
//!
//! - duplicate node IDs keep their first occurrence
//! - edges referencing an unknown node ID are excluded
//! - edges with a negative or non-finite weight are excluded
//! - self-loops are kept as valid edges but never enter the adjacency

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

use super::models::{Edge, NetworkGraph, Node, PairLink};

/// Build the structural view of a snapshot.
pub fn build_network_graph<'a>(nodes: &'a [Node], edges: &'a [Edge]) -> NetworkGraph<'a> {
    let mut graph: UnGraph<&'a Node, PairLink> = UnGraph::with_capacity(nodes.len(), edges.len());
    let mut id_to_index: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        if id_to_index.contains_key(node.id.as_str()) {
            tracing::debug!("Ignoring duplicate node id {}", node.id);
            continue;
        }
        let idx = graph.add_node(node);
        id_to_index.insert(node.id.as_str(), idx);
    }

    let mut valid_edges = Vec::with_capacity(edges.len());
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); graph.node_count()];

    for (i, edge) in edges.iter().enumerate() {
        let (Some(&s), Some(&t)) = (
            id_to_index.get(edge.source.as_str()),
            id_to_index.get(edge.target.as_str()),
        ) else {
            tracing::debug!(
                "Excluding edge {} -> {} ({}): dangling node reference",
                edge.source,
                edge.target,
                edge.edge_type
            );
            continue;
        };
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            tracing::debug!(
                "Excluding edge {} -> {} ({}): invalid weight {}",
                edge.source,
                edge.target,
                edge.edge_type,
                edge.weight
            );
            continue;
        }

        valid_edges.push(i);
        if s == t {
            continue;
        }

        // Parallel edges and reverse-direction edges collapse into one pair
        match graph.find_edge(s, t) {
            Some(existing) => {
                let link = &mut graph[existing];
                link.edge_indices.push(i);
                link.strength = link.strength.max(edge.strength());
            }
            None => {
                graph.add_edge(
                    s,
                    t,
                    PairLink {
                        edge_indices: vec![i],
                        strength: edge.strength(),
                    },
                );
                adjacency[s.index()].push(t.index());
                adjacency[t.index()].push(s.index());
            }
        }
    }

    for neighbors in adjacency.iter_mut() {
        neighbors.sort_unstable();
    }

    let excluded = edges.len() - valid_edges.len();
    if excluded > 0 {
        tracing::debug!(
            "Excluded {} of {} edges from structural analysis",
            excluded,
            edges.len()
        );
    }

    NetworkGraph {
        graph,
        id_to_index,
        adjacency,
        raw_edges: edges,
        valid_edges,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::models::{Confidence, NodeType};

    fn actor(id: &str) -> Node {
        Node::new(id, id.to_uppercase(), NodeType::Actor)
    }

    #[test]
    fn test_parallel_and_reverse_edges_collapse_to_one_pair() {
        let nodes = vec![actor("a"), actor("b")];
        let edges = vec![
            Edge::new("a", "b", "ALLIED_WITH"),
            Edge::new("a", "b", "FUNDS").with_confidence(Confidence::Confirmed),
            Edge::new("b", "a", "KNOWS"),
        ];
        let g = build_network_graph(&nodes, &edges);

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.pair_count(), 1);
        assert_eq!(g.raw_edge_count(), 3);
        assert_eq!(g.excluded_edge_count(), 0);
        assert_eq!(g.degree(0), 1);

        let link = g.link(0, 1).unwrap();
        assert_eq!(link.edge_indices, vec![0, 1, 2]);
        assert!((link.strength - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dangling_and_negative_edges_excluded() {
        let nodes = vec![actor("a"), actor("b")];
        let edges = vec![
            Edge::new("a", "ghost", "KNOWS"),
            Edge::new("a", "b", "KNOWS").with_weight(-1.0),
            Edge::new("a", "b", "KNOWS").with_weight(f64::NAN),
            Edge::new("a", "b", "KNOWS"),
        ];
        let g = build_network_graph(&nodes, &edges);

        assert_eq!(g.excluded_edge_count(), 3);
        assert_eq!(g.valid_edges, vec![3]);
        assert_eq!(g.pair_count(), 1);
    }

    #[test]
    fn test_duplicate_node_ids_keep_first() {
        let mut second = actor("a");
        second.name = "Impostor".to_string();
        let nodes = vec![actor("a"), second, actor("b")];
        let g = build_network_graph(&nodes, &[]);

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.node(0).name, "A");
        assert_eq!(g.index_of("b"), Some(1));
    }

    #[test]
    fn test_self_loop_is_valid_but_not_adjacent() {
        let nodes = vec![actor("a")];
        let edges = vec![Edge::new("a", "a", "SELF_REPORTS")];
        let g = build_network_graph(&nodes, &edges);

        assert_eq!(g.excluded_edge_count(), 0);
        assert_eq!(g.degree(0), 0);
        assert_eq!(g.pair_count(), 0);
    }

    #[test]
    fn test_adjacency_sorted_by_input_order() {
        let nodes = vec![actor("a"), actor("b"), actor("c"), actor("d")];
        let edges = vec![
            Edge::new("a", "d", "KNOWS"),
            Edge::new("a", "b", "KNOWS"),
            Edge::new("c", "a", "KNOWS"),
        ];
        let g = build_network_graph(&nodes, &edges);

        assert_eq!(g.adjacency[0], vec![1, 2, 3]);
        assert!(g.are_adjacent(2, 0));
        assert!(!g.are_adjacent(1, 3));
    }
}
