//! Network metrics.
//!
//! Implements the structural measures shown in the metrics panel, all on
//! the undirected, de-duplicated view of a snapshot:
//! - **Degree centrality** — distinct neighbors per node
//! - **Betweenness centrality** — via `rustworkx_core::centrality::betweenness_centrality`
//! - **Closeness centrality** — via `rustworkx_core::centrality::closeness_centrality`
//! - **Clustering coefficient** — local clustering per node
//! - **Weakly connected components** — BFS flood fill
//!
//! Every ratio guards its denominator and reports 0.0 instead of NaN.

use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

use super::extraction::build_network_graph;
use super::models::{
    ComponentInfo, Edge, NetworkGraph, NetworkMetrics, Node, NodeCentrality, RankedNode,
};

/// Compute all network metrics for a snapshot.
pub fn calculate_network_metrics(nodes: &[Node], edges: &[Edge]) -> NetworkMetrics {
    let graph = build_network_graph(nodes, edges);
    compute_metrics(&graph)
}

/// Compute all network metrics on an already-extracted graph.
pub fn compute_metrics(graph: &NetworkGraph<'_>) -> NetworkMetrics {
    let n = graph.node_count();

    let degrees: Vec<usize> = (0..n).map(|i| graph.degree(i)).collect();
    let betweenness = betweenness_centrality(graph);
    let closeness = closeness_centrality(graph);
    let clustering = clustering_coefficient(graph);
    let (component_of, components) = connected_components(graph);

    let degree_sum: usize = degrees.iter().sum();
    let avg_degree = ratio(degree_sum as f64, n as f64);
    let max_pairs = if n < 2 { 0.0 } else { (n * (n - 1)) as f64 / 2.0 };
    let density = ratio(graph.pair_count() as f64, max_pairs).min(1.0);
    let avg_clustering_coefficient = ratio(clustering.iter().sum(), n as f64);

    let nodes: Vec<NodeCentrality> = (0..n)
        .map(|i| {
            let node = graph.node(i);
            let node_weight = if node.weight.is_finite() && node.weight >= 0.0 {
                node.weight
            } else {
                1.0
            };
            NodeCentrality {
                id: node.id.clone(),
                name: node.name.clone(),
                node_type: node.node_type,
                degree: degrees[i],
                degree_centrality: ratio(degrees[i] as f64, n.saturating_sub(1) as f64),
                weighted_degree: degrees[i] as f64 * node_weight,
                betweenness: betweenness[i],
                closeness: closeness[i],
                clustering_coefficient: clustering[i],
                component_id: component_of[i],
            }
        })
        .collect();

    let top_by_degree = rank_nodes(&nodes, |m| m.degree as f64);
    let top_by_betweenness = rank_nodes(&nodes, |m| m.betweenness);

    NetworkMetrics {
        node_count: n,
        edge_count: graph.raw_edge_count(),
        excluded_edge_count: graph.excluded_edge_count(),
        density,
        avg_degree,
        avg_clustering_coefficient,
        component_count: components.len(),
        largest_component_size: components.first().map_or(0, |c| c.size),
        components,
        nodes,
        top_by_degree,
        top_by_betweenness,
    }
}

/// `numerator / denominator`, or 0.0 when the result would not be finite.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Every node sorted by `key` descending; ties keep input order.
fn rank_nodes(nodes: &[NodeCentrality], key: impl Fn(&NodeCentrality) -> f64) -> Vec<RankedNode> {
    let mut ranked: Vec<RankedNode> = nodes
        .iter()
        .map(|m| RankedNode {
            id: m.id.clone(),
            name: m.name.clone(),
            value: key(m),
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked
}

// ============================================================================
// Betweenness Centrality (via rustworkx-core)
// ============================================================================

/// Normalized betweenness centrality per node, indexed like the graph.
///
/// On an undirected graph `rustworkx-core` normalizes by `(n-1)(n-2)`
/// over ordered pairs, which equals the fraction of the `(n-1)(n-2)/2`
/// unordered pairs not involving the node. Values are in [0, 1].
pub fn betweenness_centrality(graph: &NetworkGraph<'_>) -> Vec<f64> {
    let g = &graph.graph;
    let n = g.node_count();
    if n < 3 {
        return vec![0.0; n];
    }

    let scores = rustworkx_core::centrality::betweenness_centrality(
        g, false, // include_endpoints
        true,  // normalized
        200,   // parallel_threshold (sequential for small graphs)
    );

    g.node_indices()
        .map(|idx| scores[idx.index()].unwrap_or(0.0).clamp(0.0, 1.0))
        .collect()
}

// ============================================================================
// Closeness Centrality
// ============================================================================

/// Closeness per node: `(reachable - 1) / Σ distances` within the component,
/// where `reachable` counts the node itself. Isolated nodes get 0.0.
///
/// Uses `rustworkx_core::centrality::closeness_centrality` without the
/// Wasserman-Faust correction, so scores are not scaled by component size.
pub fn closeness_centrality(graph: &NetworkGraph<'_>) -> Vec<f64> {
    let g = &graph.graph;
    let scores = rustworkx_core::centrality::closeness_centrality(
        g, false, // wf_improved
    );

    g.node_indices()
        .map(|idx| {
            scores[idx.index()]
                .filter(|c| c.is_finite())
                .unwrap_or(0.0)
                .clamp(0.0, 1.0)
        })
        .collect()
}

// ============================================================================
// Clustering Coefficient
// ============================================================================

/// Local clustering coefficient per node.
///
/// coefficient = links among neighbors / (k * (k-1) / 2) for k >= 2, else 0.
pub fn clustering_coefficient(graph: &NetworkGraph<'_>) -> Vec<f64> {
    (0..graph.node_count())
        .map(|i| {
            let neighbors = &graph.adjacency[i];
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }

            let mut links = 0usize;
            for (a, &ni) in neighbors.iter().enumerate() {
                for &nj in &neighbors[a + 1..] {
                    if graph.are_adjacent(ni, nj) {
                        links += 1;
                    }
                }
            }

            let possible = k * (k - 1) / 2;
            ratio(links as f64, possible as f64)
        })
        .collect()
}

// ============================================================================
// Weakly Connected Components
// ============================================================================

/// Identify weakly connected components.
///
/// Returns `(component_of, components)`: the component ID of every node
/// (IDs assigned in order of discovery from input order), and component
/// summaries sorted largest first.
pub fn connected_components(graph: &NetworkGraph<'_>) -> (Vec<u32>, Vec<ComponentInfo>) {
    let n = graph.node_count();
    if n == 0 {
        return (vec![], vec![]);
    }

    let mut component_of: Vec<Option<u32>> = vec![None; n];
    let mut members: Vec<Vec<String>> = Vec::new();

    for start in 0..n {
        if component_of[start].is_some() {
            continue;
        }
        let component_id = members.len() as u32;
        let mut queue = VecDeque::new();
        let mut found = vec![start];
        queue.push_back(start);
        component_of[start] = Some(component_id);

        while let Some(current) = queue.pop_front() {
            for &neighbor in &graph.adjacency[current] {
                if component_of[neighbor].is_none() {
                    component_of[neighbor] = Some(component_id);
                    found.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        found.sort_unstable();
        members.push(
            found
                .into_iter()
                .map(|i| graph.graph[NodeIndex::new(i)].id.clone())
                .collect(),
        );
    }

    let max_size = members.iter().map(Vec::len).max().unwrap_or(0);
    let mut components: Vec<ComponentInfo> = members
        .into_iter()
        .enumerate()
        .map(|(id, members)| ComponentInfo {
            id: id as u32,
            size: members.len(),
            is_main: members.len() == max_size,
            members,
        })
        .collect();
    components.sort_by_key(|c| std::cmp::Reverse(c.size));

    let component_of = component_of.into_iter().map(|c| c.unwrap_or(0)).collect();
    (component_of, components)
}

// ============================================================================
// Tests
// ============================================================================
