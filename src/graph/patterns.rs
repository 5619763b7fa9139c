//! Structural pattern detection.
//!
//! Finds motifs on the undirected, de-duplicated view of a snapshot:
//! - **Triangle** — three mutually connected nodes
//! - **Hub** — degree well above the population (mean + k·stddev)
//! - **Clique** — maximal complete subgraphs (Bron–Kerbosch with pivot)
//! - **Bridge** — edges whose removal splits a component (Tarjan low-link)
//!
//! Output is in insertion order: triangles, hubs, cliques, bridges, each
//! enumerated in input node order. Callers rank by `significance`.

use super::extraction::build_network_graph;
use super::metrics::ratio;
use super::models::{AnalyticsConfig, Edge, NetworkGraph, NetworkPattern, Node, PatternType};

/// Detect patterns with the default configuration.
pub fn detect_patterns(nodes: &[Node], edges: &[Edge]) -> Vec<NetworkPattern> {
    detect_patterns_with_config(nodes, edges, &AnalyticsConfig::default())
}

/// Detect patterns with explicit thresholds.
pub fn detect_patterns_with_config(
    nodes: &[Node],
    edges: &[Edge],
    config: &AnalyticsConfig,
) -> Vec<NetworkPattern> {
    let graph = build_network_graph(nodes, edges);
    find_patterns(&graph, config)
}

/// Run every pattern pass on an extracted graph.
pub fn find_patterns(graph: &NetworkGraph<'_>, config: &AnalyticsConfig) -> Vec<NetworkPattern> {
    let mut patterns = find_triangles(graph);
    let triangles = patterns.len();
    patterns.extend(find_hubs(graph, config));
    let hubs = patterns.len() - triangles;
    patterns.extend(find_cliques(graph, config.min_clique_size));
    let cliques = patterns.len() - triangles - hubs;
    patterns.extend(find_bridges(graph));

    tracing::debug!(
        "Pattern scan: {} triangles, {} hubs, {} cliques, {} bridges",
        triangles,
        hubs,
        cliques,
        patterns.len() - triangles - hubs - cliques
    );
    patterns
}

fn ids(graph: &NetworkGraph<'_>, members: &[usize]) -> Vec<String> {
    members.iter().map(|&i| graph.node(i).id.clone()).collect()
}

fn names(graph: &NetworkGraph<'_>, members: &[usize]) -> String {
    members
        .iter()
        .map(|&i| graph.node(i).name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Triangles
// ============================================================================

/// One pattern per distinct triangle, members in input order.
///
/// Significance is the weakest of the three links, so a single
/// suspected relationship caps the whole motif.
pub fn find_triangles(graph: &NetworkGraph<'_>) -> Vec<NetworkPattern> {
    let mut result = Vec::new();
    for i in 0..graph.node_count() {
        for &j in graph.adjacency[i].iter().filter(|&&j| j > i) {
            for &k in graph.adjacency[j].iter().filter(|&&k| k > j) {
                if !graph.are_adjacent(i, k) {
                    continue;
                }
                let members = [i, j, k];
                let significance = graph
                    .link_strength(i, j)
                    .min(graph.link_strength(j, k))
                    .min(graph.link_strength(i, k));
                result.push(NetworkPattern {
                    pattern_type: PatternType::Triangle,
                    description: format!("Closed triad: {}", names(graph, &members)),
                    nodes: ids(graph, &members),
                    significance: significance.clamp(0.0, 1.0),
                });
            }
        }
    }
    result
}

// ============================================================================
// Hubs
// ============================================================================

/// Mean and population standard deviation of the degree distribution.
pub(crate) fn degree_stats(graph: &NetworkGraph<'_>) -> (f64, f64) {
    let n = graph.node_count();
    if n == 0 {
        return (0.0, 0.0);
    }
    let degrees: Vec<f64> = (0..n).map(|i| graph.degree(i) as f64).collect();
    let mean = degrees.iter().sum::<f64>() / n as f64;
    let variance = degrees.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n as f64;
    (mean, variance.sqrt())
}

/// Nodes whose degree exceeds `mean + hub_std_devs * stddev`.
///
/// Nodes lists the hub first, then its neighbors. A uniform degree
/// distribution has no hubs.
pub fn find_hubs(graph: &NetworkGraph<'_>, config: &AnalyticsConfig) -> Vec<NetworkPattern> {
    let (mean, std_dev) = degree_stats(graph);
    if std_dev == 0.0 {
        return vec![];
    }
    let threshold = mean + config.hub_std_devs * std_dev;
    let max_degree = (0..graph.node_count())
        .map(|i| graph.degree(i))
        .max()
        .unwrap_or(0);

    (0..graph.node_count())
        .filter(|&i| {
            let degree = graph.degree(i);
            degree as f64 > threshold && degree >= config.min_hub_degree
        })
        .map(|i| {
            let degree = graph.degree(i);
            let mut members = vec![i];
            members.extend_from_slice(&graph.adjacency[i]);
            NetworkPattern {
                pattern_type: PatternType::Hub,
                description: format!(
                    "{} connects {} entities (network mean {:.1})",
                    graph.node(i).name,
                    degree,
                    mean
                ),
                nodes: ids(graph, &members),
                significance: ratio(degree as f64, max_degree as f64),
            }
        })
        .collect()
}

// ============================================================================
// Cliques
// ============================================================================

/// Maximal cliques with at least `min_size` members.
///
/// Significance is the mean link strength across all member pairs.
pub fn find_cliques(graph: &NetworkGraph<'_>, min_size: usize) -> Vec<NetworkPattern> {
    let min_size = min_size.max(3);
    let mut cliques: Vec<Vec<usize>> = Vec::new();
    let candidates: Vec<usize> = (0..graph.node_count())
        .filter(|&i| graph.degree(i) + 1 >= min_size)
        .collect();
    bron_kerbosch(graph, Vec::new(), candidates, Vec::new(), min_size, &mut cliques);

    for clique in cliques.iter_mut() {
        clique.sort_unstable();
    }
    cliques.sort();

    cliques
        .into_iter()
        .map(|members| {
            let mut total = 0.0;
            let mut pairs = 0usize;
            for (a, &u) in members.iter().enumerate() {
                for &v in &members[a + 1..] {
                    total += graph.link_strength(u, v);
                    pairs += 1;
                }
            }
            NetworkPattern {
                pattern_type: PatternType::Clique,
                description: format!(
                    "Tightly knit group of {}: {}",
                    members.len(),
                    names(graph, &members)
                ),
                nodes: ids(graph, &members),
                significance: ratio(total, pairs as f64).clamp(0.0, 1.0),
            }
        })
        .collect()
}

fn intersect(set: &[usize], neighbors: &[usize]) -> Vec<usize> {
    set.iter()
        .copied()
        .filter(|v| neighbors.binary_search(v).is_ok())
        .collect()
}

fn bron_kerbosch(
    graph: &NetworkGraph<'_>,
    current: Vec<usize>,
    mut candidates: Vec<usize>,
    mut excluded: Vec<usize>,
    min_size: usize,
    out: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if current.len() >= min_size {
            out.push(current);
        }
        return;
    }
    if candidates.is_empty() || current.len() + candidates.len() < min_size {
        return;
    }

    // Pivot on the vertex covering the most candidates
    let Some(pivot) = candidates
        .iter()
        .chain(excluded.iter())
        .copied()
        .max_by_key(|&u| intersect(&candidates, &graph.adjacency[u]).len())
    else {
        return;
    };

    let expand: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|v| !graph.are_adjacent(pivot, *v))
        .collect();

    for v in expand {
        let neighbors = &graph.adjacency[v];
        let mut next = current.clone();
        next.push(v);
        bron_kerbosch(
            graph,
            next,
            intersect(&candidates, neighbors),
            intersect(&excluded, neighbors),
            min_size,
            out,
        );
        candidates.retain(|&c| c != v);
        excluded.push(v);
        excluded.sort_unstable();
    }
}

// ============================================================================
// Bridges
// ============================================================================

/// Edges whose removal disconnects their component.
///
/// Significance measures how evenly the bridge splits its component:
/// `4ab / (a + b)²` for side sizes `a` and `b`, 1.0 for an even split.
pub fn find_bridges(graph: &NetworkGraph<'_>) -> Vec<NetworkPattern> {
    let n = graph.node_count();
    let unvisited = usize::MAX;
    let mut disc = vec![unvisited; n];
    let mut low = vec![0usize; n];
    let mut subtree = vec![1usize; n];
    let mut parent = vec![unvisited; n];
    let mut timer = 0usize;
    // (lower index, higher index, side a, side b)
    let mut bridges: Vec<(usize, usize, usize, usize)> = Vec::new();

    for root in 0..n {
        if disc[root] != unvisited {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;
        let mut component_size = 1usize;
        let mut found: Vec<(usize, usize, usize)> = Vec::new();
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(&(v, pos)) = stack.last() {
            if pos < graph.adjacency[v].len() {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                let w = graph.adjacency[v][pos];
                if disc[w] == unvisited {
                    parent[w] = v;
                    disc[w] = timer;
                    low[w] = timer;
                    timer += 1;
                    component_size += 1;
                    stack.push((w, 0));
                } else if w != parent[v] {
                    low[v] = low[v].min(disc[w]);
                }
            } else {
                stack.pop();
                if let Some(&(p, _)) = stack.last() {
                    low[p] = low[p].min(low[v]);
                    subtree[p] += subtree[v];
                    if low[v] > disc[p] {
                        found.push((p, v, subtree[v]));
                    }
                }
            }
        }

        for (p, v, side) in found {
            bridges.push((p.min(v), p.max(v), side, component_size - side));
        }
    }

    bridges.sort_unstable();
    bridges
        .into_iter()
        .map(|(u, v, a, b)| {
            let members = [u, v];
            let total = (a + b) as f64;
            NetworkPattern {
                pattern_type: PatternType::Bridge,
                description: format!(
                    "Sole link between {} and {} joins groups of {} and {}",
                    graph.node(u).name,
                    graph.node(v).name,
                    a,
                    b
                ),
                nodes: ids(graph, &members),
                significance: ratio(4.0 * a as f64 * b as f64, total * total).clamp(0.0, 1.0),
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
