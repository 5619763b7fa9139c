//! Anomaly detection.
//!
//! Flags nodes and relationships an analyst should review, each with a
//! severity, a score in [0, 1] and a remediation hint:
//! - **Isolated node** — no valid relationship at all
//! - **Unexpected hub** — degree z-score above `anomaly_std_devs`
//! - **Low-confidence high-impact edge** — uncorroborated SUSPECTED/POSSIBLE
//!   link between well-connected or high-betweenness nodes
//! - **Conflicting relationship** — contradictory types on one node pair
//! - **Confidence mismatch** — one relationship recorded at different
//!   confidence levels
//!
//! Output is grouped by pass in the order above.

use std::collections::HashSet;

use super::extraction::build_network_graph;
use super::metrics::betweenness_centrality;
use super::models::{
    AnalyticsConfig, AnomalyType, Confidence, Edge, NetworkAnomaly, NetworkGraph, Node, NodeType,
    Severity,
};
use super::patterns::degree_stats;

/// Detect anomalies with the default configuration.
pub fn detect_anomalies(nodes: &[Node], edges: &[Edge]) -> Vec<NetworkAnomaly> {
    detect_anomalies_with_config(nodes, edges, &AnalyticsConfig::default())
}

/// Detect anomalies with explicit thresholds.
pub fn detect_anomalies_with_config(
    nodes: &[Node],
    edges: &[Edge],
    config: &AnalyticsConfig,
) -> Vec<NetworkAnomaly> {
    let graph = build_network_graph(nodes, edges);
    find_anomalies(&graph, config)
}

/// Run every anomaly pass on an extracted graph.
pub fn find_anomalies(graph: &NetworkGraph<'_>, config: &AnalyticsConfig) -> Vec<NetworkAnomaly> {
    let mut anomalies = find_isolated_nodes(graph);
    anomalies.extend(find_unexpected_hubs(graph, config));
    anomalies.extend(find_low_confidence_links(graph, config));
    anomalies.extend(find_conflicting_relationships(graph, config));
    anomalies.extend(find_confidence_mismatches(graph));

    tracing::debug!(
        "Anomaly scan: {} findings over {} nodes",
        anomalies.len(),
        graph.node_count()
    );
    anomalies
}

// ============================================================================
// Isolated nodes
// ============================================================================

/// Nodes with no valid relationship, in a graph of at least two nodes.
pub fn find_isolated_nodes(graph: &NetworkGraph<'_>) -> Vec<NetworkAnomaly> {
    if graph.node_count() < 2 {
        return vec![];
    }

    (0..graph.node_count())
        .filter(|&i| graph.degree(i) == 0)
        .map(|i| {
            let node = graph.node(i);
            let severity = match node.node_type {
                NodeType::Actor | NodeType::Evidence => Severity::Medium,
                _ => Severity::Low,
            };
            NetworkAnomaly {
                anomaly_type: AnomalyType::IsolatedNode,
                description: format!(
                    "{} ({}) has no relationships to any other entity",
                    node.name, node.node_type
                ),
                recommendation: "Link this entity to related actors or events, or verify \
                                 whether it belongs in this analysis"
                    .to_string(),
                score: if severity == Severity::Medium { 0.5 } else { 0.3 },
                severity,
                node_ids: vec![node.id.clone()],
            }
        })
        .collect()
}

// ============================================================================
// Unexpected hubs
// ============================================================================

/// Nodes whose degree z-score exceeds `anomaly_std_devs`.
///
/// MEDIUM past the threshold, HIGH one standard deviation further,
/// CRITICAL two further.
pub fn find_unexpected_hubs(
    graph: &NetworkGraph<'_>,
    config: &AnalyticsConfig,
) -> Vec<NetworkAnomaly> {
    let (mean, std_dev) = degree_stats(graph);
    if std_dev == 0.0 {
        return vec![];
    }
    let threshold = config.anomaly_std_devs;

    (0..graph.node_count())
        .filter_map(|i| {
            let degree = graph.degree(i);
            let z = (degree as f64 - mean) / std_dev;
            if z <= threshold {
                return None;
            }
            let severity = if z >= threshold + 2.0 {
                Severity::Critical
            } else if z >= threshold + 1.0 {
                Severity::High
            } else {
                Severity::Medium
            };
            let node = graph.node(i);
            Some(NetworkAnomaly {
                anomaly_type: AnomalyType::UnexpectedHub,
                description: format!(
                    "{} has {} connections, {:.1} standard deviations above the mean of {:.1}",
                    node.name, degree, z, mean
                ),
                recommendation: "Verify the sources behind this entity's relationships and \
                                 check for merged or duplicated entities"
                    .to_string(),
                severity,
                score: (z / (2.0 * threshold)).clamp(0.0, 1.0),
                node_ids: vec![node.id.clone()],
            })
        })
        .collect()
}

// ============================================================================
// Low-confidence, high-impact links
// ============================================================================

fn corroborates(edge: &Edge) -> bool {
    edge.confidence.map_or(true, |c| !c.is_low())
}

/// Uncorroborated SUSPECTED/POSSIBLE edges touching important nodes.
///
/// An endpoint pair is important when both endpoints are well connected
/// (degree >= 2 and at least the mean degree), or when either endpoint's
/// betweenness reaches `high_impact_betweenness`.
pub fn find_low_confidence_links(
    graph: &NetworkGraph<'_>,
    config: &AnalyticsConfig,
) -> Vec<NetworkAnomaly> {
    let candidates: Vec<(&Edge, usize, usize, Confidence)> = graph
        .valid_edge_endpoints()
        .filter(|(_, s, t)| s != t)
        .filter_map(|(edge, s, t)| match edge.confidence {
            Some(c) if c.is_low() => Some((edge, s, t, c)),
            _ => None,
        })
        .filter(|(_, s, t, _)| {
            graph.link(*s, *t).is_some_and(|link| {
                !link
                    .edge_indices
                    .iter()
                    .any(|&i| corroborates(&graph.raw_edges[i]))
            })
        })
        .collect();
    if candidates.is_empty() {
        return vec![];
    }

    let (mean, _) = degree_stats(graph);
    let betweenness = betweenness_centrality(graph);
    let well_connected = |i: usize| graph.degree(i) >= 2 && graph.degree(i) as f64 >= mean;
    let central = |i: usize| betweenness[i] >= config.high_impact_betweenness;

    candidates
        .into_iter()
        .filter(|&(_, s, t, _)| {
            (well_connected(s) && well_connected(t)) || central(s) || central(t)
        })
        .map(|(edge, s, t, confidence)| {
            let (source, target) = (graph.node(s), graph.node(t));
            NetworkAnomaly {
                anomaly_type: AnomalyType::LowConfidenceHighImpact,
                description: format!(
                    "{} relationship {} -> {} is only {} but links central entities",
                    edge.edge_type, source.name, target.name, confidence
                ),
                recommendation: "Corroborate this relationship with additional evidence \
                                 before relying on it"
                    .to_string(),
                severity: if confidence == Confidence::Suspected {
                    Severity::High
                } else {
                    Severity::Medium
                },
                score: 1.0 - confidence.score(),
                node_ids: vec![source.id.clone(), target.id.clone()],
            }
        })
        .collect()
}

// ============================================================================
// Conflicting relationships
// ============================================================================

/// Node pairs carrying both sides of a contradictory type pair.
///
/// CRITICAL when each side has at least one PROBABLE, CONFIRMED or
/// unlabeled edge, HIGH otherwise.
pub fn find_conflicting_relationships(
    graph: &NetworkGraph<'_>,
    config: &AnalyticsConfig,
) -> Vec<NetworkAnomaly> {
    let conflict_pairs = config.conflict_pairs();
    let mut result = Vec::new();

    for i in 0..graph.node_count() {
        for &j in graph.adjacency[i].iter().filter(|&&j| j > i) {
            let Some(link) = graph.link(i, j) else {
                continue;
            };
            let edges: Vec<(&Edge, String)> = link
                .edge_indices
                .iter()
                .map(|&e| (&graph.raw_edges[e], graph.raw_edges[e].edge_type.to_uppercase()))
                .collect();

            for (a, b) in &conflict_pairs {
                let side = |kind: &str| {
                    edges
                        .iter()
                        .filter(|(_, edge_type)| edge_type == kind)
                        .map(|&(e, _)| e)
                        .collect::<Vec<_>>()
                };
                let (side_a, side_b) = (side(a.as_str()), side(b.as_str()));
                if side_a.is_empty() || side_b.is_empty() {
                    continue;
                }

                let firm = |side: &[&Edge]| side.iter().any(|e| corroborates(e));
                let critical = firm(&side_a) && firm(&side_b);
                let (x, y) = (graph.node(i), graph.node(j));
                result.push(NetworkAnomaly {
                    anomaly_type: AnomalyType::ConflictingRelationship,
                    description: format!(
                        "{} and {} are recorded as both {} and {}",
                        x.name, y.name, a, b
                    ),
                    recommendation: "Verify the sources for both relationships and resolve \
                                     or date-bound the contradiction"
                        .to_string(),
                    severity: if critical {
                        Severity::Critical
                    } else {
                        Severity::High
                    },
                    score: if critical { 0.9 } else { 0.7 },
                    node_ids: vec![x.id.clone(), y.id.clone()],
                });
            }
        }
    }
    result
}

// ============================================================================
// Confidence mismatches
// ============================================================================

/// One relationship type on one node pair recorded at different levels.
///
/// MEDIUM when the labels are two or more levels apart, LOW otherwise.
pub fn find_confidence_mismatches(graph: &NetworkGraph<'_>) -> Vec<NetworkAnomaly> {
    let mut result = Vec::new();

    for i in 0..graph.node_count() {
        for &j in graph.adjacency[i].iter().filter(|&&j| j > i) {
            let Some(link) = graph.link(i, j) else {
                continue;
            };
            let mut seen_types: HashSet<String> = HashSet::new();

            for &e in &link.edge_indices {
                let kind = graph.raw_edges[e].edge_type.to_uppercase();
                if !seen_types.insert(kind.clone()) {
                    continue;
                }
                let labels: Vec<Confidence> = link
                    .edge_indices
                    .iter()
                    .map(|&k| &graph.raw_edges[k])
                    .filter(|edge| edge.edge_type.to_uppercase() == kind)
                    .filter_map(|edge| edge.confidence)
                    .collect();
                let (Some(&lowest), Some(&highest)) = (labels.iter().min(), labels.iter().max())
                else {
                    continue;
                };
                if lowest == highest {
                    continue;
                }

                let span = highest.level() - lowest.level();
                let (x, y) = (graph.node(i), graph.node(j));
                result.push(NetworkAnomaly {
                    anomaly_type: AnomalyType::ConfidenceMismatch,
                    description: format!(
                        "{} between {} and {} is recorded as both {} and {}",
                        kind, x.name, y.name, lowest, highest
                    ),
                    recommendation: "Reconcile the confidence assessments and keep the one \
                                     backed by the strongest source"
                        .to_string(),
                    severity: if span >= 2 {
                        Severity::Medium
                    } else {
                        Severity::Low
                    },
                    score: f64::from(span) / 3.0,
                    node_ids: vec![x.id.clone(), y.id.clone()],
                });
            }
        }
    }
    result
}

// ============================================================================
// Tests
// ============================================================================
