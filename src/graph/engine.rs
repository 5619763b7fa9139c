//! Analytics engine — runs the analyses with one configuration.
//!
//! The `AnalyticsEngine` trait is the single entry point for consumers
//! that want configured thresholds (the CLI, an embedding UI bridge).
//! It extracts the structural graph once per call and runs:
//!
//! 1. **Metrics**: degree, betweenness, closeness, clustering, components
//! 2. **Patterns**: triangles, hubs, cliques, bridges
//! 3. **Anomalies**: isolates, hubs, weak links, conflicts, mismatches
//!
//! Path queries are exposed alongside. Every call is stateless.

use serde::{Deserialize, Serialize};

use super::anomalies::find_anomalies;
use super::extraction::build_network_graph;
use super::metrics::compute_metrics;
use super::models::{
    AnalyticsConfig, Edge, NetworkAnomaly, NetworkMetrics, NetworkPattern, Node, PathResult,
};
use super::paths::{all_paths, shortest_path};
use super::patterns::find_patterns;

// ============================================================================
// Output type
// ============================================================================

/// Combined result of a full analysis of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkReport {
    pub metrics: NetworkMetrics,
    pub patterns: Vec<NetworkPattern>,
    pub anomalies: Vec<NetworkAnomaly>,
    /// Computation time in milliseconds
    pub computation_ms: u64,
}

// ============================================================================
// Trait
// ============================================================================

/// Analytics engine trait.
///
/// Implementations must be stateless across calls: two snapshots analyzed
/// concurrently never observe each other.
pub trait AnalyticsEngine: Send + Sync {
    /// Whole-network and per-node metrics.
    fn metrics(&self, nodes: &[Node], edges: &[Edge]) -> NetworkMetrics;

    /// Structural motifs, in insertion order.
    fn patterns(&self, nodes: &[Node], edges: &[Edge]) -> Vec<NetworkPattern>;

    /// Findings for analyst review, in insertion order.
    fn anomalies(&self, nodes: &[Node], edges: &[Edge]) -> Vec<NetworkAnomaly>;

    /// Shortest hop path between two node IDs.
    fn shortest_path(
        &self,
        source_id: &str,
        target_id: &str,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Option<PathResult>;

    /// Simple paths up to `max_depth` hops, or the configured default depth.
    fn all_paths(
        &self,
        source_id: &str,
        target_id: &str,
        nodes: &[Node],
        edges: &[Edge],
        max_depth: Option<usize>,
    ) -> Vec<Vec<String>>;

    /// Metrics, patterns and anomalies in one pass over the snapshot.
    fn analyze(&self, nodes: &[Node], edges: &[Edge]) -> NetworkReport;
}

// ============================================================================
// Concrete implementation
// ============================================================================

/// Engine backed by the crate's algorithms and an `AnalyticsConfig`.
#[derive(Debug, Clone, Default)]
pub struct NetworkAnalyticsEngine {
    config: AnalyticsConfig,
}

impl NetworkAnalyticsEngine {
    /// Create an engine; out-of-range config values are clamped.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}

impl AnalyticsEngine for NetworkAnalyticsEngine {
    fn metrics(&self, nodes: &[Node], edges: &[Edge]) -> NetworkMetrics {
        compute_metrics(&build_network_graph(nodes, edges))
    }

    fn patterns(&self, nodes: &[Node], edges: &[Edge]) -> Vec<NetworkPattern> {
        find_patterns(&build_network_graph(nodes, edges), &self.config)
    }

    fn anomalies(&self, nodes: &[Node], edges: &[Edge]) -> Vec<NetworkAnomaly> {
        find_anomalies(&build_network_graph(nodes, edges), &self.config)
    }

    fn shortest_path(
        &self,
        source_id: &str,
        target_id: &str,
        nodes: &[Node],
        edges: &[Edge],
    ) -> Option<PathResult> {
        shortest_path(&build_network_graph(nodes, edges), source_id, target_id)
    }

    fn all_paths(
        &self,
        source_id: &str,
        target_id: &str,
        nodes: &[Node],
        edges: &[Edge],
        max_depth: Option<usize>,
    ) -> Vec<Vec<String>> {
        let depth = max_depth.unwrap_or(self.config.default_max_depth);
        all_paths(&build_network_graph(nodes, edges), source_id, target_id, depth)
    }

    fn analyze(&self, nodes: &[Node], edges: &[Edge]) -> NetworkReport {
        let start = std::time::Instant::now();

        let graph = build_network_graph(nodes, edges);
        let metrics = compute_metrics(&graph);
        let patterns = find_patterns(&graph, &self.config);
        let anomalies = find_anomalies(&graph, &self.config);

        let elapsed = start.elapsed();
        tracing::info!(
            "Analyzed {} nodes / {} edges: {} patterns, {} anomalies in {}ms",
            metrics.node_count,
            metrics.edge_count,
            patterns.len(),
            anomalies.len(),
            elapsed.as_millis()
        );

        NetworkReport {
            metrics,
            patterns,
            anomalies,
            computation_ms: elapsed.as_millis() as u64,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::models::{AnomalyType, NodeType, PatternType};
    use std::sync::Arc;

    fn sample() -> (Vec<Node>, Vec<Edge>) {
        let nodes = vec![
            Node::new("a", "Alpha", NodeType::Actor),
            Node::new("b", "Bravo", NodeType::Actor),
            Node::new("c", "Charlie", NodeType::Actor),
            Node::new("d", "Delta", NodeType::Place),
        ];
        let edges = vec![
            Edge::new("a", "b", "KNOWS"),
            Edge::new("b", "c", "KNOWS"),
            Edge::new("c", "a", "KNOWS"),
        ];
        (nodes, edges)
    }

    #[test]
    fn test_analyze_assembles_all_sections() {
        let (nodes, edges) = sample();
        let engine = NetworkAnalyticsEngine::default();
        let report = engine.analyze(&nodes, &edges);

        assert_eq!(report.metrics.node_count, 4);
        assert_eq!(report.metrics.component_count, 2);
        assert!(report
            .patterns
            .iter()
            .any(|p| p.pattern_type == PatternType::Triangle));
        assert!(report
            .anomalies
            .iter()
            .any(|a| a.anomaly_type == AnomalyType::IsolatedNode && a.node_ids == vec!["d"]));
    }

    #[test]
    fn test_analyze_matches_individual_calls() {
        let (nodes, edges) = sample();
        let engine = NetworkAnalyticsEngine::default();
        let report = engine.analyze(&nodes, &edges);

        assert_eq!(report.metrics, engine.metrics(&nodes, &edges));
        assert_eq!(report.patterns, engine.patterns(&nodes, &edges));
        assert_eq!(report.anomalies, engine.anomalies(&nodes, &edges));
    }

    #[test]
    fn test_all_paths_uses_configured_default_depth() {
        let nodes: Vec<Node> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| Node::new(*id, *id, NodeType::Event))
            .collect();
        let edges = vec![
            Edge::new("a", "b", "PRECEDES"),
            Edge::new("b", "c", "PRECEDES"),
            Edge::new("c", "d", "PRECEDES"),
        ];
        let engine = NetworkAnalyticsEngine::new(AnalyticsConfig {
            default_max_depth: 2,
            ..AnalyticsConfig::default()
        });

        assert!(engine.all_paths("a", "d", &nodes, &edges, None).is_empty());
        assert_eq!(engine.all_paths("a", "d", &nodes, &edges, Some(3)).len(), 1);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine: Arc<dyn AnalyticsEngine> = Arc::new(NetworkAnalyticsEngine::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    let nodes: Vec<Node> = (0..=i)
                        .map(|k| Node::new(format!("n{}", k), "n", NodeType::Actor))
                        .collect();
                    engine.metrics(&nodes, &[]).node_count
                })
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }
}
