//! Network Analytics
//!
//! Graph analytics core for the analyst workbench's network panels:
//! - Network metrics (degree, betweenness, closeness, clustering, components)
//! - Structural pattern detection (triangles, hubs, cliques, bridges)
//! - Anomaly detection with severity and remediation hints
//! - Shortest-path and bounded path enumeration between entities
//!
//! Every analysis is a pure function of a node/edge snapshot. Malformed
//! input (dangling edges, negative weights, duplicate IDs) is excluded
//! rather than reported as an error.

pub mod config;
pub mod graph;

pub use config::ConfigError;
pub use graph::{
    calculate_network_metrics, detect_anomalies, detect_anomalies_with_config, detect_patterns,
    detect_patterns_with_config, find_all_paths, find_shortest_path, AnalyticsConfig,
    AnalyticsEngine, AnomalyType, Confidence, Edge, GraphSnapshot, NetworkAnalyticsEngine,
    NetworkAnomaly, NetworkMetrics, NetworkPattern, NetworkReport, Node, NodeType, PathResult,
    PatternType, Severity,
};
