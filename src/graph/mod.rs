//! Network graph analytics.
//!
//! Provides the analyses behind the network metrics panel and the path
//! finder, using petgraph and rustworkx-core on an undirected,
//! de-duplicated view of the caller's entity/relationship snapshot.
//!
//! ## Architecture
//!
//! ```text
//! nodes + edges (caller snapshot)
//!            │
//!       extraction ──► NetworkGraph (petgraph::UnGraph + sorted adjacency)
//!            │
//!   ┌────────┼──────────┬──────────┐
//! metrics  patterns  anomalies   paths
//!   └────────┴──────────┴──────────┘
//!            │
//!   AnalyticsEngine (configured entry point)
//! ```
//!
//! ## Modules
//!
//! - [`models`] — Data structures (Node, Edge, NetworkMetrics, NetworkPattern, NetworkAnomaly, AnalyticsConfig)
//! - [`extraction`] — Snapshot → petgraph conversion with best-effort validation
//! - [`metrics`] — Degree, betweenness, closeness, clustering, components
//! - [`patterns`] — Triangles, hubs, cliques, bridges
//! - [`anomalies`] — Isolates, unexpected hubs, weak links, conflicts, mismatches
//! - [`paths`] — Shortest path and bounded simple-path enumeration
//! - [`engine`] — `AnalyticsEngine` trait and `NetworkAnalyticsEngine`

pub mod anomalies;
pub mod engine;
pub mod extraction;
pub mod metrics;
pub mod models;
pub mod paths;
pub mod patterns;

// Re-export primary types for convenience
pub use anomalies::{detect_anomalies, detect_anomalies_with_config};
pub use engine::{AnalyticsEngine, NetworkAnalyticsEngine, NetworkReport};
pub use extraction::build_network_graph;
pub use metrics::calculate_network_metrics;
pub use models::{
    AnalyticsConfig, AnomalyType, ComponentInfo, Confidence, Edge, GraphSnapshot, Metadata,
    NetworkAnomaly, NetworkGraph, NetworkMetrics, NetworkPattern, Node, NodeCentrality, NodeType,
    PathResult, PatternType, RankedNode, Severity,
};
pub use paths::{find_all_paths, find_shortest_path};
pub use patterns::{detect_patterns, detect_patterns_with_config};
