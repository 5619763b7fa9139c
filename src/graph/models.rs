//! Network analytics data models.
//!
//! Defines the complete type system for network analytics:
//!
//! ## Input types
//! - [`NodeType`] / [`Node`] — entities normalized by the caller
//! - [`Confidence`] / [`Edge`] — directed, typed, weighted relationships
//! - [`NetworkGraph`] — petgraph wrapper with ID ↔ NodeIndex mapping and
//!   the undirected, de-duplicated adjacency used for structural analysis
//!
//! ## Output types
//! - [`NodeCentrality`] / [`RankedNode`] / [`ComponentInfo`] / [`NetworkMetrics`]
//! - [`PatternType`] / [`NetworkPattern`]
//! - [`AnomalyType`] / [`Severity`] / [`NetworkAnomaly`]
//! - [`PathResult`]

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque caller metadata carried alongside nodes and edges.
pub type Metadata = HashMap<String, serde_json::Value>;

// ============================================================================
// Input types — Nodes and edges as supplied by the caller
// ============================================================================

/// Kind of analytic entity a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Actor,
    Source,
    Event,
    Place,
    Behavior,
    Evidence,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Actor => write!(f, "ACTOR"),
            Self::Source => write!(f, "SOURCE"),
            Self::Event => write!(f, "EVENT"),
            Self::Place => write!(f, "PLACE"),
            Self::Behavior => write!(f, "BEHAVIOR"),
            Self::Evidence => write!(f, "EVIDENCE"),
        }
    }
}

fn default_node_weight() -> f64 {
    1.0
}

/// An entity in the network snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the snapshot
    pub id: String,
    /// Display name
    pub name: String,
    /// Entity kind
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Visual/importance weight (default: 1.0)
    #[serde(default = "default_node_weight")]
    pub weight: f64,
    /// Caller-specific fields, never inspected by the analytics
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl Node {
    /// Create a node with default weight and no metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            weight: default_node_weight(),
            metadata: Metadata::new(),
        }
    }
}

/// Analyst certainty attached to a relationship.
///
/// Ordered `Suspected < Possible < Probable < Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Suspected,
    Possible,
    Probable,
    Confirmed,
}

impl Confidence {
    /// Numeric certainty in (0, 1].
    pub fn score(self) -> f64 {
        match self {
            Self::Suspected => 0.25,
            Self::Possible => 0.5,
            Self::Probable => 0.75,
            Self::Confirmed => 1.0,
        }
    }

    /// Position on the certainty ladder (0 = Suspected).
    pub fn level(self) -> u8 {
        match self {
            Self::Suspected => 0,
            Self::Possible => 1,
            Self::Probable => 2,
            Self::Confirmed => 3,
        }
    }

    /// Whether an edge at this level needs corroboration.
    pub fn is_low(self) -> bool {
        matches!(self, Self::Suspected | Self::Possible)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suspected => write!(f, "SUSPECTED"),
            Self::Possible => write!(f, "POSSIBLE"),
            Self::Probable => write!(f, "PROBABLE"),
            Self::Confirmed => write!(f, "CONFIRMED"),
        }
    }
}

/// Score used for unlabeled edges (same as `Probable`).
pub const UNLABELED_CONFIDENCE_SCORE: f64 = 0.75;

/// Score of an optional confidence label.
pub fn confidence_score(confidence: Option<Confidence>) -> f64 {
    confidence.map_or(UNLABELED_CONFIDENCE_SCORE, Confidence::score)
}

fn default_edge_weight() -> f64 {
    1.0
}

/// A directed relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node ID
    pub source: String,
    /// Target node ID
    pub target: String,
    /// Relationship type (e.g. `ALLIED_WITH`)
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Relationship strength (default: 1.0)
    #[serde(default = "default_edge_weight")]
    pub weight: f64,
    /// Analyst certainty, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// Caller-specific fields, never inspected by the analytics
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl Edge {
    /// Create an edge with weight 1.0 and no confidence label.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        edge_type: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type: edge_type.into(),
            weight: default_edge_weight(),
            confidence: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Significance contribution: confidence score scaled by the weight,
    /// with weights above 1 saturating.
    pub fn strength(&self) -> f64 {
        confidence_score(self.confidence) * self.weight.clamp(0.0, 1.0)
    }
}

/// A node/edge snapshot, as exchanged with the hosting UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

// ============================================================================
// NetworkGraph — undirected structural view with ID mapping
// ============================================================================

/// Aggregate of every valid raw edge joining one unordered node pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairLink {
    /// Positions of the contributing edges in the caller's edge list
    pub edge_indices: Vec<usize>,
    /// Strongest [`Edge::strength`] among the contributing edges
    pub strength: f64,
}

/// Undirected, de-duplicated view of a snapshot.
///
/// Node indices follow the order of first appearance in the input, so
/// every traversal over `adjacency` is deterministic. The raw edge list
/// is kept borrowed for the detectors that need edge-level detail.
#[derive(Debug, Clone)]
pub struct NetworkGraph<'a> {
    /// One petgraph edge per connected unordered pair
    pub graph: UnGraph<&'a Node, PairLink>,
    /// Mapping from node ID to petgraph NodeIndex
    pub id_to_index: HashMap<&'a str, NodeIndex>,
    /// Sorted neighbor indices per node (self-loops excluded)
    pub adjacency: Vec<Vec<usize>>,
    /// The caller's edge list, unfiltered
    pub raw_edges: &'a [Edge],
    /// Indices into `raw_edges` that passed validation
    pub valid_edges: Vec<usize>,
}

impl<'a> NetworkGraph<'a> {
    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct undirected node pairs that are connected.
    pub fn pair_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Length of the caller's edge list, invalid edges included.
    pub fn raw_edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Number of raw edges excluded from analysis.
    pub fn excluded_edge_count(&self) -> usize {
        self.raw_edges.len() - self.valid_edges.len()
    }

    /// Node at a dense index.
    pub fn node(&self, index: usize) -> &'a Node {
        self.graph[NodeIndex::new(index)]
    }

    /// Dense index for a node ID.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).map(|idx| idx.index())
    }

    /// Undirected degree (distinct neighbors).
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency[index].len()
    }

    /// Whether two nodes share at least one valid edge.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].binary_search(&b).is_ok()
    }

    /// Aggregated link between two nodes, if any.
    pub fn link(&self, a: usize, b: usize) -> Option<&PairLink> {
        let edge = self
            .graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))?;
        self.graph.edge_weight(edge)
    }

    /// Strength of the link between two nodes, or 0 when unconnected.
    pub fn link_strength(&self, a: usize, b: usize) -> f64 {
        self.link(a, b).map_or(0.0, |l| l.strength)
    }

    /// Valid raw edges together with their endpoint indices.
    pub fn valid_edge_endpoints(&self) -> impl Iterator<Item = (&'a Edge, usize, usize)> + '_ {
        let raw_edges = self.raw_edges;
        self.valid_edges.iter().filter_map(move |&i| {
            let edge = &raw_edges[i];
            let s = self.index_of(&edge.source)?;
            let t = self.index_of(&edge.target)?;
            Some((edge, s, t))
        })
    }
}

// ============================================================================
// Output types — Metrics
// ============================================================================

/// Per-node structural metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCentrality {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Distinct undirected neighbors
    pub degree: usize,
    /// Degree / (n - 1), 0.0–1.0
    pub degree_centrality: f64,
    /// Degree scaled by the node's own weight
    pub weighted_degree: f64,
    /// Normalized betweenness, 0.0–1.0
    pub betweenness: f64,
    /// Closeness within the node's component, 0.0–1.0
    pub closeness: f64,
    /// Local clustering coefficient, 0.0–1.0
    pub clustering_coefficient: f64,
    /// Weakly connected component ID
    pub component_id: u32,
}

/// A node ranked by one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    pub id: String,
    pub name: String,
    pub value: f64,
}

/// Metadata about a weakly connected component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Component identifier (order of discovery)
    pub id: u32,
    /// Number of nodes in this component
    pub size: usize,
    /// Node IDs in input order
    pub members: Vec<String>,
    /// Whether this is a largest component
    pub is_main: bool,
}

/// Whole-network metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetrics {
    pub node_count: usize,
    /// Raw edge list length
    pub edge_count: usize,
    /// Edges dropped for dangling references or invalid weights
    pub excluded_edge_count: usize,
    pub density: f64,
    pub avg_degree: f64,
    pub avg_clustering_coefficient: f64,
    pub component_count: usize,
    pub largest_component_size: usize,
    /// Component summaries, largest first
    pub components: Vec<ComponentInfo>,
    /// Per-node metrics in input order
    pub nodes: Vec<NodeCentrality>,
    /// Every node by degree, descending, stable on input order
    pub top_by_degree: Vec<RankedNode>,
    /// Every node by betweenness, descending, stable on input order
    pub top_by_betweenness: Vec<RankedNode>,
}

impl NetworkMetrics {
    /// Metrics for one node.
    pub fn node(&self, id: &str) -> Option<&NodeCentrality> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// ============================================================================
// Output types — Patterns
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternType {
    Triangle,
    Hub,
    Clique,
    Bridge,
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Triangle => write!(f, "TRIANGLE"),
            Self::Hub => write!(f, "HUB"),
            Self::Clique => write!(f, "CLIQUE"),
            Self::Bridge => write!(f, "BRIDGE"),
        }
    }
}

/// A structural motif found in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub description: String,
    pub nodes: Vec<String>,
    /// 0.0–1.0, higher = more noteworthy
    pub significance: f64,
}

// ============================================================================
// Output types — Anomalies
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyType {
    IsolatedNode,
    UnexpectedHub,
    LowConfidenceHighImpact,
    ConflictingRelationship,
    ConfidenceMismatch,
}

impl std::fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IsolatedNode => write!(f, "ISOLATED_NODE"),
            Self::UnexpectedHub => write!(f, "UNEXPECTED_HUB"),
            Self::LowConfidenceHighImpact => write!(f, "LOW_CONFIDENCE_HIGH_IMPACT"),
            Self::ConflictingRelationship => write!(f, "CONFLICTING_RELATIONSHIP"),
            Self::ConfidenceMismatch => write!(f, "CONFIDENCE_MISMATCH"),
        }
    }
}

/// Anomaly severity, ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A structurally or statistically unusual finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAnomaly {
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    pub description: String,
    /// Suggested analyst action
    pub recommendation: String,
    pub severity: Severity,
    /// 0.0–1.0, higher = more unusual
    pub score: f64,
    pub node_ids: Vec<String>,
}

// ============================================================================
// Output types — Paths
// ============================================================================

/// A shortest path between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Node IDs from source to target, inclusive
    pub path: Vec<String>,
    /// Hop count (`path.len() - 1`)
    pub distance: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Tuning parameters for pattern and anomaly detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Hub pattern: standard deviations above mean degree (default: 1.5)
    pub hub_std_devs: f64,
    /// Hub pattern: minimum degree (default: 3)
    pub min_hub_degree: usize,
    /// Clique pattern: minimum members (default: 4)
    pub min_clique_size: usize,
    /// Unexpected-hub anomaly: degree z-score threshold (default: 2.0)
    pub anomaly_std_devs: f64,
    /// Betweenness at which an endpoint counts as high impact (default: 0.3)
    pub high_impact_betweenness: f64,
    /// Path enumeration depth when none is given (default: 5)
    pub default_max_depth: usize,
    /// Relationship type pairs that contradict each other
    pub conflicting_types: Vec<(String, String)>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            hub_std_devs: 1.5,
            min_hub_degree: 3,
            min_clique_size: 4,
            anomaly_std_devs: 2.0,
            high_impact_betweenness: 0.3,
            default_max_depth: 5,
            conflicting_types: [
                ("ALLIED_WITH", "ADVERSARY_OF"),
                ("SUPPORTS", "OPPOSES"),
                ("TRUSTS", "DISTRUSTS"),
                ("CONFIRMS", "CONTRADICTS"),
            ]
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
        }
    }
}

impl AnalyticsConfig {
    /// Clamp out-of-range values to usable minimums.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !self.hub_std_devs.is_finite() || self.hub_std_devs < 0.0 {
            self.hub_std_devs = defaults.hub_std_devs;
        }
        if !self.anomaly_std_devs.is_finite() || self.anomaly_std_devs <= 0.0 {
            self.anomaly_std_devs = defaults.anomaly_std_devs;
        }
        if !self.high_impact_betweenness.is_finite() {
            self.high_impact_betweenness = defaults.high_impact_betweenness;
        }
        self.high_impact_betweenness = self.high_impact_betweenness.clamp(0.0, 1.0);
        self.min_hub_degree = self.min_hub_degree.max(1);
        self.min_clique_size = self.min_clique_size.max(3);
        self.default_max_depth = self.default_max_depth.max(1);
        self.conflicting_types = self.conflict_pairs();
        self
    }

    /// Uppercased contradictory type pairs.
    ///
    /// Pairs naming one type twice are dropped, and a pair listed in both
    /// orientations is kept once, in the orientation seen first.
    pub fn conflict_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (a, b) in &self.conflicting_types {
            let (a, b) = (a.to_uppercase(), b.to_uppercase());
            if a == b {
                tracing::warn!("Ignoring conflicting type pair {} / {}: same type", a, b);
                continue;
            }
            let seen = pairs
                .iter()
                .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a));
            if !seen {
                pairs.push((a, b));
            }
        }
        pairs
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- AnalyticsConfig ---

    #[test]
    fn test_analytics_config_defaults() {
        let config = AnalyticsConfig::default();
        assert!((config.hub_std_devs - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.min_hub_degree, 3);
        assert_eq!(config.min_clique_size, 4);
        assert!((config.anomaly_std_devs - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.default_max_depth, 5);
        assert!(config
            .conflicting_types
            .contains(&("ALLIED_WITH".to_string(), "ADVERSARY_OF".to_string())));
    }

    #[test]
    fn test_analytics_config_normalized_clamps() {
        let config = AnalyticsConfig {
            hub_std_devs: -1.0,
            min_hub_degree: 0,
            min_clique_size: 1,
            anomaly_std_devs: f64::NAN,
            high_impact_betweenness: 4.0,
            default_max_depth: 0,
            conflicting_types: vec![("likes".to_string(), "Hates".to_string())],
        }
        .normalized();
        assert!((config.hub_std_devs - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.min_hub_degree, 1);
        assert_eq!(config.min_clique_size, 3);
        assert!((config.anomaly_std_devs - 2.0).abs() < f64::EPSILON);
        assert!((config.high_impact_betweenness - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.default_max_depth, 1);
        assert_eq!(
            config.conflicting_types,
            vec![("LIKES".to_string(), "HATES".to_string())]
        );
    }

    #[test]
    fn test_conflict_pairs_drop_self_pairs_and_duplicates() {
        let pair = |a: &str, b: &str| (a.to_string(), b.to_string());
        let config = AnalyticsConfig {
            conflicting_types: vec![
                pair("KNOWS", "knows"),
                pair("allied_with", "ADVERSARY_OF"),
                pair("ADVERSARY_OF", "ALLIED_WITH"),
                pair("Allied_With", "adversary_of"),
                pair("SUPPORTS", "OPPOSES"),
            ],
            ..AnalyticsConfig::default()
        }
        .normalized();

        assert_eq!(
            config.conflicting_types,
            vec![pair("ALLIED_WITH", "ADVERSARY_OF"), pair("SUPPORTS", "OPPOSES")]
        );
    }

    // --- Node / Edge ---

    #[test]
    fn test_node_deserializes_with_defaults_and_metadata() {
        let json = r#"{"id":"a1","name":"Cell Alpha","type":"ACTOR","momProfile":{"motive":"x"}}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "a1");
        assert_eq!(node.node_type, NodeType::Actor);
        assert!((node.weight - 1.0).abs() < f64::EPSILON);
        assert!(node.metadata.contains_key("momProfile"));
    }

    #[test]
    fn test_edge_deserializes_type_and_confidence() {
        let json = r#"{"source":"a","target":"b","type":"ALLIED_WITH","weight":0.4,"confidence":"SUSPECTED"}"#;
        let edge: Edge = serde_json::from_str(json).unwrap();
        assert_eq!(edge.edge_type, "ALLIED_WITH");
        assert_eq!(edge.confidence, Some(Confidence::Suspected));
        assert!(edge.metadata.is_empty());
        assert!((edge.strength() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::Suspected < Confidence::Possible);
        assert!(Confidence::Possible < Confidence::Probable);
        assert!(Confidence::Probable < Confidence::Confirmed);
        assert!(Confidence::Possible.is_low());
        assert!(!Confidence::Probable.is_low());
    }

    #[test]
    fn test_unlabeled_edge_scores_as_probable() {
        let edge = Edge::new("a", "b", "KNOWS");
        assert!((edge.strength() - Confidence::Probable.score()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strength_saturates_heavy_weights() {
        let edge = Edge::new("a", "b", "FUNDS")
            .with_weight(12.0)
            .with_confidence(Confidence::Confirmed);
        assert!((edge.strength() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_severity_ordering() {
        let mut severities = vec![
            Severity::Medium,
            Severity::Critical,
            Severity::Low,
            Severity::High,
        ];
        severities.sort_by(|a, b| b.cmp(a));
        assert_eq!(
            severities,
            vec![
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::Low
            ]
        );
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(NodeType::Evidence.to_string(), "EVIDENCE");
        assert_eq!(PatternType::Triangle.to_string(), "TRIANGLE");
        assert_eq!(
            AnomalyType::ConflictingRelationship.to_string(),
            "CONFLICTING_RELATIONSHIP"
        );
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_metrics_serialize_camel_case() {
        let metrics = NetworkMetrics {
            node_count: 0,
            edge_count: 0,
            excluded_edge_count: 0,
            density: 0.0,
            avg_degree: 0.0,
            avg_clustering_coefficient: 0.0,
            component_count: 0,
            largest_component_size: 0,
            components: vec![ComponentInfo {
                id: 0,
                size: 1,
                members: vec!["a".to_string()],
                is_main: true,
            }],
            nodes: vec![NodeCentrality {
                id: "a".to_string(),
                name: "A".to_string(),
                node_type: NodeType::Actor,
                degree: 0,
                degree_centrality: 0.0,
                weighted_degree: 0.0,
                betweenness: 0.0,
                closeness: 0.0,
                clustering_coefficient: 0.0,
                component_id: 0,
            }],
            top_by_degree: vec![],
            top_by_betweenness: vec![],
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert!(json.get("largestComponentSize").is_some());
        assert!(json.get("avgClusteringCoefficient").is_some());

        let node = &json["nodes"][0];
        assert!(node.get("degreeCentrality").is_some());
        assert!(node.get("weightedDegree").is_some());
        assert!(node.get("clusteringCoefficient").is_some());
        assert!(node.get("componentId").is_some());
        assert!(node.get("degree_centrality").is_none());
        assert_eq!(node["type"], "ACTOR");
        assert_eq!(json["components"][0]["isMain"], true);
    }
}
