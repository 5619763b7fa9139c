//! Network Analytics - CLI
//!
//! Runs the analytics on a JSON snapshot (`{"nodes": [...], "edges": [...]}`)
//! and prints the result as JSON on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use network_analytics::{AnalyticsConfig, AnalyticsEngine, GraphSnapshot, NetworkAnalyticsEngine};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "netgraph")]
#[command(about = "Network analytics over entity/relationship snapshots")]
struct Cli {
    /// JSON snapshot file (`-` for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// YAML config file (defaults to ./network-analytics.yaml when present)
    #[arg(short, long, env = "NETWORK_ANALYTICS_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Network and per-node metrics
    Metrics,

    /// Structural patterns (triangles, hubs, cliques, bridges)
    Patterns,

    /// Anomalies for analyst review
    Anomalies,

    /// Metrics, patterns and anomalies together
    Report,

    /// Shortest path between two entities
    Path {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },

    /// All simple paths between two entities
    Paths {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Maximum hops (defaults to the configured depth)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Print at most this many paths, shortest first
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,network_analytics=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AnalyticsConfig::from_yaml_and_env(cli.config.as_deref())?;
    let engine = NetworkAnalyticsEngine::new(config);
    let snapshot = read_snapshot(&cli.input)?;
    let (nodes, edges) = (&snapshot.nodes, &snapshot.edges);
    tracing::debug!("Loaded {} nodes, {} edges", nodes.len(), edges.len());

    match cli.command {
        Commands::Metrics => print_json(&engine.metrics(nodes, edges), cli.pretty),
        Commands::Patterns => print_json(&engine.patterns(nodes, edges), cli.pretty),
        Commands::Anomalies => print_json(&engine.anomalies(nodes, edges), cli.pretty),
        Commands::Report => print_json(&engine.analyze(nodes, edges), cli.pretty),
        Commands::Path { from, to } => {
            let result = engine.shortest_path(&from, &to, nodes, edges);
            if result.is_none() {
                tracing::info!("No path between {} and {}", from, to);
            }
            print_json(&result, cli.pretty)
        }
        Commands::Paths {
            from,
            to,
            max_depth,
            limit,
        } => {
            let mut paths = engine.all_paths(&from, &to, nodes, edges, max_depth);
            paths.sort_by_key(Vec::len);
            if let Some(limit) = limit {
                paths.truncate(limit);
            }
            print_json(&paths, cli.pretty)
        }
    }
}

fn read_snapshot(input: &str) -> Result<GraphSnapshot> {
    let contents = if input == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read snapshot from stdin")?
    } else {
        std::fs::read_to_string(Path::new(input))
            .with_context(|| format!("Failed to read snapshot {}", input))?
    };
    serde_json::from_str(&contents).context("Snapshot is not valid {nodes, edges} JSON")
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
