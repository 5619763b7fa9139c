//! Configuration loading.
//!
//! Priority: env var > YAML > default. The YAML file may set any subset
//! of [`AnalyticsConfig`] fields; missing fields keep their defaults.
//!
//! Env overrides (`NETWORK_ANALYTICS_*`):
//! `HUB_STD_DEVS`, `MIN_HUB_DEGREE`, `MIN_CLIQUE_SIZE`, `ANOMALY_STD_DEVS`,
//! `HIGH_IMPACT_BETWEENNESS`, `MAX_DEPTH`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::graph::AnalyticsConfig;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "network-analytics.yaml";

const ENV_PREFIX: &str = "NETWORK_ANALYTICS_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl AnalyticsConfig {
    /// Parse a YAML config file. Values are not yet clamped.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// An explicit `yaml_path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is used when present and defaults otherwise.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match yaml_path {
            Some(path) => {
                let config = Self::from_yaml_file(path)?;
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    let config = Self::from_yaml_file(default_path)?;
                    tracing::info!("Loaded config from {}", default_path.display());
                    config
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };

        Ok(apply_overrides(base, |key| std::env::var(key).ok()).normalized())
    }
}

fn parse_override<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let key = format!("{}{}", ENV_PREFIX, name);
    let raw = lookup(&key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

/// Apply `NETWORK_ANALYTICS_*` overrides found through `lookup`.
pub(crate) fn apply_overrides(
    mut config: AnalyticsConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AnalyticsConfig {
    if let Some(v) = parse_override(&lookup, "HUB_STD_DEVS") {
        config.hub_std_devs = v;
    }
    if let Some(v) = parse_override(&lookup, "MIN_HUB_DEGREE") {
        config.min_hub_degree = v;
    }
    if let Some(v) = parse_override(&lookup, "MIN_CLIQUE_SIZE") {
        config.min_clique_size = v;
    }
    if let Some(v) = parse_override(&lookup, "ANOMALY_STD_DEVS") {
        config.anomaly_std_devs = v;
    }
    if let Some(v) = parse_override(&lookup, "HIGH_IMPACT_BETWEENNESS") {
        config.high_impact_betweenness = v;
    }
    if let Some(v) = parse_override(&lookup, "MAX_DEPTH") {
        config.default_max_depth = v;
    }
    config
}
