//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;
use crate::network::{BuildConfig, DuplicateSegments};
use crate::planner::RouteConfig;

/// Path to the edge dataset (CSV or JSON). Required.
pub const DATASET_VAR: &str = "ROUTE_DATASET";

/// Path to the attraction table (CSV or JSON). Optional.
pub const ATTRACTIONS_VAR: &str = "ROUTE_ATTRACTIONS";

/// Listen address. Defaults to [`DEFAULT_BIND`].
pub const BIND_VAR: &str = "ROUTE_BIND";

/// Keep parallel segments instead of replacing them.
pub const KEEP_PARALLEL_VAR: &str = "ROUTE_KEEP_PARALLEL";

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Errors reading the server configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub dataset: PathBuf,
    pub attractions: Option<PathBuf>,
    pub bind: SocketAddr,
    pub build: BuildConfig,
    pub route: RouteConfig,
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of
    /// a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let dataset = non_empty(DATASET_VAR)
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(DATASET_VAR))?;

        let attractions = non_empty(ATTRACTIONS_VAR).map(PathBuf::from);

        let bind_value = non_empty(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var: BIND_VAR,
                value: bind_value.clone(),
            })?;

        let keep_parallel = match non_empty(KEEP_PARALLEL_VAR) {
            None => false,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                var: KEEP_PARALLEL_VAR,
                value,
            })?,
        };
        let duplicate_segments = if keep_parallel {
            DuplicateSegments::Keep
        } else {
            DuplicateSegments::Replace
        };

        Ok(Self {
            dataset,
            attractions,
            bind,
            build: BuildConfig::new(duplicate_segments),
            route: RouteConfig::default(),
            cache: CacheConfig::default(),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
