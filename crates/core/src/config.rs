//! Report configuration and invocation parameters
//!
//! Parsing is pure: the shell reads the file and hands the contents here.

use serde::{Deserialize, Serialize};

use crate::aggregate::{DEFAULT_TOP_BY_NAME, DEFAULT_TOP_HEAVIEST};

pub const DEFAULT_LIMIT: usize = 200;
pub const DEFAULT_DETAIL_COUNT: usize = 20;
pub const DEFAULT_WEIGHT_THRESHOLD: u64 = 100;
pub const DEFAULT_SEARCH_PREFIX: &str = "b";
pub const DEFAULT_TYPE_FILTER: &str = "fire";

/// Error type for configuration parsing
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Parameters every aggregation reads, passed explicitly into each call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Decagrams; used by the "heavier than" check
    pub weight_threshold: u64,
    pub search_prefix: String,
    pub type_filter: String,
    pub top_heaviest: usize,
    pub top_by_name: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            weight_threshold: DEFAULT_WEIGHT_THRESHOLD,
            search_prefix: DEFAULT_SEARCH_PREFIX.to_string(),
            type_filter: DEFAULT_TYPE_FILTER.to_string(),
            top_heaviest: DEFAULT_TOP_HEAVIEST,
            top_by_name: DEFAULT_TOP_BY_NAME,
        }
    }
}

/// Field-by-field overrides, typically from CLI flags or environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub weight_threshold: Option<u64>,
    pub search_prefix: Option<String>,
    pub type_filter: Option<String>,
    pub top_heaviest: Option<usize>,
    pub top_by_name: Option<usize>,
}

impl ReportConfig {
    /// Apply overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(threshold) = overrides.weight_threshold {
            self.weight_threshold = threshold;
        }
        if let Some(prefix) = overrides.search_prefix {
            self.search_prefix = prefix;
        }
        if let Some(type_filter) = overrides.type_filter {
            self.type_filter = type_filter;
        }
        if let Some(n) = overrides.top_heaviest {
            self.top_heaviest = n;
        }
        if let Some(n) = overrides.top_by_name {
            self.top_by_name = n;
        }
        self
    }
}

/// Parse a TOML config file. Missing keys keep their defaults.
pub fn parse_config(contents: &str) -> Result<ReportConfig, ConfigError> {
    let config: ReportConfig =
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if config.type_filter.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "type_filter",
            reason: "must not be empty".to_string(),
        });
    }

    Ok(config)
}

/// Resolve a count parameter: absent, unparsable or non-positive input
/// falls back to `default`
pub fn resolve_count(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Listing size and how many of the listed entries get detailed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineParams {
    pub limit: usize,
    pub detail_count: usize,
}

impl PipelineParams {
    pub fn resolve(limit: Option<&str>, detail_count: Option<&str>) -> Self {
        Self {
            limit: resolve_count(limit, DEFAULT_LIMIT),
            detail_count: resolve_count(detail_count, DEFAULT_DETAIL_COUNT),
        }
    }
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            detail_count: DEFAULT_DETAIL_COUNT,
        }
    }
}
