//! Executor configuration

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How static edge conditions are quantified over parallel edges.
///
/// Only consulted for multigraph hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EdgeMatchMode {
    /// Every parallel edge satisfies every condition.
    All,
    /// The parallel edges together cover every condition.
    #[default]
    Any,
}

impl EdgeMatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeMatchMode::All => "all",
            EdgeMatchMode::Any => "any",
        }
    }
}

impl FromStr for EdgeMatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(EdgeMatchMode::All),
            "any" => Ok(EdgeMatchMode::Any),
            _ => Err(ConfigError::invalid_edge_match_mode(s)),
        }
    }
}

impl TryFrom<String> for EdgeMatchMode {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EdgeMatchMode> for String {
    fn from(mode: EdgeMatchMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for EdgeMatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for an [`Executor`](crate::Executor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Quantifier for edge conditions in multigraphs
    pub edge_match: EdgeMatchMode,
    /// Hand the memoized node predicate to the oracle so it can prune the
    /// search. Node conditions are validated after matching either way.
    pub oracle_pruning: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            edge_match: EdgeMatchMode::Any,
            oracle_pruning: true,
        }
    }
}

impl ExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_match(mut self, mode: EdgeMatchMode) -> Self {
        self.edge_match = mode;
        self
    }

    pub fn with_oracle_pruning(mut self, enabled: bool) -> Self {
        self.oracle_pruning = enabled;
        self
    }

    /// Load a config from JSON. Missing fields take their defaults.
    ///
    /// An unknown edge match mode is reported as
    /// [`ConfigError::InvalidEdgeMatchMode`]; anything else that fails to
    /// parse is [`ConfigError::Malformed`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            serde_json::from_str(json).map_err(|e| ConfigError::malformed(e.to_string()))?;
        let mut config = Self::default();
        if let Some(mode) = file.edge_match {
            config.edge_match = mode.parse()?;
        }
        if let Some(enabled) = file.oracle_pruning {
            config.oracle_pruning = enabled;
        }
        Ok(config)
    }
}

/// JSON form of [`ExecutorConfig`] with the mode left unparsed.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    edge_match: Option<String>,
    oracle_pruning: Option<bool>,
}
