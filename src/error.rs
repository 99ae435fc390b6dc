//! Error taxonomy for search execution and configuration loading.

use thiserror::Error;

/// Errors produced while executing a single tracker search.
///
/// A failing search is fatal to its own batch: the joiner propagates the
/// first error unchanged and no partial result is returned.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search is set up in a way no backend can serve (e.g. an empty
    /// assignee list). Fatal to this search only; sibling searches keep
    /// running.
    #[error("unsupported search configuration: {0}")]
    Configuration(String),

    /// The backend call failed. Propagated unchanged, no retry.
    #[error("backend request failed: {0}")]
    Network(String),
}

impl SearchError {
    /// Wraps a transport-level failure as a [`SearchError::Network`].
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }
}

/// Errors produced while loading or validating the dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration parsed but violates a structural rule.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
