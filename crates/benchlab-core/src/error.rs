//! Error types for benchlab

use crate::suite::Suite;
use thiserror::Error;

/// Main error type for benchlab operations
#[derive(Debug, Error)]
pub enum BenchError {
    /// A declared suite has no implementation tables. The suite list and the
    /// implementation registry are both fixed at build time, so this is a
    /// configuration defect and startup must halt.
    #[error("missing implementations for suite '{0}'")]
    MissingSuiteImplementations(Suite),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("other error: {0}")]
    Other(String),
}

impl BenchError {
    /// Create a configuration error from a string
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an other error from a string
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for benchlab operations
pub type Result<T> = std::result::Result<T, BenchError>;
