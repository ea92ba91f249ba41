//! Suite identifiers
//!
//! Suites are a closed set fixed at build time. Operations that take a suite
//! are parameterized over this enum, so a lookup with an unknown name cannot
//! be expressed by callers.

use crate::error::BenchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named group of comparable benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    Random,
    Pbkdf2,
}

impl Suite {
    /// Every declared suite, in registry iteration order
    pub const ALL: [Suite; 2] = [Suite::Random, Suite::Pbkdf2];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Suite::Random => "random",
            Suite::Pbkdf2 => "pbkdf2",
        }
    }

    /// Human-readable name for display surfaces
    pub const fn label(&self) -> &'static str {
        match self {
            Suite::Random => "Random",
            Suite::Pbkdf2 => "PBKDF2",
        }
    }

    /// Position within [`Suite::ALL`]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suite {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Suite::Random),
            "pbkdf2" => Ok(Suite::Pbkdf2),
            other => Err(BenchError::configuration(format!(
                "unknown suite '{other}'"
            ))),
        }
    }
}
