//! Core functionality for benchlab
//!
//! This crate provides the suite registry and selection state that back the
//! benchmark picker: merging paired "us"/"them" implementation tables into
//! per-suite benchmark lists, and tracking which suites are selected.

pub mod benchmark;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod selection;
pub mod suite;

pub use benchmark::{BenchmarkFn, BenchmarkPair, BenchmarkTable, Benchmarks};
pub use config::{BenchConfig, ConfigManager};
pub use error::{BenchError, Result};
pub use registry::{BenchmarkSuite, ImplementationProvider, SuiteImplementations, SuiteRegistry};
pub use selection::SelectionState;
pub use suite::Suite;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        benchmark::{BenchmarkFn, BenchmarkPair, BenchmarkTable, Benchmarks},
        error::{BenchError, Result},
        registry::{BenchmarkSuite, ImplementationProvider, SuiteImplementations, SuiteRegistry},
        selection::SelectionState,
        suite::Suite,
    };
}

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core crate
pub fn init() -> Result<()> {
    tracing::info!("benchlab core v{} initialized", VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
