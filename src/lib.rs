//! Benchlab - suite registry and selection state for side-by-side benchmarks
//!
//! Benchlab pairs up two implementations of the same cryptographic primitive
//! ("us" and "them") under named suites, and tracks which suites the user has
//! selected for a run.

pub use benchlab_core;
pub use benchlab_suites;

use benchlab_core::Result;

/// Unified prelude module that exports all commonly used types
pub mod prelude {
    pub use benchlab_core::prelude::*;
    pub use benchlab_suites::BuiltinSuites;
}

/// Initialize logging and the core crate in one call.
pub fn init() -> Result<()> {
    benchlab_core::logging::init();
    benchlab_core::init()
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init() {
        let result = init();
        assert!(result.is_ok());
    }
}
