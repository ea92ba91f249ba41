//! Built-in benchmark implementation tables for benchlab
//!
//! Supplies the per-suite "us"/"them" tables the core registry merges. "Us"
//! is the `ring`-backed stack; "them" are pure-Rust baseline crates.

pub mod pbkdf2;
pub mod random;

use benchlab_core::registry::{ImplementationProvider, SuiteImplementations};
use benchlab_core::selection::SelectionState;
use benchlab_core::suite::Suite;
use benchlab_core::{Result, SuiteRegistry};

/// Provider backed by the suite modules in this crate
pub struct BuiltinSuites;

impl ImplementationProvider for BuiltinSuites {
    fn implementations(&self, suite: Suite) -> Option<SuiteImplementations> {
        let (ours, theirs) = match suite {
            Suite::Random => (random::ours(), random::theirs()),
            Suite::Pbkdf2 => (pbkdf2::ours(), pbkdf2::theirs()),
        };
        Some(SuiteImplementations { ours, theirs })
    }
}

/// Build the registry from the built-in suites
pub fn registry() -> Result<SuiteRegistry> {
    SuiteRegistry::from_provider(&BuiltinSuites)
}

/// Build a selection state over the built-in suites
pub fn selection_state() -> Result<SelectionState> {
    SelectionState::from_provider(&BuiltinSuites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_declared_suite_resolves() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), Suite::ALL.len());
        for (_, suite) in registry.iter() {
            assert!(!suite.benchmarks().is_empty());
        }
    }

    #[test]
    fn test_random_suite_has_paired_and_one_sided_entries() {
        let registry = registry().unwrap();
        let benchmarks = registry.get(Suite::Random).benchmarks();

        assert!(benchmarks.get("random-bytes-1k").unwrap().is_complete());
        let ours_only = benchmarks.get("random-u64").unwrap();
        assert!(ours_only.has_us() && !ours_only.has_them());
        let theirs_only = benchmarks.get("random-stdrng-1k").unwrap();
        assert!(!theirs_only.has_us() && theirs_only.has_them());

        // ours names first, theirs-only appended
        assert_eq!(
            benchmarks.names(),
            vec![
                "random-bytes-32",
                "random-bytes-1k",
                "random-bytes-16k",
                "random-u64",
                "random-stdrng-1k",
            ]
        );
    }

    #[test]
    fn test_pbkdf2_suite_is_fully_comparable() {
        let registry = registry().unwrap();
        let benchmarks = registry.get(Suite::Pbkdf2).benchmarks();
        assert_eq!(benchmarks.len(), 3);
        for (_, pair) in benchmarks.iter() {
            assert!(pair.is_complete());
        }
    }

    #[test]
    fn test_routines_run() {
        let registry = registry().unwrap();
        for (_, suite) in registry.iter() {
            for (name, pair) in suite.benchmarks().iter() {
                // skip the 10k-iteration derivations to keep the test quick
                if name.ends_with("-10k") {
                    continue;
                }
                if let Some(us) = &pair.us {
                    us();
                }
                if let Some(them) = &pair.them {
                    them();
                }
            }
        }
    }
}
