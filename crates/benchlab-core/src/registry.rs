//! Suite registry construction
//!
//! The registry maps every declared [`Suite`] to its merged benchmark list
//! plus a selection flag. Construction resolves and validates every suite up
//! front: a provider that cannot supply both implementation tables for a
//! declared suite is a configuration defect, and startup halts.

use crate::benchmark::{BenchmarkTable, Benchmarks};
use crate::error::{BenchError, Result};
use crate::suite::Suite;
use tracing::debug;

/// The two implementation tables backing one suite
#[derive(Clone, Default)]
pub struct SuiteImplementations {
    pub ours: BenchmarkTable,
    pub theirs: BenchmarkTable,
}

/// Source of per-suite implementation tables.
///
/// Implemented by the benchmark-function modules; `None` means the provider
/// has no tables for that suite, which registry construction treats as fatal.
pub trait ImplementationProvider {
    fn implementations(&self, suite: Suite) -> Option<SuiteImplementations>;
}

/// One suite's merged benchmarks plus its selection flag.
///
/// `benchmarks` is immutable after construction; only `selected` changes, and
/// only through [`SelectionState`](crate::selection::SelectionState).
#[derive(Clone, Debug)]
pub struct BenchmarkSuite {
    selected: bool,
    benchmarks: Benchmarks,
}

impl BenchmarkSuite {
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }
}

/// All declared suites, keyed by [`Suite`], iteration order = declaration order
#[derive(Clone, Debug)]
pub struct SuiteRegistry {
    // Indexed by Suite::index(); construction fills every slot.
    suites: Vec<BenchmarkSuite>,
}

impl SuiteRegistry {
    /// Build the registry, resolving every declared suite through `provider`.
    ///
    /// Every suite starts deselected. Fails with
    /// [`BenchError::MissingSuiteImplementations`] on the first suite the
    /// provider cannot resolve.
    pub fn from_provider<P: ImplementationProvider>(provider: &P) -> Result<Self> {
        let mut suites = Vec::with_capacity(Suite::ALL.len());
        for suite in Suite::ALL {
            let imps = provider
                .implementations(suite)
                .ok_or(BenchError::MissingSuiteImplementations(suite))?;
            let benchmarks = Benchmarks::merged(&imps.ours, &imps.theirs);
            debug!(
                suite = %suite,
                ours = imps.ours.len(),
                theirs = imps.theirs.len(),
                merged = benchmarks.len(),
                "resolved suite"
            );
            suites.push(BenchmarkSuite {
                selected: false,
                benchmarks,
            });
        }
        Ok(Self { suites })
    }

    pub fn get(&self, suite: Suite) -> &BenchmarkSuite {
        &self.suites[suite.index()]
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Suites in declaration order with their state
    pub fn iter(&self) -> impl Iterator<Item = (Suite, &BenchmarkSuite)> {
        Suite::ALL.into_iter().zip(self.suites.iter())
    }

    /// Suites currently flagged for a run, in declaration order
    pub fn selected(&self) -> Vec<Suite> {
        self.iter()
            .filter(|(_, s)| s.is_selected())
            .map(|(suite, _)| suite)
            .collect()
    }

    pub(crate) fn toggle(&mut self, suite: Suite) {
        let entry = &mut self.suites[suite.index()];
        entry.selected = !entry.selected;
    }

    pub(crate) fn set_all(&mut self, selected: bool) {
        for entry in &mut self.suites {
            entry.selected = selected;
        }
    }
}
