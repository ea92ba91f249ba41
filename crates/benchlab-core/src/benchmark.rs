//! Benchmark tables and the ours/theirs merge
//!
//! A suite's benchmarks come from two independently supplied tables, one per
//! implementation. [`Benchmarks::merged`] pairs them up by benchmark name so
//! a consumer sees one entry per name, with whichever sides exist.

use std::fmt;
use std::sync::Arc;

/// An opaque benchmark routine for one implementation
pub type BenchmarkFn = Arc<dyn Fn() + Send + Sync>;

/// Insertion-ordered table of benchmark name -> routine.
///
/// Iteration order is part of the contract: consumers render benchmarks in the
/// order an implementation declares them.
#[derive(Clone, Default)]
pub struct BenchmarkTable {
    entries: Vec<(&'static str, BenchmarkFn)>,
}

impl BenchmarkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a benchmark, builder style. Re-adding a name replaces the routine
    /// in place without changing its position.
    pub fn with<F>(mut self, name: &'static str, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(f));
        self
    }

    pub fn insert(&mut self, name: &'static str, f: BenchmarkFn) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = f,
            None => self.entries.push((name, f)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&BenchmarkFn> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, f)| f)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &BenchmarkFn)> {
        self.entries.iter().map(|(n, f)| (*n, f))
    }
}

impl fmt::Debug for BenchmarkTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(n, _)| n))
            .finish()
    }
}

/// The two candidate routines for one benchmark name.
///
/// At least one side is always present: the merge only creates entries for
/// names that appear in at least one source table.
#[derive(Clone)]
pub struct BenchmarkPair {
    pub us: Option<BenchmarkFn>,
    pub them: Option<BenchmarkFn>,
}

impl BenchmarkPair {
    pub fn has_us(&self) -> bool {
        self.us.is_some()
    }

    pub fn has_them(&self) -> bool {
        self.them.is_some()
    }

    /// Both implementations are present and directly comparable
    pub fn is_complete(&self) -> bool {
        self.has_us() && self.has_them()
    }
}

impl fmt::Debug for BenchmarkPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkPair")
            .field("us", &self.has_us())
            .field("them", &self.has_them())
            .finish()
    }
}

/// Insertion-ordered mapping of benchmark name -> [`BenchmarkPair`]
#[derive(Clone, Default)]
pub struct Benchmarks {
    entries: Vec<(&'static str, BenchmarkPair)>,
}

impl Benchmarks {
    /// Merge an "ours" table with a "theirs" baseline table.
    ///
    /// Every name in `ours` gets an entry pairing it with the matching
    /// `theirs` routine if one exists; names only `theirs` knows are appended
    /// afterwards. The resulting order is all `ours` names in declaration
    /// order, then `theirs`-only names in declaration order.
    pub fn merged(ours: &BenchmarkTable, theirs: &BenchmarkTable) -> Self {
        let mut entries = Vec::with_capacity(ours.len() + theirs.len());
        for (name, f) in ours.iter() {
            entries.push((
                name,
                BenchmarkPair {
                    us: Some(f.clone()),
                    them: theirs.get(name).cloned(),
                },
            ));
        }
        for (name, f) in theirs.iter() {
            if !ours.contains(name) {
                entries.push((
                    name,
                    BenchmarkPair {
                        us: None,
                        them: Some(f.clone()),
                    },
                ));
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&BenchmarkPair> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &BenchmarkPair)> {
        self.entries.iter().map(|(n, p)| (*n, p))
    }

    /// Benchmark names in iteration order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }
}

impl fmt::Debug for Benchmarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|(n, p)| (n, p))).finish()
    }
}
