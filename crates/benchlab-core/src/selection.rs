//! Selection state
//!
//! Owns the [`SuiteRegistry`] and mediates all mutation of the selection
//! flags. State lives behind a single `RwLock`; `read` hands out snapshot
//! clones so callers never alias live state, and every mutating operation
//! notifies registered change listeners with a post-mutation snapshot.

use crate::error::Result;
use crate::registry::{ImplementationProvider, SuiteRegistry};
use crate::suite::Suite;
use parking_lot::RwLock;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::debug;

/// Callback invoked with a registry snapshot after each mutation
pub type ChangeListener = Box<dyn Fn(&SuiteRegistry) + Send + Sync>;

/// Holder of the suite registry and its selection flags
pub struct SelectionState {
    registry: Arc<RwLock<SuiteRegistry>>,
    listeners: Arc<RwLock<SmallVec<[ChangeListener; 2]>>>,
}

impl SelectionState {
    /// Wrap an already-built registry
    pub fn new(registry: SuiteRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            listeners: Arc::new(RwLock::new(SmallVec::new())),
        }
    }

    /// Build the registry from `provider` and wrap it.
    ///
    /// Fails if any declared suite cannot be resolved; see
    /// [`SuiteRegistry::from_provider`].
    pub fn from_provider<P: ImplementationProvider>(provider: &P) -> Result<Self> {
        Ok(Self::new(SuiteRegistry::from_provider(provider)?))
    }

    /// Snapshot of the current registry, no side effects
    pub fn read(&self) -> SuiteRegistry {
        self.registry.read().clone()
    }

    pub fn is_selected(&self, suite: Suite) -> bool {
        self.registry.read().get(suite).is_selected()
    }

    /// Suites currently flagged for a run, in declaration order
    pub fn selected(&self) -> Vec<Suite> {
        self.registry.read().selected()
    }

    /// Flip the selection flag for one suite
    pub fn toggle(&self, suite: Suite) {
        let now = {
            let mut registry = self.registry.write();
            registry.toggle(suite);
            registry.get(suite).is_selected()
        };
        debug!(suite = %suite, selected = now, "toggled suite");
        self.notify();
    }

    /// Set every suite's flag to true
    pub fn select_all(&self) {
        self.registry.write().set_all(true);
        debug!("selected all suites");
        self.notify();
    }

    /// Set every suite's flag to false
    pub fn deselect_all(&self) {
        self.registry.write().set_all(false);
        debug!("deselected all suites");
        self.notify();
    }

    /// Register a listener invoked with a snapshot after every mutation
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&SuiteRegistry) + Send + Sync + 'static,
    {
        self.listeners.write().push(Box::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.read();
        let listeners = self.listeners.read();
        for listener in listeners.iter() {
            listener(&snapshot);
        }
    }
}

impl Clone for SelectionState {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkTable;
    use crate::registry::SuiteImplementations;

    struct Tables;

    impl ImplementationProvider for Tables {
        fn implementations(&self, _suite: Suite) -> Option<SuiteImplementations> {
            Some(SuiteImplementations {
                ours: BenchmarkTable::new().with("one", || {}),
                theirs: BenchmarkTable::new().with("two", || {}),
            })
        }
    }

    fn state() -> SelectionState {
        SelectionState::from_provider(&Tables).unwrap()
    }

    #[test]
    fn test_initially_deselected() {
        let state = state();
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let state = state();
        state.toggle(Suite::Random);
        assert!(state.is_selected(Suite::Random));
        assert!(!state.is_selected(Suite::Pbkdf2));

        state.toggle(Suite::Random);
        assert!(!state.is_selected(Suite::Random));
        assert!(!state.is_selected(Suite::Pbkdf2));
    }

    #[test]
    fn test_select_all_then_deselect_all() {
        let state = state();
        state.toggle(Suite::Pbkdf2);

        state.select_all();
        assert_eq!(state.selected(), Suite::ALL.to_vec());

        state.deselect_all();
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_read_is_a_snapshot() {
        let state = state();
        let before = state.read();
        state.toggle(Suite::Random);
        assert!(!before.get(Suite::Random).is_selected());
        assert!(state.read().get(Suite::Random).is_selected());
    }

    #[test]
    fn test_listeners_see_every_mutation() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let state = state();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        state.on_change(move |registry| {
            assert_eq!(registry.len(), Suite::ALL.len());
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        state.toggle(Suite::Random);
        state.select_all();
        state.deselect_all();
        let _ = state.read();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
