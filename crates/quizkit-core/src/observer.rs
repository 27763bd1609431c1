//! Taxonomy diagnostics
//!
//! Observer hooks invoked at defined points of the registry lifecycle.
//! All hooks are informational: implementations must not influence what the
//! registry builds or returns.

/// Diagnostics collaborator injected into [`CategoryRegistry`].
///
/// Every hook has an empty default body, so implementations override only
/// the events they care about.
///
/// [`CategoryRegistry`]: crate::CategoryRegistry
pub trait TaxonomyObserver {
    /// Construction is starting with the given normalized section sizes.
    fn build_started(&self, main_count: usize, sub_group_count: usize) {
        let _ = (main_count, sub_group_count);
    }

    /// Construction finished; `total` counts main and sub entries together.
    fn build_finished(&self, total: usize) {
        let _ = total;
    }

    /// An id was registered more than once across the flat namespace.
    /// The later entry has replaced the earlier one.
    fn duplicate_id(&self, id: &str) {
        let _ = id;
    }

    /// A sub group referenced a main id that does not exist; the group was
    /// ignored.
    fn unknown_sub_group(&self, main_id: &str) {
        let _ = main_id;
    }

    /// A lookup asked for an id the registry does not contain.
    fn lookup_missed(&self, id: &str) {
        let _ = id;
    }
}

/// Observer that emits `tracing` events. The default for
/// [`CategoryRegistry::new`](crate::CategoryRegistry::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TaxonomyObserver for TracingObserver {
    fn build_started(&self, main_count: usize, sub_group_count: usize) {
        tracing::debug!(main_count, sub_group_count, "building category registry");
    }

    fn build_finished(&self, total: usize) {
        tracing::debug!(total, "category registry built");
    }

    fn duplicate_id(&self, id: &str) {
        tracing::warn!(id, "duplicate category id, last definition wins");
    }

    fn unknown_sub_group(&self, main_id: &str) {
        tracing::warn!(main_id, "sub group references unknown main category");
    }

    fn lookup_missed(&self, id: &str) {
        tracing::warn!(id, "category lookup missed");
    }
}

/// Observer that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TaxonomyObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        misses: AtomicUsize,
    }

    impl TaxonomyObserver for CountingObserver {
        fn lookup_missed(&self, _id: &str) {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let observer = CountingObserver::default();
        observer.build_started(2, 1);
        observer.build_finished(3);
        observer.duplicate_id("a");
        observer.unknown_sub_group("b");
        assert_eq!(observer.misses.load(Ordering::Relaxed), 0);

        observer.lookup_missed("c");
        assert_eq!(observer.misses.load(Ordering::Relaxed), 1);
    }
}
