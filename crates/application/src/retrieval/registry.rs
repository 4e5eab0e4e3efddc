//! In-flight retrieval tracking.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The set of WSDL locations currently being retrieved.
///
/// A location is inserted atomically with acceptance of its request and
/// removed exactly once when the operation reaches a terminal outcome.
/// This set is the single source of truth for "is this WSDL already being
/// fetched"; resolved services live in the container, which is consulted
/// separately.
#[derive(Debug, Default)]
pub struct InFlightRegistry {
    entries: Mutex<HashSet<String>>,
}

impl InFlightRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically accepts `location` if it is not already in flight.
    ///
    /// Returns `true` when the location was inserted (the caller now owns
    /// the retrieval), `false` when a retrieval for it is already running.
    pub fn try_accept(&self, location: &str) -> bool {
        let mut entries = self.lock();
        if entries.contains(location) {
            return false;
        }
        entries.insert(location.to_string());
        true
    }

    /// Removes `location` from the in-flight set.
    ///
    /// Idempotent: releasing a location that is not present is a no-op.
    pub fn release(&self, location: &str) {
        self.lock().remove(location);
    }

    /// Whether a retrieval for `location` is currently in flight.
    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.lock().contains(location)
    }

    /// Number of in-flight retrievals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_accept_then_reject() {
        let registry = InFlightRegistry::new();
        assert!(registry.try_accept("http://a/?wsdl"));
        assert!(!registry.try_accept("http://a/?wsdl"));
        assert!(registry.contains("http://a/?wsdl"));
    }

    #[test]
    fn test_release_is_idempotent() {
        let registry = InFlightRegistry::new();
        assert!(registry.try_accept("http://a/?wsdl"));
        registry.release("http://a/?wsdl");
        registry.release("http://a/?wsdl");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_release_absent_is_noop() {
        let registry = InFlightRegistry::new();
        registry.release("http://never-accepted/?wsdl");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_accept_again_after_release() {
        let registry = InFlightRegistry::new();
        assert!(registry.try_accept("http://a/?wsdl"));
        registry.release("http://a/?wsdl");
        assert!(registry.try_accept("http://a/?wsdl"));
    }

    #[test]
    fn test_concurrent_accept_admits_exactly_one() {
        let registry = Arc::new(InFlightRegistry::new());
        let accepted = Arc::new(AtomicUsize::new(0));

        std::thread::scope(|scope| {
            for _ in 0..16 {
                let registry = Arc::clone(&registry);
                let accepted = Arc::clone(&accepted);
                scope.spawn(move || {
                    if registry.try_accept("http://contested/?wsdl") {
                        accepted.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(accepted.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
    }
}
