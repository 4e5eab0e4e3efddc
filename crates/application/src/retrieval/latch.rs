//! Session fault latch.

use std::sync::atomic::{AtomicBool, Ordering};

/// Session-wide marker that a fatal fault has occurred.
///
/// Starts untripped, is tripped by the first fatal fault and never reset
/// for the lifetime of the session. Once tripped, pending completions are
/// discarded and late timeouts are suppressed; the host is expected to
/// shut the session down.
#[derive(Debug, Default)]
pub struct FaultLatch(AtomicBool);

impl FaultLatch {
    /// Creates an untripped latch.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Trips the latch. Returns `true` if this call was the one that
    /// tripped it.
    pub fn trip(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    /// Whether a fatal fault has occurred.
    #[must_use]
    pub fn is_tripped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_untripped() {
        assert!(!FaultLatch::new().is_tripped());
    }

    #[test]
    fn test_trip_is_permanent() {
        let latch = FaultLatch::new();
        assert!(latch.trip());
        assert!(latch.is_tripped());
        assert!(!latch.trip());
        assert!(latch.is_tripped());
    }
}
