//! Process-wide live-particle counter
//!
//! A diagnostic count of currently-active particles across every manager
//! instance in the process. Managers may be driven from different simulation
//! contexts, so the adjustment must be atomic; this is the only shared
//! mutable state in the core.

use std::sync::atomic::{AtomicI64, Ordering};

static LIVE: AtomicI64 = AtomicI64::new(0);

/// Adjust the live-particle count by `delta`.
///
/// Called on every activate/deactivate transition (±1) and by
/// `ParticleManager::clear` as one batch adjustment.
pub fn adjust(delta: i64) {
    LIVE.fetch_add(delta, Ordering::Relaxed);
}

/// Current number of active particles across all managers
pub fn live() -> i64 {
    LIVE.load(Ordering::Relaxed)
}

/// Serializes tests that assert on the process-global counter. The test
/// harness runs tests on threads within one process, so every test that
/// creates or kills particles must hold this guard for exact counts to hold.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_is_relative() {
        let _guard = test_guard();
        let before = live();
        adjust(3);
        adjust(-1);
        assert_eq!(live(), before + 2);
        adjust(-2);
        assert_eq!(live(), before);
    }
}
