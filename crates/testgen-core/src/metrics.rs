//! Global atomic counters for TestGen observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. on shutdown).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lock-free atomic counters.
pub struct Metrics {
    classifications: AtomicU64,
    template_selections: AtomicU64,
    generic_selections: AtomicU64,
    source_fallbacks: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            classifications: AtomicU64::new(0),
            template_selections: AtomicU64::new(0),
            generic_selections: AtomicU64::new(0),
            source_fallbacks: AtomicU64::new(0),
        }
    }

    pub fn inc_classifications(&self) {
        self.classifications.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "classifications", "counter incremented");
    }

    /// Count one template selection; `generic` marks an unknown id.
    pub fn inc_template_selections(&self, generic: bool) {
        self.template_selections.fetch_add(1, Ordering::Relaxed);
        if generic {
            self.generic_selections.fetch_add(1, Ordering::Relaxed);
        }
        tracing::trace!(metric = "template_selections", generic, "counter incremented");
    }

    pub fn inc_source_fallbacks(&self) {
        self.source_fallbacks.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "source_fallbacks", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            classifications = self.classifications(),
            template_selections = self.template_selections(),
            generic_selections = self.generic_selections(),
            source_fallbacks = self.source_fallbacks(),
        );
    }

    pub fn classifications(&self) -> u64 {
        self.classifications.load(Ordering::Relaxed)
    }

    pub fn template_selections(&self) -> u64 {
        self.template_selections.load(Ordering::Relaxed)
    }

    pub fn generic_selections(&self) -> u64 {
        self.generic_selections.load(Ordering::Relaxed)
    }

    pub fn source_fallbacks(&self) -> u64 {
        self.source_fallbacks.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.classifications.store(0, Ordering::Relaxed);
        self.template_selections.store(0, Ordering::Relaxed);
        self.generic_selections.store(0, Ordering::Relaxed);
        self.source_fallbacks.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment_independently() {
        let m = Metrics::new();
        m.inc_classifications();
        m.inc_classifications();
        m.inc_template_selections(false);
        m.inc_template_selections(true);
        m.inc_source_fallbacks();

        assert_eq!(m.classifications(), 2);
        assert_eq!(m.template_selections(), 2);
        assert_eq!(m.generic_selections(), 1);
        assert_eq!(m.source_fallbacks(), 1);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let m = Metrics::new();
        m.inc_template_selections(true);
        m.inc_source_fallbacks();
        m.reset();

        assert_eq!(m.template_selections(), 0);
        assert_eq!(m.generic_selections(), 0);
        assert_eq!(m.source_fallbacks(), 0);
    }
}
