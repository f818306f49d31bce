//! Logger metrics for observability
//!
//! Counts emitted and suppressed calls per registry so applications can see
//! how much output filtering and rate limiting is removing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Why a call produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// Another logger holds the exclusive slot
    Exclusive,
    /// The logger or the root is disabled
    Disabled,
    /// Below the effective threshold
    Level,
    /// Rate-limit gate exhausted
    RateLimited,
}

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use scoped_console_logger::{LoggerMetrics, Suppression};
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_suppressed(Suppression::Level);
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls dispatched to sinks
    emitted: AtomicU64,

    /// Calls dropped by exclusivity, enabled flags or thresholds
    suppressed: AtomicU64,

    /// Calls swallowed by a rate-limit gate
    rate_limited: AtomicU64,

    /// Sink writes that returned an error or panicked
    sink_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            rate_limited: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Suppressed calls excluding rate limiting
    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rate_limited_count(&self) -> u64 {
        self.rate_limited.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failure_count(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self, reason: Suppression) {
        match reason {
            Suppression::RateLimited => self.rate_limited.fetch_add(1, Ordering::Relaxed),
            _ => self.suppressed.fetch_add(1, Ordering::Relaxed),
        };
    }

    #[inline]
    pub fn record_sink_failure(&self) {
        self.sink_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of calls that produced no output (0.0 - 100.0)
    pub fn suppression_rate(&self) -> f64 {
        let emitted = self.emitted_count();
        let dropped = self.suppressed_count() + self.rate_limited_count();
        let total = emitted + dropped;

        if total == 0 {
            0.0
        } else {
            (dropped as f64 / total as f64) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.rate_limited.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.emitted_count(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.rate_limited_count(), 0);
        assert_eq!(metrics.sink_failure_count(), 0);
        assert_eq!(metrics.suppression_rate(), 0.0);
    }

    #[test]
    fn test_rate_limited_counted_separately() {
        let metrics = LoggerMetrics::new();
        metrics.record_suppressed(Suppression::RateLimited);
        metrics.record_suppressed(Suppression::Exclusive);

        assert_eq!(metrics.rate_limited_count(), 1);
        assert_eq!(metrics.suppressed_count(), 1);
    }

    #[test]
    fn test_suppression_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..3 {
            metrics.record_emitted();
        }
        metrics.record_suppressed(Suppression::Level);

        let rate = metrics.suppression_rate();
        assert!((24.9..=25.1).contains(&rate), "Suppression rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_sink_failure();
        metrics.reset();

        assert_eq!(metrics.emitted_count(), 0);
        assert_eq!(metrics.sink_failure_count(), 0);
    }
}
