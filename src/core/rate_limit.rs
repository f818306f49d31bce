//! Count-based rate limiting of log calls
//!
//! A [`RateLimitGate`] lets the first `max` calls through and swallows the
//! rest until it is reset. [`LimitedLogger`] is the logging-only view handed
//! out by [`Logger::limit`] and [`Logger::once`]; it has no configuration
//! setters, so configuration must be changed through the original logger.

use super::{
    config::LoggerConfig,
    logger::{Log, Logger},
    metrics::Suppression,
    severity::Severity,
    value::LogValue,
};
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Invocation counter shared by every view created with the same key
#[derive(Debug)]
pub struct RateLimitGate {
    key: String,
    max: u64,
    count: AtomicU64,
}

impl RateLimitGate {
    pub fn new(key: impl Into<String>, max: u64) -> Self {
        Self {
            key: key.into(),
            max,
            count: AtomicU64::new(0),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Calls let through since creation or the last reset
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }

    pub fn remaining(&self) -> u64 {
        self.max.saturating_sub(self.count())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Take one slot; `false` once `max` calls have been let through
    pub fn try_acquire(&self) -> bool {
        self.count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                (count < self.max).then_some(count + 1)
            })
            .is_ok()
    }

    /// Zero the counter so the next `max` calls produce output again
    pub fn reset(&self) {
        self.count.store(0, Ordering::Release);
    }
}

/// Rate-limited, logging-only view of a [`Logger`]
///
/// # Example
///
/// ```
/// use scoped_console_logger::prelude::*;
///
/// let memory = MemorySink::new();
/// let registry = Registry::builder().sink(memory.clone()).build();
/// let root = registry.root();
///
/// for _ in 0..5 {
///     root.once(Some("startup")).unwrap().info(&["ready".into()]);
/// }
/// assert_eq!(memory.len(), 1);
/// ```
#[derive(Clone)]
pub struct LimitedLogger {
    logger: Logger,
    gate: Arc<RateLimitGate>,
}

impl LimitedLogger {
    pub(crate) fn new(logger: Logger, gate: Arc<RateLimitGate>) -> Self {
        Self { logger, gate }
    }

    pub fn gate(&self) -> &RateLimitGate {
        &self.gate
    }

    /// Shorthand for `gate().reset()`
    pub fn reset(&self) {
        self.gate.reset();
    }

    pub fn remaining(&self) -> u64 {
        self.gate.remaining()
    }

    pub fn scope_name(&self) -> Option<&str> {
        self.logger.scope_name()
    }

    /// Read-only snapshot of the underlying logger's configuration
    pub fn config(&self) -> LoggerConfig {
        self.logger.config()
    }

    pub fn effective_config(&self) -> LoggerConfig {
        self.logger.effective_config()
    }

    pub fn is_exclusive(&self) -> bool {
        self.logger.is_exclusive()
    }

    /// Whether `other` is backed by the same gate
    pub fn shares_gate(&self, other: &LimitedLogger) -> bool {
        Arc::ptr_eq(&self.gate, &other.gate)
    }
}

impl Log for LimitedLogger {
    #[track_caller]
    fn log(&self, severity: Severity, args: &[LogValue]) {
        if self.gate.try_acquire() {
            self.logger.emit(severity, args, Location::caller());
        } else {
            self.logger
                .ctx
                .metrics()
                .record_suppressed(Suppression::RateLimited);
        }
    }
}

impl std::fmt::Debug for LimitedLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LimitedLogger")
            .field("scope", &self.scope_name())
            .field("gate", &self.gate)
            .finish()
    }
}
