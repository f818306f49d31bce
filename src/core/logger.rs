//! Root and scoped loggers

use super::{
    config::{InspectOptions, LoggerConfig, LoggerOptions},
    error::{LoggerError, Result},
    metrics::Suppression,
    pipeline::RenderRequest,
    rate_limit::{LimitedLogger, RateLimitGate},
    registry::{Context, Registry},
    resolver,
    severity::Severity,
    timestamp,
    value::LogValue,
};
use parking_lot::{Mutex, RwLock, RwLockUpgradableReadGuard};
use std::collections::HashMap;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use std::time::Instant;

/// Leveled logging methods shared by full loggers and rate-limited views
///
/// Every method is `#[track_caller]`, so the call-site token and automatic
/// rate-limit keys point at the code that called the logger.
pub trait Log {
    #[track_caller]
    fn log(&self, severity: Severity, args: &[LogValue]);

    /// Log with a numeric severity; values outside 0-9 are silently dropped
    #[track_caller]
    fn log_at(&self, level: u8, args: &[LogValue]) {
        if let Ok(severity) = Severity::try_from(level) {
            self.log(severity, args);
        }
    }

    #[track_caller]
    fn emergency(&self, args: &[LogValue]) {
        self.log(Severity::Emergency, args);
    }

    #[track_caller]
    fn alert(&self, args: &[LogValue]) {
        self.log(Severity::Alert, args);
    }

    #[track_caller]
    fn critical(&self, args: &[LogValue]) {
        self.log(Severity::Critical, args);
    }

    #[track_caller]
    fn error(&self, args: &[LogValue]) {
        self.log(Severity::Error, args);
    }

    #[track_caller]
    fn warning(&self, args: &[LogValue]) {
        self.log(Severity::Warning, args);
    }

    #[track_caller]
    fn notice(&self, args: &[LogValue]) {
        self.log(Severity::Notice, args);
    }

    #[track_caller]
    fn info(&self, args: &[LogValue]) {
        self.log(Severity::Info, args);
    }

    #[track_caller]
    fn verbose(&self, args: &[LogValue]) {
        self.log(Severity::Verbose, args);
    }

    #[track_caller]
    fn debug(&self, args: &[LogValue]) {
        self.log(Severity::Debug, args);
    }

    #[track_caller]
    fn who_cares(&self, args: &[LogValue]) {
        self.log(Severity::WhoCares, args);
    }
}

/// State owned by one logger; lives as long as the registry holds it
pub(crate) struct LoggerState {
    scope: Option<String>,
    config: RwLock<LoggerConfig>,
    gates: Mutex<HashMap<String, Arc<RateLimitGate>>>,
    last_log: Mutex<Option<Instant>>,
}

impl LoggerState {
    pub(crate) fn new(scope: Option<String>, config: LoggerConfig) -> Self {
        Self {
            scope,
            config: RwLock::new(config),
            gates: Mutex::new(HashMap::new()),
            last_log: Mutex::new(None),
        }
    }
}

/// Handle to the root logger or a named scope
///
/// Handles are cheap to clone; every clone refers to the same logger, so
/// configuration changes made through one are visible through all of them.
///
/// # Example
///
/// ```
/// use scoped_console_logger::prelude::*;
///
/// let registry = Registry::builder().sink(MemorySink::new()).build();
/// let root = registry.root();
/// root.set_level(Some(Severity::Warning));
///
/// let db = root.scope("db");
/// db.error(&["connection lost".into()]);
/// db.info(&["suppressed by the root threshold".into()]);
/// ```
#[derive(Clone)]
pub struct Logger {
    pub(crate) state: Arc<LoggerState>,
    pub(crate) ctx: Arc<Context>,
}

impl Logger {
    pub(crate) fn from_parts(state: Arc<LoggerState>, ctx: Arc<Context>) -> Self {
        Self { state, ctx }
    }

    /// Scope label, `None` for the root logger
    pub fn scope_name(&self) -> Option<&str> {
        self.state.scope.as_deref()
    }

    pub fn is_root(&self) -> bool {
        Arc::ptr_eq(&self.state, self.ctx.root())
    }

    /// Whether both handles refer to the same logger
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Registry this logger belongs to
    pub fn registry(&self) -> Registry {
        Registry::from_context(Arc::clone(&self.ctx))
    }

    /// Get or create a scoped logger in the same registry
    pub fn scope(&self, name: &str) -> Logger {
        self.registry().get_or_create_scope(name, LoggerOptions::default())
    }

    /// Get or create a scoped logger; `options` only apply on creation
    pub fn scope_with(&self, name: &str, options: LoggerOptions) -> Logger {
        self.registry().get_or_create_scope(name, options)
    }

    /// Snapshot of this logger's own configuration
    pub fn config(&self) -> LoggerConfig {
        self.state.config.read_recursive().clone()
    }

    /// Configuration after merging with the root, as the next call would see it
    pub fn effective_config(&self) -> LoggerConfig {
        let local = self.config();
        let root = self.ctx.root().config.read_recursive().clone();
        resolver::resolve(&local, &root)
    }

    /// Mutate several fields as one change
    ///
    /// `f` works on a copy that replaces the configuration when it returns.
    /// Getters on any handle may be called from `f`; setters, or a nested
    /// `update`, on the same logger deadlock.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut LoggerConfig),
    {
        let current = self.state.config.upgradable_read();
        let mut next = current.clone();
        f(&mut next);
        *RwLockUpgradableReadGuard::upgrade(current) = next;
    }

    pub fn enabled(&self) -> bool {
        self.state.config.read_recursive().enabled
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state.config.write().enabled = enabled;
    }

    pub fn show_stack(&self) -> bool {
        self.state.config.read_recursive().show_stack
    }

    pub fn set_show_stack(&self, show: bool) {
        self.state.config.write().show_stack = show;
    }

    pub fn show_date(&self) -> bool {
        self.state.config.read_recursive().show_date
    }

    pub fn set_show_date(&self, show: bool) {
        self.state.config.write().show_date = show;
    }

    pub fn show_elapsed(&self) -> bool {
        self.state.config.read_recursive().show_elapsed
    }

    pub fn set_show_elapsed(&self, show: bool) {
        self.state.config.write().show_elapsed = show;
    }

    pub fn level(&self) -> Option<Severity> {
        self.state.config.read_recursive().level
    }

    /// Set or clear (`None`) the threshold
    pub fn set_level(&self, level: Option<Severity>) {
        self.state.config.write().level = level;
    }

    pub fn pad(&self) -> bool {
        self.state.config.read_recursive().pad
    }

    pub fn set_pad(&self, pad: bool) {
        self.state.config.write().pad = pad;
    }

    pub fn inspect_options(&self) -> InspectOptions {
        self.state.config.read_recursive().inspect_options.clone()
    }

    pub fn set_inspect_options(&self, options: InspectOptions) {
        self.state.config.write().inspect_options = options;
    }

    /// Whether this logger holds the registry's exclusive slot
    pub fn is_exclusive(&self) -> bool {
        self.ctx.exclusive_is(&self.state)
    }

    /// `true` claims the slot, evicting any previous holder; `false` releases
    /// it if this logger holds it and is a no-op otherwise
    pub fn set_exclusive(&self, exclusive: bool) {
        let mut slot = self.ctx.exclusive_slot();
        if exclusive {
            *slot = Some(Arc::clone(&self.state));
        } else if slot
            .as_ref()
            .is_some_and(|holder| Arc::ptr_eq(holder, &self.state))
        {
            *slot = None;
        }
    }

    /// Release the slot if held, claim it otherwise; returns the new state
    pub fn toggle_exclusive(&self) -> bool {
        let mut slot = self.ctx.exclusive_slot();
        let holds = slot
            .as_ref()
            .is_some_and(|holder| Arc::ptr_eq(holder, &self.state));
        *slot = if holds {
            None
        } else {
            Some(Arc::clone(&self.state))
        };
        !holds
    }

    /// View of this logger that only emits the first `max` calls under `key`
    ///
    /// Without a key, one is derived from the call site. Gates are shared per
    /// `(logger, key)`: asking again with the same key returns a view over the
    /// same counter, keeping the `max` it was created with.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidKey`] when no key is given and the call site
    /// cannot be determined.
    #[track_caller]
    pub fn limit(&self, max: u64, key: Option<&str>) -> Result<LimitedLogger> {
        let key = match key {
            Some(key) => key.to_string(),
            None => self.derive_key(Location::caller())?,
        };

        let gate = {
            let mut gates = self.state.gates.lock();
            Arc::clone(
                gates
                    .entry(key)
                    .or_insert_with_key(|key| Arc::new(RateLimitGate::new(key.clone(), max))),
            )
        };

        Ok(LimitedLogger::new(self.clone(), gate))
    }

    /// Same as `limit(1, key)`
    #[track_caller]
    pub fn once(&self, key: Option<&str>) -> Result<LimitedLogger> {
        self.limit(1, key)
    }

    fn derive_key(&self, location: &'static Location<'static>) -> Result<String> {
        let inspector = self
            .ctx
            .pipeline()
            .call_sites()
            .ok_or_else(|| LoggerError::invalid_key("no call-site inspector configured"))?;

        inspector
            .inspect(location)
            .map(|site| site.key())
            .ok_or_else(|| LoggerError::invalid_key("call site could not be determined"))
    }

    /// Run one call through filtering, rendering and dispatch.
    ///
    /// Returns `true` if the call reached the sinks.
    pub(crate) fn emit(
        &self,
        severity: Severity,
        args: &[LogValue],
        location: &'static Location<'static>,
    ) -> bool {
        let metrics = self.ctx.metrics();

        if !self.ctx.may_emit(&self.state) {
            metrics.record_suppressed(Suppression::Exclusive);
            return false;
        }

        let local = self.config();
        let root = if self.is_root() {
            local.clone()
        } else {
            self.ctx.root().config.read_recursive().clone()
        };
        if !local.enabled || !root.enabled {
            metrics.record_suppressed(Suppression::Disabled);
            return false;
        }

        let effective = resolver::resolve(&local, &root);
        if !severity.passes(effective.level) {
            metrics.record_suppressed(Suppression::Level);
            return false;
        }

        let elapsed = effective
            .show_elapsed
            .then(|| timestamp::advance(&mut self.state.last_log.lock(), Instant::now()));

        let pipeline = self.ctx.pipeline();
        let record = pipeline.render(&RenderRequest {
            severity,
            config: &effective,
            scope: self.scope_name(),
            elapsed,
            location,
            args,
        });
        pipeline.dispatch(&record, metrics);
        metrics.record_emitted();
        true
    }
}

impl Log for Logger {
    #[track_caller]
    fn log(&self, severity: Severity, args: &[LogValue]) {
        self.emit(severity, args, Location::caller());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("scope", &self.scope_name())
            .field("config", &self.config())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::renderer::Renderer;
    use crate::sinks::MemorySink;

    fn setup() -> (Registry, MemorySink) {
        let memory = MemorySink::new();
        let registry = Registry::builder()
            .renderer(Renderer::Ansi { colors: false })
            .root_options(LoggerOptions::new().pad(false))
            .sink(memory.clone())
            .build();
        (registry, memory)
    }

    #[test]
    fn test_root_error_has_label_only() {
        let (registry, memory) = setup();
        registry.root().error(&["boom".into()]);

        assert_eq!(memory.lines(), vec!["[ERROR] boom"]);
    }

    #[test]
    fn test_each_level_method() {
        let (registry, memory) = setup();
        let root = registry.root();

        root.emergency(&[]);
        root.alert(&[]);
        root.critical(&[]);
        root.error(&[]);
        root.warning(&[]);
        root.notice(&[]);
        root.info(&[]);
        root.verbose(&[]);
        root.debug(&[]);
        root.who_cares(&[]);

        let severities: Vec<Severity> = memory
            .records()
            .into_iter()
            .map(|entry| entry.record.severity)
            .collect();
        // The three most severe levels write to two channels each
        assert_eq!(severities.len(), 13);
        assert_eq!(severities.last(), Some(&Severity::WhoCares));
    }

    #[test]
    fn test_log_at_ignores_unknown_levels() {
        let (registry, memory) = setup();
        let root = registry.root();

        root.log_at(42, &["nope".into()]);
        assert!(memory.is_empty());

        root.log_at(6, &["yes".into()]);
        assert_eq!(memory.lines(), vec!["[INFO] yes"]);
    }

    #[test]
    fn test_disabled_logger_and_root() {
        let (registry, memory) = setup();
        let root = registry.root();
        let db = root.scope("db");

        db.set_enabled(false);
        db.error(&["hidden".into()]);
        assert!(memory.is_empty());

        db.set_enabled(true);
        root.set_enabled(false);
        db.error(&["hidden".into()]);
        root.error(&["hidden".into()]);
        assert!(memory.is_empty());
        assert_eq!(registry.metrics().suppressed_count(), 3);
    }

    #[test]
    fn test_toggle_exclusive() {
        let (registry, _memory) = setup();
        let root = registry.root();

        assert!(root.toggle_exclusive());
        assert!(root.is_exclusive());
        assert!(!root.toggle_exclusive());
        assert!(!root.is_exclusive());
    }

    #[test]
    fn test_release_by_non_holder_is_noop() {
        let (registry, _memory) = setup();
        let a = registry.scope("a");
        let b = registry.scope("b");

        a.set_exclusive(true);
        b.set_exclusive(false);
        assert!(a.is_exclusive());
    }

    #[test]
    fn test_update_batches_changes() {
        let (registry, _memory) = setup();
        let root = registry.root();
        root.update(|config| {
            config.show_date = true;
            config.level = Some(Severity::Notice);
        });

        assert!(root.show_date());
        assert_eq!(root.level(), Some(Severity::Notice));
    }

    #[test]
    fn test_update_may_read_through_handles() {
        let (registry, memory) = setup();
        let root = registry.root();
        let same_root = registry.root();
        let scoped = root.scope("reader");

        let was_padded = root.pad();
        root.update(|config| {
            config.pad = !same_root.pad();
            config.show_date = scoped.effective_config().show_date;
        });
        assert_eq!(root.pad(), !was_padded);

        scoped.update(|config| {
            config.level = root.level();
            scoped.info(&["logged during update".into()]);
        });
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_show_stack_points_at_caller() {
        let (registry, memory) = setup();
        let root = registry.root();
        root.set_show_stack(true);

        let line = line!() + 1;
        root.info(&["here".into()]);

        let record = &memory.records()[0].record;
        assert!(record.prefix[1].contains(&format!("logger.rs:{}:", line)));
    }
}
