//! Registry holding the root logger, named scopes and the exclusive slot

use super::{
    call_site::{CallSiteInspector, TrackCallerInspector},
    catalog::Environment,
    config::LoggerOptions,
    error::Result,
    inspect::{Inspector, JsonInspector},
    logger::{Logger, LoggerState},
    metrics::LoggerMetrics,
    pipeline::OutputPipeline,
    renderer::Renderer,
    sink::Sink,
};
use crate::sinks::ConsoleSink;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Shared state behind a [`Registry`] and every [`Logger`] it hands out
pub(crate) struct Context {
    environment: Environment,
    pipeline: OutputPipeline,
    root: Arc<LoggerState>,
    scopes: RwLock<HashMap<String, Arc<LoggerState>>>,
    exclusive: Mutex<Option<Arc<LoggerState>>>,
    metrics: LoggerMetrics,
}

impl Context {
    pub(crate) fn root(&self) -> &Arc<LoggerState> {
        &self.root
    }

    pub(crate) fn pipeline(&self) -> &OutputPipeline {
        &self.pipeline
    }

    pub(crate) fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub(crate) fn exclusive_slot(&self) -> MutexGuard<'_, Option<Arc<LoggerState>>> {
        self.exclusive.lock()
    }

    pub(crate) fn exclusive_is(&self, state: &Arc<LoggerState>) -> bool {
        self.exclusive
            .lock()
            .as_ref()
            .is_some_and(|holder| Arc::ptr_eq(holder, state))
    }

    /// False when another logger holds the exclusive slot
    pub(crate) fn may_emit(&self, state: &Arc<LoggerState>) -> bool {
        match self.exclusive.lock().as_ref() {
            Some(holder) => Arc::ptr_eq(holder, state),
            None => true,
        }
    }
}

/// Owner of the root logger and all scoped loggers
///
/// Cloning a registry is cheap and yields a handle to the same state.
/// Use [`Registry::global`] for the lazily created process-wide instance, or
/// build one explicitly with [`Registry::builder`] and pass it around.
#[derive(Clone)]
pub struct Registry {
    ctx: Arc<Context>,
}

impl Registry {
    pub(crate) fn from_context(ctx: Arc<Context>) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Process-wide registry writing to the console, created on first access
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| Registry::builder().sink(ConsoleSink::new()).build())
    }

    pub fn root(&self) -> Logger {
        Logger::from_parts(Arc::clone(&self.ctx.root), Arc::clone(&self.ctx))
    }

    /// Shorthand for `get_or_create_scope(name, LoggerOptions::default())`
    pub fn scope(&self, name: &str) -> Logger {
        self.get_or_create_scope(name, LoggerOptions::default())
    }

    /// Return the scope called `name`, creating it from `options` overlaid on
    /// the environment defaults if it does not exist yet.
    ///
    /// Later calls with the same name return the existing logger unmodified
    /// and ignore `options`.
    pub fn get_or_create_scope(&self, name: &str, options: LoggerOptions) -> Logger {
        if let Some(state) = self.ctx.scopes.read().get(name) {
            return Logger::from_parts(Arc::clone(state), Arc::clone(&self.ctx));
        }

        let mut scopes = self.ctx.scopes.write();
        let state = scopes.entry(name.to_string()).or_insert_with(|| {
            let config = options.build(self.ctx.environment);
            Arc::new(LoggerState::new(Some(name.to_string()), config))
        });
        Logger::from_parts(Arc::clone(state), Arc::clone(&self.ctx))
    }

    /// Existing scope, without creating one
    pub fn get_scope(&self, name: &str) -> Option<Logger> {
        self.ctx
            .scopes
            .read()
            .get(name)
            .map(|state| Logger::from_parts(Arc::clone(state), Arc::clone(&self.ctx)))
    }

    /// Names of all scopes created so far, sorted
    pub fn scope_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ctx.scopes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Current holder of the exclusive slot
    pub fn exclusive(&self) -> Option<Logger> {
        self.ctx
            .exclusive
            .lock()
            .as_ref()
            .map(|state| Logger::from_parts(Arc::clone(state), Arc::clone(&self.ctx)))
    }

    pub fn clear_exclusive(&self) {
        *self.ctx.exclusive.lock() = None;
    }

    pub fn environment(&self) -> Environment {
        self.ctx.environment
    }

    pub fn renderer(&self) -> Renderer {
        self.ctx.pipeline.renderer()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.ctx.metrics
    }

    /// Attach another sink; must not be called from inside a sink's `write`
    pub fn add_sink<S: Sink + 'static>(&self, sink: S) {
        self.ctx.pipeline.add_sink(Box::new(sink));
    }

    pub fn flush(&self) -> Result<()> {
        self.ctx.pipeline.flush()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("environment", &self.ctx.environment)
            .field("scopes", &self.scope_names())
            .field("sinks", &self.ctx.pipeline.sink_count())
            .finish()
    }
}

/// Builder for constructing a Registry with a fluent API
///
/// By default the builder targets a colored terminal, pretty-prints
/// structured arguments with [`JsonInspector`], resolves call sites with
/// [`TrackCallerInspector`] and has no sinks.
///
/// # Example
/// ```
/// use scoped_console_logger::prelude::*;
///
/// let registry = Registry::builder()
///     .environment(Environment::Browser)
///     .sink(MemorySink::new())
///     .root_options(LoggerOptions::new().level(Severity::Notice))
///     .build();
///
/// assert_eq!(registry.root().level(), Some(Severity::Notice));
/// assert!(!registry.root().pad());
/// ```
pub struct RegistryBuilder {
    renderer: Renderer,
    sinks: Vec<Box<dyn Sink>>,
    inspector: Option<Box<dyn Inspector>>,
    call_sites: Option<Box<dyn CallSiteInspector>>,
    root_options: LoggerOptions,
}

impl RegistryBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            renderer: Renderer::default(),
            sinks: Vec::new(),
            inspector: Some(Box::new(JsonInspector::new())),
            call_sites: Some(Box::new(TrackCallerInspector)),
            root_options: LoggerOptions::default(),
        }
    }

    /// Use the default renderer for `environment`
    #[must_use = "builder methods return a new value"]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.renderer = Renderer::for_environment(environment);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn inspector<I: Inspector + 'static>(mut self, inspector: I) -> Self {
        self.inspector = Some(Box::new(inspector));
        self
    }

    /// Leave structured arguments in their compact form
    #[must_use = "builder methods return a new value"]
    pub fn without_inspector(mut self) -> Self {
        self.inspector = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn call_site_inspector<C: CallSiteInspector + 'static>(mut self, inspector: C) -> Self {
        self.call_sites = Some(Box::new(inspector));
        self
    }

    /// Disable call-site tokens and automatic rate-limit keys
    #[must_use = "builder methods return a new value"]
    pub fn without_call_sites(mut self) -> Self {
        self.call_sites = None;
        self
    }

    /// Options overlaid on the defaults for the root logger
    #[must_use = "builder methods return a new value"]
    pub fn root_options(mut self, options: LoggerOptions) -> Self {
        self.root_options = options;
        self
    }

    /// Build the Registry
    pub fn build(self) -> Registry {
        let environment = self.renderer.environment();
        let root_config = self.root_options.build(environment);

        Registry {
            ctx: Arc::new(Context {
                environment,
                pipeline: OutputPipeline::new(
                    self.renderer,
                    self.sinks,
                    self.inspector,
                    self.call_sites,
                ),
                root: Arc::new(LoggerState::new(None, root_config)),
                scopes: RwLock::new(HashMap::new()),
                exclusive: Mutex::new(None),
                metrics: LoggerMetrics::new(),
            }),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Root logger of the global registry
pub fn root() -> Logger {
    Registry::global().root()
}

/// Scope of the global registry, created with default options on first use
pub fn scope(name: &str) -> Logger {
    Registry::global().scope(name)
}

/// Scope of the global registry; `options` only apply if this call creates it
pub fn scope_with(name: &str, options: LoggerOptions) -> Logger {
    Registry::global().get_or_create_scope(name, options)
}
