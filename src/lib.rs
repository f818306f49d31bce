//! # Scoped Console Logger
//!
//! Leveled, scoped and rate-limited console logging with optional
//! timestamps, elapsed-time and call-site annotations, rendered with ANSI
//! colors in a terminal or CSS styles in a browser-like console.
//!
//! ## Features
//!
//! - **Ten severities**: from `EMERGENCY` down to `WHO CARES`, each routed to
//!   its own output channels
//! - **Scopes**: named child loggers that inherit the root configuration
//! - **Rate limiting**: `once`/`limit` views that emit only the first N calls
//! - **Exclusivity**: silence every logger but one while debugging
//!
//! ## Example
//!
//! ```
//! use scoped_console_logger::prelude::*;
//! use scoped_console_logger::{error, info};
//!
//! let registry = Registry::builder().sink(ConsoleSink::new()).build();
//! let root = registry.root();
//! root.set_level(Some(Severity::Warning));
//!
//! let db = root.scope("db");
//! error!(db, "connection lost", 3);
//! info!(db, "suppressed");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Channel, Environment, InspectOptions, LimitedLogger, Log, LogValue, Logger, LoggerConfig,
        LoggerError, LoggerOptions, Registry, RegistryBuilder, Renderer, Result, Severity, Sink,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink};
}

pub use crate::core::{
    resolve, root, scope, scope_with, CallSite, CallSiteInspector, Channel, ChannelRecord, Color,
    Environment, InspectOptions, Inspector, JsonInspector, LevelCatalog, LevelSpec, LevelStyle, LimitedLogger,
    Log, LogValue, Logger, LoggerConfig, LoggerError, LoggerMetrics, LoggerOptions,
    OutputPipeline, RateLimitGate, Record, Registry, RegistryBuilder, Renderer, Result, Severity,
    Sink, Suppression, TrackCallerInspector,
};
pub use sinks::{ConsoleSink, MemorySink};
