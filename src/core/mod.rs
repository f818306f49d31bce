//! Core logger types and traits

pub mod call_site;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inspect;
pub mod logger;
pub mod metrics;
pub mod pipeline;
pub mod rate_limit;
pub mod record;
pub mod registry;
pub mod renderer;
pub mod resolver;
pub mod severity;
pub mod sink;
pub mod timestamp;
pub mod value;

pub use call_site::{CallSite, CallSiteInspector, TrackCallerInspector};
pub use catalog::{Channel, Color, Environment, LevelCatalog, LevelSpec, LevelStyle};
pub use config::{InspectOptions, LoggerConfig, LoggerOptions};
pub use error::{LoggerError, Result};
pub use inspect::{Inspector, JsonInspector};
pub use logger::{Log, Logger};
pub use metrics::{LoggerMetrics, Suppression};
pub use pipeline::OutputPipeline;
pub use rate_limit::{LimitedLogger, RateLimitGate};
pub use record::{ChannelRecord, Record};
pub use registry::{root, scope, scope_with, Registry, RegistryBuilder};
pub use renderer::Renderer;
pub use resolver::resolve;
pub use severity::Severity;
pub use sink::Sink;
pub use value::LogValue;
