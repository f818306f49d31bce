//! Rendering of prefix tokens and dispatch to sinks

use super::{
    call_site::CallSiteInspector,
    catalog::LevelCatalog,
    config::{InspectOptions, LoggerConfig},
    error::Result,
    inspect::Inspector,
    metrics::LoggerMetrics,
    record::Record,
    renderer::Renderer,
    severity::Severity,
    sink::Sink,
    timestamp,
    value::LogValue,
};
use parking_lot::RwLock;
use std::panic::Location;
use std::time::Duration;

/// Everything needed to render one call, after filtering has passed
pub(crate) struct RenderRequest<'a> {
    pub severity: Severity,
    /// Effective configuration for this call
    pub config: &'a LoggerConfig,
    pub scope: Option<&'a str>,
    /// Set when `show_elapsed` is effective
    pub elapsed: Option<Duration>,
    pub location: &'static Location<'static>,
    pub args: &'a [LogValue],
}

pub struct OutputPipeline {
    renderer: Renderer,
    catalog: &'static LevelCatalog,
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    inspector: Option<Box<dyn Inspector>>,
    call_sites: Option<Box<dyn CallSiteInspector>>,
}

impl OutputPipeline {
    pub(crate) fn new(
        renderer: Renderer,
        sinks: Vec<Box<dyn Sink>>,
        inspector: Option<Box<dyn Inspector>>,
        call_sites: Option<Box<dyn CallSiteInspector>>,
    ) -> Self {
        Self {
            renderer,
            catalog: LevelCatalog::get(renderer.environment()),
            sinks: RwLock::new(sinks),
            inspector,
            call_sites,
        }
    }

    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn call_sites(&self) -> Option<&dyn CallSiteInspector> {
        self.call_sites.as_deref()
    }

    /// Build prefix tokens and render arguments
    pub(crate) fn render(&self, request: &RenderRequest<'_>) -> Record {
        let spec = self.catalog.spec(request.severity);
        let config = request.config;
        let mut record = Record::new(request.severity, request.scope.map(str::to_string));

        record.prefix = self.renderer.label_tokens(spec, config.pad);
        if let Some(scope) = request.scope {
            record.prefix.push(format!("<{}>", scope));
        }
        if config.show_date {
            record.prefix.push(timestamp::now_token());
        }
        if let Some(elapsed) = request.elapsed {
            record.prefix.push(timestamp::elapsed_token(elapsed));
        }
        if config.show_stack {
            if let Some(site) = self
                .call_sites
                .as_ref()
                .and_then(|inspector| inspector.inspect(request.location))
            {
                record.prefix.push(site.token());
            }
        }

        record.args = self.render_args(request.args, &config.inspect_options);
        record
    }

    fn render_args(&self, args: &[LogValue], options: &InspectOptions) -> Vec<String> {
        args.iter()
            .map(|arg| match (arg, &self.inspector) {
                (LogValue::Structured(value), Some(inspector)) => inspector
                    .inspect(value, options)
                    .unwrap_or_else(|_| value.to_string()),
                (other, _) => other.as_text().into_owned(),
            })
            .collect()
    }

    /// Write `record` to every sink on every channel of its severity
    ///
    /// Each sink call is isolated so one failing sink does not stop the others.
    /// Returns `true` if any sink failed.
    ///
    /// The sink set stays write-locked for the whole dispatch; a sink that
    /// logs through this pipeline deadlocks.
    pub(crate) fn dispatch(&self, record: &Record, metrics: &LoggerMetrics) -> bool {
        let channels = self.catalog.spec(record.severity).channels;
        let mut sinks = self.sinks.write();
        let mut has_error = false;

        for &channel in channels {
            for sink in sinks.iter_mut() {
                let write_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    sink.write(channel, record)
                }));

                match write_result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                        metrics.record_sink_failure();
                        has_error = true;
                    }
                    Err(panic_info) => {
                        let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                            s.to_string()
                        } else if let Some(s) = panic_info.downcast_ref::<String>() {
                            s.clone()
                        } else {
                            "Unknown panic".to_string()
                        };
                        eprintln!(
                            "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                             Other sinks continue to function.",
                            sink.name(),
                            panic_msg
                        );
                        metrics.record_sink_failure();
                        has_error = true;
                    }
                }
            }
        }

        has_error
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}
