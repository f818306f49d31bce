//! Sink trait for log output destinations

use super::{catalog::Channel, error::Result, record::Record};

/// Destination for rendered records
///
/// A severity routes to one or more channels; the pipeline calls `write`
/// once per channel, so a sink sees an EMERGENCY record on both `Error`
/// and `Trace`.
///
/// Sinks are called with the registry's sink set locked, so a sink must not
/// log through, or add sinks to, the registry it is attached to.
pub trait Sink: Send + Sync {
    fn write(&mut self, channel: Channel, record: &Record) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
