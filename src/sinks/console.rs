//! Console sink implementation

use crate::core::{Channel, Record, Result, Sink};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::io::Write;

/// Writes records to the process's standard streams
///
/// `error`, `warn` and `trace` go to stderr, `info` and `debug` to stdout.
/// The `trace` channel also prints a backtrace when backtraces are enabled
/// (`RUST_BACKTRACE`).
pub struct ConsoleSink {
    backtraces: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { backtraces: true }
    }

    /// Enable or disable backtraces on the trace channel
    #[must_use]
    pub fn with_backtraces(mut self, backtraces: bool) -> Self {
        self.backtraces = backtraces;
        self
    }

    fn format(channel: Channel, record: &Record) -> String {
        match channel {
            Channel::Trace => format!("Trace: {}", record.line()),
            _ => record.line(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, channel: Channel, record: &Record) -> Result<()> {
        let output = Self::format(channel, record);

        match channel {
            Channel::Error | Channel::Warn => writeln!(std::io::stderr().lock(), "{}", output)?,
            Channel::Trace => {
                let mut stderr = std::io::stderr().lock();
                writeln!(stderr, "{}", output)?;
                if self.backtraces {
                    let backtrace = Backtrace::capture();
                    if backtrace.status() == BacktraceStatus::Captured {
                        writeln!(stderr, "{}", backtrace)?;
                    }
                }
            }
            Channel::Info | Channel::Debug => writeln!(std::io::stdout().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
