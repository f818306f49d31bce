//! In-memory sink that keeps every record it receives

use crate::core::{Channel, ChannelRecord, Record, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures records for later inspection
///
/// Clones share the same buffer, so a clone can be handed to the registry
/// while the original is kept to read the output back.
///
/// # Example
///
/// ```
/// use scoped_console_logger::prelude::*;
///
/// let memory = MemorySink::new();
/// let registry = Registry::builder()
///     .renderer(Renderer::Ansi { colors: false })
///     .sink(memory.clone())
///     .build();
///
/// registry.root().error(&["boom".into()]);
/// assert_eq!(memory.lines(), vec!["[  ERROR  ] boom"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<ChannelRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn records(&self) -> Vec<ChannelRecord> {
        self.records.lock().clone()
    }

    /// Records written to `channel`
    pub fn on_channel(&self, channel: Channel) -> Vec<Record> {
        self.records
            .lock()
            .iter()
            .filter(|entry| entry.channel == channel)
            .map(|entry| entry.record.clone())
            .collect()
    }

    /// Rendered lines, one per channel write
    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|entry| entry.record.line())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, channel: Channel, record: &Record) -> Result<()> {
        self.records.lock().push(ChannelRecord {
            channel,
            record: record.clone(),
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_clones_share_buffer() {
        let memory = MemorySink::new();
        let mut handle = memory.clone();

        let mut record = Record::new(Severity::Warning, None);
        record.args.push("careful".to_string());
        handle.write(Channel::Warn, &record).expect("write");

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.on_channel(Channel::Warn)[0], record);
        assert!(memory.on_channel(Channel::Info).is_empty());

        memory.clear();
        assert!(handle.is_empty());
    }
}
