//! Rendered output handed to sinks

use super::catalog::Channel;
use super::severity::Severity;

/// A fully rendered log call
///
/// `prefix` holds the label, scope, date, elapsed and call-site tokens in
/// that order; `args` holds the call arguments after pretty-printing.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub severity: Severity,
    pub scope: Option<String>,
    pub prefix: Vec<String>,
    pub args: Vec<String>,
}

impl Record {
    pub fn new(severity: Severity, scope: Option<String>) -> Self {
        Self {
            severity,
            scope,
            prefix: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Prefix tokens followed by arguments
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.prefix.iter().chain(self.args.iter()).map(String::as_str)
    }

    /// All tokens joined by single spaces
    pub fn line(&self) -> String {
        self.tokens().collect::<Vec<_>>().join(" ")
    }
}

/// A record as delivered to one channel of a sink
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRecord {
    pub channel: Channel,
    pub record: Record,
}
