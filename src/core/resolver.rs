//! Effective configuration for a single log call
//!
//! Runs on every call; the root configuration may change between calls.

use super::config::LoggerConfig;
use super::severity::Severity;

/// Merge a logger's own configuration with the root's.
///
/// - `level`: the stricter (numerically smaller) threshold wins, unset means
///   no constraint
/// - `show_date`, `show_elapsed`, `pad`, `show_stack`: enabled if either side
///   enables it
/// - `enabled`, `inspect_options`: the logger's own values only
pub fn resolve(local: &LoggerConfig, root: &LoggerConfig) -> LoggerConfig {
    LoggerConfig {
        enabled: local.enabled,
        show_stack: local.show_stack || root.show_stack,
        show_date: local.show_date || root.show_date,
        show_elapsed: local.show_elapsed || root.show_elapsed,
        level: stricter(local.level, root.level),
        pad: local.pad || root.pad,
        inspect_options: local.inspect_options.clone(),
    }
}

fn stricter(local: Option<Severity>, root: Option<Severity>) -> Option<Severity> {
    match (local, root) {
        (Some(local), Some(root)) => Some(local.min(root)),
        (local, None) => local,
        (None, root) => root,
    }
}
