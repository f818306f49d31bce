//! Per-logger configuration and partial option overlays

use super::catalog::Environment;
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Settings handed to the object pretty-printer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// Nesting depth printed before collapsing to a placeholder; `None` is unlimited
    pub depth: Option<usize>,
    /// Colorize scalar values (terminal only)
    pub colors: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            depth: Some(2),
            colors: false,
        }
    }
}

/// Mutable configuration record owned by each logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub enabled: bool,
    pub show_stack: bool,
    pub show_date: bool,
    pub show_elapsed: bool,
    /// Threshold; `None` means no filtering beyond the root's
    pub level: Option<Severity>,
    pub pad: bool,
    pub inspect_options: InspectOptions,
}

impl LoggerConfig {
    /// Defaults for the given environment; padding is a terminal-only default
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            enabled: true,
            show_stack: false,
            show_date: false,
            show_elapsed: false,
            level: None,
            pad: environment == Environment::Terminal,
            inspect_options: InspectOptions::default(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

/// Partial configuration overlaid on defaults when a logger is created
///
/// # Example
///
/// ```
/// use scoped_console_logger::{LoggerOptions, Severity};
///
/// let options = LoggerOptions::new()
///     .level(Severity::Notice)
///     .show_date(true);
/// assert_eq!(options.level, Some(Some(Severity::Notice)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    pub enabled: Option<bool>,
    pub show_stack: Option<bool>,
    pub show_date: Option<bool>,
    pub show_elapsed: Option<bool>,
    /// Outer `None` leaves the default; `Some(None)` explicitly clears the threshold
    pub level: Option<Option<Severity>>,
    pub pad: Option<bool>,
    pub inspect_options: Option<InspectOptions>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn show_stack(mut self, show: bool) -> Self {
        self.show_stack = Some(show);
        self
    }

    #[must_use]
    pub fn show_date(mut self, show: bool) -> Self {
        self.show_date = Some(show);
        self
    }

    #[must_use]
    pub fn show_elapsed(mut self, show: bool) -> Self {
        self.show_elapsed = Some(show);
        self
    }

    #[must_use]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = Some(Some(level));
        self
    }

    #[must_use]
    pub fn no_level(mut self) -> Self {
        self.level = Some(None);
        self
    }

    #[must_use]
    pub fn pad(mut self, pad: bool) -> Self {
        self.pad = Some(pad);
        self
    }

    #[must_use]
    pub fn inspect_options(mut self, options: InspectOptions) -> Self {
        self.inspect_options = Some(options);
        self
    }

    /// Overlay the fields that are set onto `config`
    pub fn apply_to(&self, config: &mut LoggerConfig) {
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(show) = self.show_stack {
            config.show_stack = show;
        }
        if let Some(show) = self.show_date {
            config.show_date = show;
        }
        if let Some(show) = self.show_elapsed {
            config.show_elapsed = show;
        }
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(pad) = self.pad {
            config.pad = pad;
        }
        if let Some(ref inspect) = self.inspect_options {
            config.inspect_options = inspect.clone();
        }
    }

    /// Defaults for `environment` with these options applied
    pub fn build(&self, environment: Environment) -> LoggerConfig {
        let mut config = LoggerConfig::for_environment(environment);
        self.apply_to(&mut config);
        config
    }
}
