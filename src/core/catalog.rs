//! Static per-severity table: labels, output channels and display styles
//!
//! The table is computed once per [`Environment`] and shared by every logger.

use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Target environment the output is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Environment {
    /// ANSI terminal, labels are padded to a fixed width
    #[default]
    Terminal,
    /// Developer console that understands `%c` CSS directives
    Browser,
}

/// Output channel a rendered record is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Channel {
    pub fn to_str(&self) -> &'static str {
        match self {
            Channel::Error => "error",
            Channel::Warn => "warn",
            Channel::Info => "info",
            Channel::Debug => "debug",
            Channel::Trace => "trace",
        }
    }
}

/// Named colors used by the level styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Grey,
    White,
    Red,
    Orange,
    Blue,
    Yellow,
    Black,
    LightGray,
}

impl Color {
    /// CSS color keyword
    pub fn css_name(&self) -> &'static str {
        match self {
            Color::Grey => "grey",
            Color::White => "white",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Black => "black",
            Color::LightGray => "lightgray",
        }
    }

    #[cfg(feature = "console")]
    pub fn ansi(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Color::Grey => BrightBlack,
            Color::White => White,
            Color::Red => Red,
            Color::Orange => TrueColor { r: 255, g: 165, b: 0 },
            Color::Blue => Blue,
            Color::Yellow => Yellow,
            Color::Black => Black,
            Color::LightGray => TrueColor { r: 211, g: 211, b: 211 },
        }
    }
}

/// Background and foreground pair for a level badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStyle {
    pub background: Color,
    pub foreground: Color,
}

impl LevelStyle {
    /// Shared base every level starts from
    pub const DEFAULT: LevelStyle = LevelStyle {
        background: Color::Grey,
        foreground: Color::White,
    };

    pub const fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub const fn with_foreground(mut self, foreground: Color) -> Self {
        self.foreground = foreground;
        self
    }

    /// Render as a CSS declaration list for `%c` console directives
    pub fn to_css(&self) -> String {
        format!(
            "padding: 2px 4px; border-radius: 2px; background-color: {}; color: {}",
            self.background.css_name(),
            self.foreground.css_name()
        )
    }
}

impl Default for LevelStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One row of the catalog
#[derive(Debug, Clone)]
pub struct LevelSpec {
    pub severity: Severity,
    pub label: &'static str,
    /// Fixed-width form, only computed for terminal output
    pub padded_label: Option<String>,
    pub channels: &'static [Channel],
    pub style: LevelStyle,
    /// Precomputed CSS, only computed for browser output
    pub css: Option<String>,
}

impl LevelSpec {
    /// Label to display, honoring the `pad` option when a padded form exists
    pub fn display_label(&self, pad: bool) -> &str {
        match (&self.padded_label, pad) {
            (Some(padded), true) => padded,
            _ => self.label,
        }
    }
}

pub struct LevelCatalog {
    levels: Vec<LevelSpec>,
}

impl LevelCatalog {
    fn build(environment: Environment) -> Self {
        let width = Severity::ALL
            .iter()
            .map(|severity| severity.to_str().len())
            .max()
            .unwrap_or(0);

        let levels = Severity::ALL
            .iter()
            .map(|&severity| {
                let style = style_for(severity);
                LevelSpec {
                    severity,
                    label: severity.to_str(),
                    padded_label: match environment {
                        Environment::Terminal => Some(center_pad(severity.to_str(), width)),
                        Environment::Browser => None,
                    },
                    channels: channels_for(severity),
                    style,
                    css: match environment {
                        Environment::Terminal => None,
                        Environment::Browser => Some(style.to_css()),
                    },
                }
            })
            .collect();

        Self { levels }
    }

    /// Shared catalog for the environment, built on first use
    pub fn get(environment: Environment) -> &'static LevelCatalog {
        static TERMINAL: OnceLock<LevelCatalog> = OnceLock::new();
        static BROWSER: OnceLock<LevelCatalog> = OnceLock::new();

        match environment {
            Environment::Terminal => TERMINAL.get_or_init(|| Self::build(Environment::Terminal)),
            Environment::Browser => BROWSER.get_or_init(|| Self::build(Environment::Browser)),
        }
    }

    #[inline]
    pub fn spec(&self, severity: Severity) -> &LevelSpec {
        &self.levels[usize::from(severity.as_u8())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.levels.iter()
    }
}

fn channels_for(severity: Severity) -> &'static [Channel] {
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical => {
            &[Channel::Error, Channel::Trace]
        }
        Severity::Error => &[Channel::Error],
        Severity::Warning => &[Channel::Warn],
        Severity::Notice | Severity::Info => &[Channel::Info],
        Severity::Verbose | Severity::Debug | Severity::WhoCares => &[Channel::Debug],
    }
}

fn style_for(severity: Severity) -> LevelStyle {
    let base = LevelStyle::DEFAULT;
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
            base.with_background(Color::Red)
        }
        Severity::Warning => base
            .with_background(Color::Orange)
            .with_foreground(Color::White),
        Severity::Notice => base.with_background(Color::Blue),
        Severity::Debug => base
            .with_background(Color::Yellow)
            .with_foreground(Color::Black),
        Severity::WhoCares => base
            .with_background(Color::LightGray)
            .with_foreground(Color::Black),
        Severity::Info | Severity::Verbose => base,
    }
}

/// Center `label` in `width` columns; an odd remainder goes after the label.
pub(crate) fn center_pad(label: &str, width: usize) -> String {
    let total = width.saturating_sub(label.chars().count());
    let before = total / 2;
    let after = total - before;
    format!("{}{}{}", " ".repeat(before), label, " ".repeat(after))
}
