//! Environment-specific rendering of the level badge

use super::catalog::{Environment, LevelSpec};

/// Strategy chosen once at startup for how level labels are styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Terminal output; `colors: false` (or building without the `console`
    /// feature) falls back to a plain `[LEVEL]` label
    Ansi { colors: bool },
    /// `%c` directive followed by a CSS declaration token
    Css,
}

impl Renderer {
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Terminal => Renderer::Ansi { colors: true },
            Environment::Browser => Renderer::Css,
        }
    }

    pub fn environment(&self) -> Environment {
        match self {
            Renderer::Ansi { .. } => Environment::Terminal,
            Renderer::Css => Environment::Browser,
        }
    }

    /// Tokens for the level badge
    pub fn label_tokens(&self, spec: &LevelSpec, pad: bool) -> Vec<String> {
        let label = spec.display_label(pad);
        match self {
            Renderer::Ansi { colors: true } => vec![colorize(spec, label)],
            Renderer::Ansi { colors: false } => vec![format!("[{}]", label)],
            Renderer::Css => {
                let css = spec
                    .css
                    .clone()
                    .unwrap_or_else(|| spec.style.to_css());
                vec![format!("%c{}", label), css]
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

#[cfg(feature = "console")]
fn colorize(spec: &LevelSpec, label: &str) -> String {
    use colored::Colorize;

    label
        .on_color(spec.style.background.ansi())
        .color(spec.style.foreground.ansi())
        .to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(_spec: &LevelSpec, label: &str) -> String {
    format!("[{}]", label)
}
