//! Pretty-printing of structured log arguments

use super::config::InspectOptions;
use super::error::{LoggerError, Result};
use serde_json::Value;
use std::fmt::Write;

pub trait Inspector: Send + Sync {
    /// Render a non-primitive value; errors make the pipeline fall back to
    /// the value's compact form
    fn inspect(&self, value: &Value, options: &InspectOptions) -> Result<String>;
}

/// Indented JSON-like printer that collapses nesting beyond `depth`
///
/// # Example
///
/// ```
/// use scoped_console_logger::{InspectOptions, Inspector, JsonInspector};
/// use serde_json::json;
///
/// let options = InspectOptions { depth: Some(0), colors: false };
/// let text = JsonInspector::new()
///     .inspect(&json!({"user": {"id": 1}}), &options)
///     .unwrap();
/// assert_eq!(text, "{\n  \"user\": [Object]\n}");
/// ```
#[derive(Debug, Clone)]
pub struct JsonInspector {
    indent: usize,
}

impl JsonInspector {
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn write_value(
        &self,
        out: &mut String,
        value: &Value,
        level: usize,
        options: &InspectOptions,
    ) -> std::fmt::Result {
        let collapsed = options.depth.is_some_and(|depth| level > depth);

        match value {
            Value::Object(map) if map.is_empty() => out.write_str("{}"),
            Value::Array(items) if items.is_empty() => out.write_str("[]"),
            Value::Object(_) if collapsed => out.write_str("[Object]"),
            Value::Array(_) if collapsed => out.write_str("[Array]"),
            Value::Object(map) => {
                out.write_str("{\n")?;
                for (index, (key, item)) in map.iter().enumerate() {
                    self.write_indent(out, level + 1)?;
                    write!(out, "{}: ", Value::String(key.clone()))?;
                    self.write_value(out, item, level + 1, options)?;
                    if index + 1 < map.len() {
                        out.write_char(',')?;
                    }
                    out.write_char('\n')?;
                }
                self.write_indent(out, level)?;
                out.write_char('}')
            }
            Value::Array(items) => {
                out.write_str("[\n")?;
                for (index, item) in items.iter().enumerate() {
                    self.write_indent(out, level + 1)?;
                    self.write_value(out, item, level + 1, options)?;
                    if index + 1 < items.len() {
                        out.write_char(',')?;
                    }
                    out.write_char('\n')?;
                }
                self.write_indent(out, level)?;
                out.write_char(']')
            }
            scalar => out.write_str(&paint(scalar, options.colors)),
        }
    }

    fn write_indent(&self, out: &mut String, level: usize) -> std::fmt::Result {
        write!(out, "{:width$}", "", width = level * self.indent)
    }
}

impl Default for JsonInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector for JsonInspector {
    fn inspect(&self, value: &Value, options: &InspectOptions) -> Result<String> {
        let mut out = String::new();
        self.write_value(&mut out, value, 0, options)
            .map_err(|e| LoggerError::inspect(e.to_string()))?;
        Ok(out)
    }
}

#[cfg(feature = "console")]
fn paint(scalar: &Value, colors: bool) -> String {
    use colored::Colorize;

    let text = scalar.to_string();
    if !colors {
        return text;
    }
    match scalar {
        Value::String(_) => text.green().to_string(),
        Value::Number(_) | Value::Bool(_) => text.yellow().to_string(),
        _ => text.dimmed().to_string(),
    }
}

#[cfg(not(feature = "console"))]
fn paint(scalar: &Value, _colors: bool) -> String {
    scalar.to_string()
}
