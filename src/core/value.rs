//! Log call arguments

use super::error::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A single argument passed to a logging method
///
/// Primitive values are written as-is; `Structured` values are handed to the
/// pretty-printer when one is configured.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Structured(serde_json::Value),
}

impl LogValue {
    /// Serialize any value into a structured argument
    ///
    /// # Example
    ///
    /// ```
    /// use scoped_console_logger::LogValue;
    /// use std::collections::BTreeMap;
    ///
    /// let mut ports = BTreeMap::new();
    /// ports.insert("http", 80);
    /// let value = LogValue::structured(&ports).unwrap();
    /// assert!(!value.is_primitive());
    /// ```
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        !matches!(self, LogValue::Structured(_))
    }

    /// Default textual form, used when no pretty-printer is available
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            LogValue::Str(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Str(s) => write!(f, "{}", s),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::UInt(u) => write!(f, "{}", u),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Null => write!(f, "null"),
            LogValue::Structured(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Str(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Str(s.to_string())
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Str(s.clone())
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<u64> for LogValue {
    fn from(u: u64) -> Self {
        LogValue::UInt(u)
    }
}

impl From<u32> for LogValue {
    fn from(u: u32) -> Self {
        LogValue::UInt(u as u64)
    }
}

impl From<usize> for LogValue {
    fn from(u: usize) -> Self {
        LogValue::UInt(u as u64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LogValue::Null)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => LogValue::Null,
            Value::Bool(b) => LogValue::Bool(b),
            Value::String(s) => LogValue::Str(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LogValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    LogValue::UInt(u)
                } else {
                    LogValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            structured @ (Value::Array(_) | Value::Object(_)) => LogValue::Structured(structured),
        }
    }
}
