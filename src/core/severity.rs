//! Severity definitions
//!
//! Lower numeric value means more severe. A threshold suppresses every call
//! whose severity number is greater than the threshold.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Verbose = 7,
    Debug = 8,
    WhoCares = 9,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 10] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Verbose,
        Severity::Debug,
        Severity::WhoCares,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::WhoCares => "WHO CARES",
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether a call at this severity passes the given threshold.
    ///
    /// An unset threshold lets everything through.
    #[inline]
    pub fn passes(self, threshold: Option<Severity>) -> bool {
        match threshold {
            Some(threshold) => self <= threshold,
            None => true,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LoggerError::invalid_severity(value))
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Severity::try_from(number);
        }

        match trimmed.to_uppercase().replace(['_', '-', ' '], "").as_str() {
            "EMERGENCY" | "EMERG" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRITICAL" | "CRIT" => Ok(Severity::Critical),
            "ERROR" | "ERR" => Ok(Severity::Error),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "VERBOSE" => Ok(Severity::Verbose),
            "DEBUG" => Ok(Severity::Debug),
            "WHOCARES" => Ok(Severity::WhoCares),
            _ => Err(LoggerError::invalid_severity(s)),
        }
    }
}
