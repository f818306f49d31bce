//! Call-site inspection
//!
//! Logging entry points are `#[track_caller]`, so the location of the user's
//! call is available without walking the stack. An inspector turns that
//! location into a [`CallSite`]; leaving it out of the registry disables the
//! call-site token and automatic rate-limit keys.

use std::fmt;
use std::panic::Location;

/// Where a logging call was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub function: Option<String>,
}

impl CallSite {
    /// Stable key for rate-limit gates
    pub fn key(&self) -> String {
        match self.function {
            Some(ref function) => function.clone(),
            None => format!("{}:{}:{}", self.file, self.line, self.column),
        }
    }

    /// Prefix token: `<function>` or `file:line:col`
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(ref function) => write!(f, "<{}>", function),
            None => write!(f, "{}:{}:{}", self.file, self.line, self.column),
        }
    }
}

pub trait CallSiteInspector: Send + Sync {
    /// Describe the call made at `location`, or `None` when unknown
    fn inspect(&self, location: &'static Location<'static>) -> Option<CallSite>;
}

/// Inspector backed by `#[track_caller]` locations
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackCallerInspector;

impl CallSiteInspector for TrackCallerInspector {
    fn inspect(&self, location: &'static Location<'static>) -> Option<CallSite> {
        Some(CallSite {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
            function: None,
        })
    }
}
