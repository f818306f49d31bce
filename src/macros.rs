//! Logging macros for ergonomic argument lists.
//!
//! Each macro takes a logger (a [`Logger`](crate::Logger), a
//! [`LimitedLogger`](crate::LimitedLogger) or a reference to either) followed
//! by any number of arguments convertible into [`LogValue`](crate::LogValue).
//!
//! # Examples
//!
//! ```
//! use scoped_console_logger::prelude::*;
//! use scoped_console_logger::{info, warning};
//! use serde_json::json;
//!
//! let registry = Registry::builder().sink(MemorySink::new()).build();
//! let logger = registry.root();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // Several arguments, structured values are pretty-printed
//! let port = 8080;
//! info!(logger, "listening on", port);
//! warning!(logger, "slow request", json!({"path": "/", "ms": 950}));
//! ```

/// Log at an explicit severity.
///
/// # Examples
///
/// ```
/// # use scoped_console_logger::prelude::*;
/// # let logger = Registry::builder().build().root();
/// use scoped_console_logger::log;
/// log!(logger, Severity::Notice, "Simple message");
/// log!(logger, Severity::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Log as _;
        $logger.log($level, &[$($crate::LogValue::from($arg)),*])
    }};
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Emergency $(, $arg)*)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Alert $(, $arg)*)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Critical $(, $arg)*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use scoped_console_logger::prelude::*;
/// # let logger = Registry::builder().build().root();
/// use scoped_console_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code:", 500, "message:", "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Error $(, $arg)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Warning $(, $arg)*)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Notice $(, $arg)*)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use scoped_console_logger::prelude::*;
/// # let logger = Registry::builder().build().root();
/// use scoped_console_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Info $(, $arg)*)
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Verbose $(, $arg)*)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Debug $(, $arg)*)
    };
}

/// Log a message nobody is expected to read.
#[macro_export]
macro_rules! who_cares {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::WhoCares $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Registry, Renderer, Severity};
    use crate::sinks::MemorySink;
    use serde_json::json;

    fn setup() -> (crate::core::Logger, MemorySink) {
        let memory = MemorySink::new();
        let registry = Registry::builder()
            .renderer(Renderer::Ansi { colors: false })
            .sink(memory.clone())
            .build();
        let root = registry.root();
        root.set_pad(false);
        (root, memory)
    }

    #[test]
    fn test_log_macro() {
        let (logger, memory) = setup();
        log!(logger, Severity::Info, "Test message");
        log!(logger, Severity::Info, "Formatted:", 42);

        assert_eq!(memory.lines(), vec!["[INFO] Test message", "[INFO] Formatted: 42"]);
    }

    #[test]
    fn test_macro_without_arguments() {
        let (logger, memory) = setup();
        notice!(logger);

        assert_eq!(memory.lines(), vec!["[NOTICE]"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, memory) = setup();
        emergency!(logger, "e");
        alert!(logger, "a");
        critical!(logger, "c");
        error!(logger, "Code:", 500);
        warning!(logger, "Retry", 1, "of", 3);
        notice!(logger, "n");
        info!(logger, "Items:", 100usize);
        verbose!(logger, "v");
        debug!(logger, "Count:", 5);
        who_cares!(logger, "w",);

        // emergency, alert and critical also write to the trace channel
        assert_eq!(memory.len(), 13);
        assert!(memory.lines().contains(&"[WARNING] Retry 1 of 3".to_string()));
    }

    #[test]
    fn test_macro_with_reference_and_structured_value() {
        let (logger, memory) = setup();
        let by_ref = &logger;
        info!(by_ref, "payload", json!({"id": 1}));

        assert_eq!(memory.lines(), vec!["[INFO] payload {\n  \"id\": 1\n}"]);
    }

    #[test]
    fn test_macro_with_limited_logger() {
        let (logger, memory) = setup();
        let limited = logger.once(Some("macro")).expect("gate");
        info!(limited, "first");
        info!(limited, "second");

        assert_eq!(memory.lines(), vec!["[INFO] first"]);
    }
}
