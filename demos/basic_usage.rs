//! Basic logger usage example
//!
//! Demonstrates the ten severities, thresholds and prefix tokens on the
//! process-wide registry.
//!
//! Run with: cargo run --example basic_usage

use scoped_console_logger::prelude::*;
use scoped_console_logger::{info, warning};
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Scoped Console Logger - Basic Usage Example ===\n");

    let root = scoped_console_logger::root();

    // Log messages at every level
    println!("1. Logging at different levels:");
    root.emergency(&["This is an emergency message".into()]);
    root.alert(&["This is an alert message".into()]);
    root.critical(&["This is a critical message".into()]);
    root.error(&["This is an error message".into()]);
    root.warning(&["This is a warning message".into()]);
    root.notice(&["This is a notice message".into()]);
    root.info(&["This is an info message".into()]);
    root.verbose(&["This is a verbose message".into()]);
    root.debug(&["This is a debug message".into()]);
    root.who_cares(&["This is a who-cares message".into()]);

    println!("\n2. Threshold set to WARNING - notice and below won't show:");
    root.set_level(Some(Severity::Warning));
    root.info(&["Info message (hidden)".into()]);
    root.notice(&["Notice message (hidden)".into()]);
    root.warning(&["Warning message (visible)".into()]);
    root.set_level(None);

    println!("\n3. Date and elapsed-time tokens:");
    root.update(|config| {
        config.show_date = true;
        config.show_elapsed = true;
    });
    info!(root, "first call");
    std::thread::sleep(std::time::Duration::from_millis(120));
    info!(root, "second call, about 0.12s later");

    println!("\n4. Structured arguments:");
    warning!(root, "slow request", json!({"path": "/api", "ms": 950}));

    scoped_console_logger::Registry::global().flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
