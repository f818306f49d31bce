//! Scoped logging example
//!
//! Demonstrates scopes, rate limiting and exclusivity on an explicitly
//! constructed registry.
//!
//! Run with: cargo run --example scoped_logging

use scoped_console_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Scoped Console Logger - Scoped Logging Example ===\n");

    let registry = Registry::builder()
        .sink(ConsoleSink::new())
        .root_options(LoggerOptions::new().level(Severity::Debug))
        .build();
    let root = registry.root();

    println!("1. Scopes inherit the root threshold:");
    let db = registry.get_or_create_scope("db", LoggerOptions::new().show_stack(true));
    let http = root.scope("http");
    db.info(&["connected".into(), "pool size".into(), 8.into()]);
    http.notice(&["listening on".into(), 8080.into()]);
    http.who_cares(&["below the root threshold (hidden)".into()]);

    println!("\n2. Rate limiting:");
    for attempt in 1..=5 {
        root.once(None)?.warning(&["retrying, shown once".into(), attempt.into()]);
        root.limit(2, Some("retry"))?
            .info(&["retry attempt".into(), attempt.into()]);
    }

    println!("\n3. Exclusivity:");
    db.set_exclusive(true);
    http.error(&["silenced while db is exclusive".into()]);
    db.error(&["only db can speak".into()]);
    db.set_exclusive(false);
    http.error(&["http is back".into()]);

    let metrics = registry.metrics();
    println!(
        "\nEmitted: {}, suppressed: {}, rate limited: {}",
        metrics.emitted_count(),
        metrics.suppressed_count(),
        metrics.rate_limited_count()
    );

    registry.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
