//! Integration tests for the scoped console logger
//!
//! These tests verify:
//! - Channel routing per severity
//! - Threshold inheritance between root and scopes
//! - Scope identity and prefixes
//! - Rate limiting with once/limit/reset
//! - Exclusivity
//! - Date, elapsed and call-site tokens
//! - Browser (CSS) rendering

use scoped_console_logger::prelude::*;
use scoped_console_logger::{error, info, LoggerMetrics};
use serde_json::json;
use std::time::Duration;

fn plain_registry() -> (Registry, MemorySink) {
    let memory = MemorySink::new();
    let registry = Registry::builder()
        .renderer(Renderer::Ansi { colors: false })
        .sink(memory.clone())
        .build();
    (registry, memory)
}

fn elapsed_seconds(token: &str) -> f64 {
    token
        .trim_start_matches("[+")
        .trim_end_matches("s]")
        .parse()
        .expect("elapsed token should contain seconds")
}

#[test]
fn test_channel_routing_for_every_severity() {
    let expected = [
        (Severity::Emergency, vec![Channel::Error, Channel::Trace]),
        (Severity::Alert, vec![Channel::Error, Channel::Trace]),
        (Severity::Critical, vec![Channel::Error, Channel::Trace]),
        (Severity::Error, vec![Channel::Error]),
        (Severity::Warning, vec![Channel::Warn]),
        (Severity::Notice, vec![Channel::Info]),
        (Severity::Info, vec![Channel::Info]),
        (Severity::Verbose, vec![Channel::Debug]),
        (Severity::Debug, vec![Channel::Debug]),
        (Severity::WhoCares, vec![Channel::Debug]),
    ];

    for (severity, channels) in expected {
        let (registry, memory) = plain_registry();
        registry.root().log(severity, &["x".into()]);

        let written: Vec<Channel> = memory.records().iter().map(|r| r.channel).collect();
        assert_eq!(written, channels, "routing for {}", severity);
    }
}

#[test]
fn test_root_defaults_end_to_end() {
    let (registry, memory) = plain_registry();
    let root = registry.root();

    root.error(&["boom".into()]);

    let records = memory.on_channel(Channel::Error);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].prefix, vec!["[  ERROR  ]"]);
    assert_eq!(records[0].args, vec!["boom"]);
    assert_eq!(memory.len(), 1);
}

#[test]
fn test_root_threshold() {
    let (registry, memory) = plain_registry();
    let root = registry.root();
    root.set_pad(false);
    root.set_level(Some(Severity::Warning));

    root.info(&["x".into()]);
    assert!(memory.is_empty());

    root.error(&["y".into()]);
    root.warning(&["z".into()]);
    assert_eq!(memory.lines(), vec!["[ERROR] y", "[WARNING] z"]);
}

#[test]
fn test_scope_inherits_stricter_threshold() {
    let (registry, memory) = plain_registry();
    let root = registry.root();
    let db = root.scope("db");

    db.set_level(Some(Severity::Debug));
    root.set_level(Some(Severity::Notice));
    db.info(&["filtered by root".into()]);
    db.notice(&["passes".into()]);
    assert_eq!(memory.len(), 1);

    root.set_level(None);
    db.info(&["now passes".into()]);
    db.who_cares(&["filtered by own level".into()]);
    assert_eq!(memory.len(), 2);
}

#[test]
fn test_scope_identity_and_prefix() {
    let (registry, memory) = plain_registry();
    let first = registry.scope("db");
    let second = registry.scope("db");
    assert!(first.ptr_eq(&second));

    first.set_show_date(true);
    assert!(second.show_date());
    first.set_show_date(false);

    second.warning(&["slow query".into()]);
    let record = &memory.records()[0].record;
    assert_eq!(record.scope.as_deref(), Some("db"));
    assert_eq!(record.prefix.iter().filter(|t| *t == "<db>").count(), 1);
    assert_eq!(memory.lines(), vec!["[ WARNING ] <db> slow query"]);
}

#[test]
fn test_root_flags_are_inherited_by_scopes() {
    let (registry, memory) = plain_registry();
    let root = registry.root();
    root.set_show_date(true);

    registry.scope("net").info(&["up".into()]);

    let record = &memory.records()[0].record;
    assert_eq!(record.prefix.len(), 3);
    assert!(record.prefix[2].starts_with('['));
    assert_eq!(record.prefix[2].len(), "[2025-01-08 10:30:45.123]".len());
}

#[test]
fn test_limit_and_reset() {
    let (registry, memory) = plain_registry();
    let root = registry.root();

    let limited = root.limit(3, Some("k")).expect("gate");
    for _ in 0..10 {
        limited.info(&["tick".into()]);
    }
    assert_eq!(memory.len(), 3);

    limited.gate().reset();
    for _ in 0..10 {
        limited.info(&["tick".into()]);
    }
    assert_eq!(memory.len(), 6);
}

#[test]
fn test_limit_is_cumulative_across_call_sites() {
    let (registry, memory) = plain_registry();
    let root = registry.root();

    root.limit(2, Some("shared")).expect("gate").info(&["a".into()]);
    root.limit(2, Some("shared")).expect("gate").info(&["b".into()]);
    root.limit(2, Some("shared")).expect("gate").info(&["c".into()]);

    assert_eq!(memory.len(), 2);
}

#[test]
fn test_once_matches_limit_one() {
    let (registry, memory) = plain_registry();
    let root = registry.root();

    for _ in 0..3 {
        root.once(Some("once")).expect("gate").error(&["a".into()]);
        root.limit(1, Some("limit")).expect("gate").error(&["b".into()]);
    }

    assert_eq!(memory.len(), 2);
    let once = root.once(Some("once")).expect("gate");
    let limit = root.limit(1, Some("limit")).expect("gate");
    assert_eq!(once.gate().max(), limit.gate().max());
    assert_eq!(once.remaining(), limit.remaining());
}

#[test]
fn test_once_without_key_in_loop() {
    let (registry, memory) = plain_registry();
    let root = registry.root();

    for i in 0..5 {
        root.once(None).expect("derived key").info(&[i.into()]);
    }

    assert_eq!(memory.len(), 1);
    assert_eq!(memory.records()[0].record.args, vec!["0"]);
}

#[test]
fn test_missing_inspector_makes_once_fail() {
    let registry = Registry::builder().without_call_sites().build();
    let err = registry.root().once(None).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidKey { .. }));
}

#[test]
fn test_exclusive_silences_others() {
    let (registry, memory) = plain_registry();
    let root = registry.root();
    let a = registry.scope("a");
    let b = registry.scope("b");

    a.set_exclusive(true);
    root.info(&["root".into()]);
    b.info(&["b".into()]);
    a.info(&["a".into()]);
    assert_eq!(memory.len(), 1);
    assert_eq!(memory.records()[0].record.scope.as_deref(), Some("a"));

    b.set_exclusive(true);
    a.info(&["a again".into()]);
    b.info(&["b again".into()]);
    assert_eq!(memory.len(), 2);
    assert_eq!(memory.records()[1].record.scope.as_deref(), Some("b"));

    b.toggle_exclusive();
    root.info(&["everyone".into()]);
    a.info(&["everyone".into()]);
    assert_eq!(memory.len(), 4);
}

#[test]
fn test_elapsed_first_call_is_zero_and_tracks_delay() {
    let (registry, memory) = plain_registry();
    let timer = registry.scope("timer");
    timer.set_show_elapsed(true);

    timer.info(&["start".into()]);
    std::thread::sleep(Duration::from_millis(100));
    timer.info(&["stop".into()]);

    let records = memory.records();
    let first = elapsed_seconds(&records[0].record.prefix[2]);
    let second = elapsed_seconds(&records[1].record.prefix[2]);

    assert!(first < 0.01, "first elapsed was {}", first);
    assert!((0.09..0.5).contains(&second), "second elapsed was {}", second);
}

#[test]
fn test_elapsed_is_per_logger() {
    let (registry, memory) = plain_registry();
    let root = registry.root();
    root.set_show_elapsed(true);

    root.info(&["root".into()]);
    std::thread::sleep(Duration::from_millis(50));
    registry.scope("fresh").info(&["first call of this scope".into()]);

    let scoped = &memory.records()[1].record;
    assert_eq!(scoped.prefix[2], "[+0.000s]");
}

#[test]
fn test_show_stack_token() {
    let (registry, memory) = plain_registry();
    let root = registry.root();
    root.set_show_stack(true);

    let line = line!() + 1;
    error!(root, "with location");

    let prefix = &memory.records()[0].record.prefix;
    assert!(prefix[1].contains("integration_tests.rs"));
    assert!(prefix[1].contains(&format!(":{}:", line)));
}

#[test]
fn test_show_stack_without_inspector_emits_no_token() {
    let memory = MemorySink::new();
    let registry = Registry::builder()
        .renderer(Renderer::Ansi { colors: false })
        .without_call_sites()
        .sink(memory.clone())
        .build();
    let root = registry.root();
    root.set_show_stack(true);

    root.info(&["no location".into()]);
    assert_eq!(memory.records()[0].record.prefix.len(), 1);
}

#[test]
fn test_structured_arguments() {
    let (registry, memory) = plain_registry();
    let root = registry.root();
    root.set_pad(false);

    info!(root, "user", json!({"id": 7, "roles": ["admin"]}));
    assert_eq!(
        memory.lines(),
        vec!["[INFO] user {\n  \"id\": 7,\n  \"roles\": [\n    \"admin\"\n  ]\n}"]
    );

    let memory = MemorySink::new();
    let registry = Registry::builder()
        .renderer(Renderer::Ansi { colors: false })
        .without_inspector()
        .sink(memory.clone())
        .build();
    info!(registry.root(), json!({"id": 7}));
    assert_eq!(memory.records()[0].record.args, vec![r#"{"id":7}"#]);
}

#[test]
fn test_browser_rendering() {
    let memory = MemorySink::new();
    let registry = Registry::builder()
        .environment(Environment::Browser)
        .sink(memory.clone())
        .build();

    registry.scope("ui").warning(&["layout shift".into()]);

    let record = &memory.records()[0].record;
    assert_eq!(record.prefix[0], "%cWARNING");
    assert!(record.prefix[1].starts_with("padding: 2px 4px; border-radius: 2px;"));
    assert!(record.prefix[1].contains("background-color: orange"));
    assert_eq!(record.prefix[2], "<ui>");
}

#[test]
fn test_metrics_track_suppression() {
    let (registry, _memory) = plain_registry();
    let root = registry.root();
    root.set_level(Some(Severity::Error));

    root.info(&[]);
    root.error(&[]);
    let limited = root.once(Some("m")).expect("gate");
    limited.error(&[]);
    limited.error(&[]);

    let metrics: &LoggerMetrics = registry.metrics();
    assert_eq!(metrics.emitted_count(), 2);
    assert_eq!(metrics.suppressed_count(), 1);
    assert_eq!(metrics.rate_limited_count(), 1);
}

#[test]
fn test_concurrent_logging_from_scopes() {
    let (registry, memory) = plain_registry();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                let logger = registry.scope(&format!("worker-{}", i % 2));
                for n in 0..25 {
                    logger.info(&[n.into()]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(memory.len(), 100);
    assert_eq!(registry.scope_names(), vec!["worker-0", "worker-1"]);
}
