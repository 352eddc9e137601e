#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Mutex, PoisonError};

use levelog_tracing::{capture_subscriber, TracingLogger};
use tracing::Level as TracingLevel;

static SERIAL: Mutex<()> = Mutex::new(());

const FACADE_TARGET: &str = "levelog::facade";
const ADAPTER_TARGET: &str = "levelog_tracing::adapter";

#[test]
fn test_facade_output_becomes_tracing_events() {
    let _guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    let (subscriber, capture) = capture_subscriber();

    tracing::subscriber::with_default(subscriber, || {
        levelog::set_backend(TracingLogger);
        levelog::set_level(levelog::Level::Info);

        levelog::debugf!("x={}", 0);
        levelog::infof!("x={}", 1);
        levelog::set_level(levelog::Level::Warn);
        levelog::infof!("x={}", 2);
        levelog::errorf!("boom");
    });

    let forwarded: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.target == ADAPTER_TARGET)
        .map(|e| (e.level, e.message.unwrap_or_default()))
        .collect();
    assert_eq!(
        forwarded,
        vec![
            (TracingLevel::INFO, "x=1".to_string()),
            (TracingLevel::ERROR, "boom".to_string()),
        ]
    );
    assert_eq!(capture.messages_at(TracingLevel::INFO), vec!["x=1"]);
    assert_eq!(capture.messages_at(TracingLevel::ERROR), vec!["boom"]);
}

#[test]
fn test_reconfiguration_is_reported_through_tracing() {
    let _guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    let (subscriber, capture) = capture_subscriber();

    tracing::subscriber::with_default(subscriber, || {
        levelog::set_level(levelog::Level::Error);
        levelog::clear_backend();
    });

    let own: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.target == FACADE_TARGET)
        .collect();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|e| e.level == TracingLevel::DEBUG));
    assert_eq!(own[0].fields.get("level"), Some(&"ERROR".to_string()));
    assert_eq!(
        own[1].message.as_deref(),
        Some("levelog backend cleared")
    );
}
