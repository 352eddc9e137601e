//! Test capture mode for deterministic logging assertions
//!
//! This module provides a subscriber layer that records `tracing` events in
//! memory, so tests can check what the facade forwarded through
//! [`TracingLogger`](crate::TracingLogger).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// A captured event with its rendered fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub message: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer that appends every event to a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.fields.remove("message"),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of events at `level`, oldest first
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .filter_map(|e| e.message)
            .collect()
    }

    /// Assert that an event with this level and message was captured
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_logged(&self, level: Level, message: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.level == level && e.message.as_deref() == Some(message));
        assert!(
            found,
            "Expected {} event {:?} not found in {} captured events",
            level,
            message,
            events.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Build a registry with a capture layer attached.
///
/// Use it with `tracing::subscriber::with_default` to keep capture scoped to
/// one test:
///
/// ```
/// use levelog_tracing::{capture_subscriber, TracingLogger};
/// use levelog::Logger;
///
/// let (subscriber, capture) = capture_subscriber();
/// tracing::subscriber::with_default(subscriber, || {
///     TracingLogger.infof(format_args!("hello"));
/// });
/// capture.assert_logged(tracing::Level::INFO, "hello");
/// ```
pub fn capture_subscriber() -> (impl Subscriber + Send + Sync, TestCapture) {
    let (layer, capture) = TestCaptureLayer::new();
    (tracing_subscriber::registry().with(layer), capture)
}
