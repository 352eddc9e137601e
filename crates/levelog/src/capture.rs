//! In-memory backend for asserting on facade output in tests.

use std::fmt::{Arguments, Write as _};
use std::sync::{Arc, Mutex, PoisonError};

use crate::backend::Logger;
use crate::level::Level;

/// One message received by a [`CaptureLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
}

/// Backend that records every message it receives.
///
/// Clones share the same buffer, so a test can install one clone and keep
/// another for inspection.
///
/// ```
/// use levelog::capture::CaptureLogger;
/// use levelog::{Level, Logger};
///
/// let capture = CaptureLogger::new();
/// capture.warnf(format_args!("disk {}% full", 91));
/// assert_eq!(capture.messages_at(Level::Warn), vec!["disk 91% full"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureLogger {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered messages at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Assert that `message` was recorded at `level`.
    ///
    /// # Panics
    ///
    /// Panics if no such record exists.
    pub fn assert_logged(&self, level: Level, message: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.level == level && r.message == message);
        assert!(
            found,
            "Expected [{}] {:?} not found in {} captured records",
            level,
            message,
            records.len()
        );
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: Level, args: Arguments<'_>) {
        let mut message = String::new();
        // A failing Display impl must not panic the caller; keep what rendered.
        let _ = write!(message, "{}", args);
        let record = CapturedRecord { level, message };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[test]
    fn test_clones_share_records() {
        let capture = CaptureLogger::new();
        let installed = capture.clone();

        installed.infof(format_args!("x={}", 1));

        assert_eq!(capture.len(), 1);
        capture.assert_logged(Level::Info, "x=1");
    }

    struct Refuses;

    impl fmt::Display for Refuses {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_failing_display_does_not_panic() {
        let capture = CaptureLogger::new();

        capture.warnf(format_args!("value: {}", Refuses));

        assert_eq!(capture.len(), 1);
        assert_eq!(capture.records()[0].level, Level::Warn);
        assert!(capture.records()[0].message.starts_with("value: "));
    }

    #[test]
    fn test_clear() {
        let capture = CaptureLogger::new();
        capture.errorf(format_args!("boom"));
        capture.clear();
        assert!(capture.is_empty());
    }

    #[test]
    #[should_panic(expected = "not found")]
    fn test_assert_logged_panics_when_missing() {
        CaptureLogger::new().assert_logged(Level::Debug, "nothing");
    }
}
