//! The backend installed when the process starts.

use std::fmt::{self, Arguments, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use chrono::Local;

use crate::backend::Logger;
use crate::level::Level;

/// Timestamp prefix for every line, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Writes one timestamped, level-tagged line per call.
///
/// Lines look like `2024/03/01 12:00:00 [INFO] listening on :8080`. A
/// newline is appended unless the message already ends with one. Write
/// failures are swallowed: logging never reports back to the caller.
pub struct DefaultLogger {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl DefaultLogger {
    /// Log to standard error. This is the facade's initial backend.
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Log to standard output.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Log to an arbitrary writer.
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn render(level: Level, args: Arguments<'_>) -> String {
        let mut line = String::with_capacity(64);
        // A Display impl returning Err leaves a truncated line; it is still written.
        let _ = write!(
            line,
            "{} [{}] {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            args
        );
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl Logger for DefaultLogger {
    fn log(&self, level: Level, args: Arguments<'_>) {
        let line = Self::render(level, args);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

impl fmt::Debug for DefaultLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultLogger").finish_non_exhaustive()
    }
}
