//! Facade backend that forwards into `tracing`.

use std::fmt::Arguments;

use levelog::{Level, Logger};

/// Logger implementation that delegates to the `tracing` crate.
///
/// Each facade level maps to the `tracing` macro of the same name, so
/// subscribers, filters and span context apply to facade output as well.
/// Events carry this module as their target.
///
/// ```
/// use levelog_tracing::TracingLogger;
///
/// levelog::set_backend(TracingLogger);
/// levelog::warnf!("shows up wherever the tracing subscriber writes");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, args: Arguments<'_>) {
        match level {
            Level::Debug => tracing::debug!("{}", args),
            Level::Info => tracing::info!("{}", args),
            Level::Warn => tracing::warn!("{}", args),
            Level::Error => tracing::error!("{}", args),
        }
    }
}
