//! The pluggable backend interface and the no-op backend.

use std::fmt::Arguments;
use std::sync::Arc;

use crate::level::Level;

/// A logging backend the facade forwards to.
///
/// Only [`log`](Logger::log) is required; the four per-level methods
/// delegate to it and may be overridden individually. Formatting is carried
/// as [`Arguments`], so rendering (and its cost) is left to the backend.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: one instance is shared by every
/// thread that logs through the facade.
///
/// # Example
///
/// ```
/// use levelog::{Level, Logger};
/// use std::fmt::Arguments;
///
/// struct Prefixed;
///
/// impl Logger for Prefixed {
///     fn log(&self, level: Level, args: Arguments<'_>) {
///         println!("app {level}: {args}");
///     }
/// }
///
/// Prefixed.infof(format_args!("ready after {}ms", 12));
/// ```
pub trait Logger: Send + Sync {
    /// Emit a message at `level`.
    fn log(&self, level: Level, args: Arguments<'_>);

    /// Emit a debug-level message.
    fn debugf(&self, args: Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Emit an info-level message.
    fn infof(&self, args: Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Emit a warn-level message.
    fn warnf(&self, args: Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Emit an error-level message.
    fn errorf(&self, args: Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, args: Arguments<'_>) {
        (**self).log(level, args);
    }

    fn debugf(&self, args: Arguments<'_>) {
        (**self).debugf(args);
    }

    fn infof(&self, args: Arguments<'_>) {
        (**self).infof(args);
    }

    fn warnf(&self, args: Arguments<'_>) {
        (**self).warnf(args);
    }

    fn errorf(&self, args: Arguments<'_>) {
        (**self).errorf(args);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, args: Arguments<'_>) {
        (**self).log(level, args);
    }

    fn debugf(&self, args: Arguments<'_>) {
        (**self).debugf(args);
    }

    fn infof(&self, args: Arguments<'_>) {
        (**self).infof(args);
    }

    fn warnf(&self, args: Arguments<'_>) {
        (**self).warnf(args);
    }

    fn errorf(&self, args: Arguments<'_>) {
        (**self).errorf(args);
    }
}

/// A backend that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: Level, _args: Arguments<'_>) {}
}
