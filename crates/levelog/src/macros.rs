//! Formatting macros over the facade functions.
//!
//! Each macro takes a format string and arguments, exactly like
//! `format!`, and hands the resulting [`Arguments`](std::fmt::Arguments) to
//! the matching facade function. Nothing is rendered unless the message
//! passes the threshold.

/// Log at debug level through the global facade.
///
/// ```
/// levelog::debugf!("cache miss for key {}", 42);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::core::format_args!($($arg)+))
    };
}

/// Log at info level through the global facade.
///
/// ```
/// levelog::infof!("x={}", 1);
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::core::format_args!($($arg)+))
    };
}

/// Log at warn level through the global facade.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::core::format_args!($($arg)+))
    };
}

/// Log at error level through the global facade.
///
/// ```
/// levelog::errorf!("boom");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::core::format_args!($($arg)+))
    };
}
