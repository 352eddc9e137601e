//! Process-wide logging state and the functions that gate on it.
//!
//! The state is a threshold [`Level`] plus an optional backend, kept behind
//! a single reader/writer lock. Setters take the write lock; getters and log
//! calls take the read lock just long enough to copy a `(backend, level)`
//! snapshot. The backend is invoked after the lock is released, so a backend
//! may itself reconfigure the facade.

use std::fmt::Arguments;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::backend::Logger;
use crate::default_logger::DefaultLogger;
use crate::errors::Result;
use crate::level::Level;

struct State {
    level: Level,
    backend: Option<Arc<dyn Logger>>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            level: Level::Info,
            backend: Some(Arc::new(DefaultLogger::stderr())),
        }
    }
}

static STATE: OnceLock<RwLock<State>> = OnceLock::new();

// Both fields are replaced wholesale, so a poisoned lock still guards a
// valid value.
fn read() -> RwLockReadGuard<'static, State> {
    STATE
        .get_or_init(RwLock::default)
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, State> {
    STATE
        .get_or_init(RwLock::default)
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}

fn snapshot() -> (Option<Arc<dyn Logger>>, Level) {
    let state = read();
    (state.backend.clone(), state.level)
}

/// Set the threshold below which messages are dropped.
pub fn set_level(level: Level) {
    write().level = level;
    tracing::debug!(level = %level, "levelog threshold changed");
}

/// Parse `name` as a [`Level`] and install it as the threshold.
///
/// # Errors
///
/// Returns [`LevelogError::InvalidLevel`](crate::LevelogError::InvalidLevel)
/// when `name` is not a known level; the threshold is left untouched.
pub fn set_level_name(name: &str) -> Result<Level> {
    let level: Level = name.parse()?;
    set_level(level);
    Ok(level)
}

/// Current threshold.
pub fn level() -> Level {
    read().level
}

/// Install `backend`; all later calls route to it.
pub fn set_backend<L>(backend: L)
where
    L: Logger + 'static,
{
    set_shared_backend(Arc::new(backend));
}

/// Install a backend the caller keeps a handle to.
pub fn set_shared_backend(backend: Arc<dyn Logger>) {
    // Drop the previous backend after the lock is released.
    let previous = std::mem::replace(&mut write().backend, Some(backend));
    drop(previous);
    tracing::debug!("levelog backend replaced");
}

/// Remove the backend. Log calls become silent no-ops until one is set again.
pub fn clear_backend() {
    let previous = write().backend.take();
    drop(previous);
    tracing::debug!("levelog backend cleared");
}

/// The installed backend, if any.
pub fn backend() -> Option<Arc<dyn Logger>> {
    read().backend.clone()
}

/// Whether a message at `level` passes the current threshold.
pub fn is_enabled(level: Level) -> bool {
    read().level <= level
}

/// Whether debug messages are currently forwarded.
///
/// Lets callers skip building expensive arguments:
///
/// ```
/// if levelog::is_debug_enabled() {
///     let dump = format!("{:?}", vec![1, 2, 3]);
///     levelog::debugf!("state: {}", dump);
/// }
/// ```
pub fn is_debug_enabled() -> bool {
    is_enabled(Level::Debug)
}

/// Forward `args` at `level` to the backend if one is installed and the
/// threshold allows it.
pub fn log(level: Level, args: Arguments<'_>) {
    let (backend, threshold) = snapshot();
    let Some(backend) = backend else {
        return;
    };
    if level < threshold {
        return;
    }
    match level {
        Level::Debug => backend.debugf(args),
        Level::Info => backend.infof(args),
        Level::Warn => backend.warnf(args),
        Level::Error => backend.errorf(args),
    }
}

/// Log at debug level. See also the [`debugf!`](crate::debugf!) macro.
pub fn debugf(args: Arguments<'_>) {
    log(Level::Debug, args);
}

/// Log at info level. See also the [`infof!`](crate::infof!) macro.
pub fn infof(args: Arguments<'_>) {
    log(Level::Info, args);
}

/// Log at warn level. See also the [`warnf!`](crate::warnf!) macro.
pub fn warnf(args: Arguments<'_>) {
    log(Level::Warn, args);
}

/// Log at error level. See also the [`errorf!`](crate::errorf!) macro.
pub fn errorf(args: Arguments<'_>) {
    log(Level::Error, args);
}
