//! Levelog - a process-wide leveled logging facade
//!
//! Application code logs through free functions (or the matching macros)
//! at one of four levels. The host program decides where messages go by
//! installing a [`Logger`] backend, and how much is emitted by setting a
//! threshold [`Level`]:
//!
//! - Threshold defaults to [`Level::Info`]
//! - Backend defaults to [`DefaultLogger`] on standard error
//! - Calls below the threshold, or with no backend installed, are silent
//!   no-ops; logging never fails the caller
//!
//! # Usage
//!
//! ```rust
//! use levelog::{capture::CaptureLogger, infof, Level};
//!
//! let capture = CaptureLogger::new();
//! levelog::set_backend(capture.clone());
//!
//! levelog::debugf!("x={}", 1); // below the default threshold
//! infof!("x={}", 1);
//!
//! levelog::set_level(Level::Warn);
//! infof!("dropped");
//! levelog::errorf!("boom");
//!
//! assert_eq!(capture.messages_at(Level::Info), vec!["x=1"]);
//! assert_eq!(capture.messages_at(Level::Error), vec!["boom"]);
//! ```

pub mod backend;
pub mod capture;
pub mod config;
pub mod default_logger;
pub mod errors;
pub mod facade;
pub mod level;
mod macros;

pub use backend::{Logger, NoOpLogger};
pub use config::{BackendKind, LogConfig};
pub use default_logger::DefaultLogger;
pub use errors::{LevelogError, ParseLevelError, Result};
pub use facade::{
    backend, clear_backend, debugf, errorf, infof, is_debug_enabled, is_enabled, level, log,
    set_backend, set_level, set_level_name, set_shared_backend, warnf,
};
pub use level::Level;
