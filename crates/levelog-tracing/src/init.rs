//! Logging initialization module
//!
//! Provides a single initialization point that wires the facade to `tracing`.

use std::error::Error;
use std::sync::Once;

use levelog::Level;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::adapter::TracingLogger;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests attach their own layers
    Test,
}

impl Profile {
    /// Facade threshold installed alongside the subscriber.
    pub fn facade_level(&self) -> Level {
        match self {
            Profile::Development => Level::Debug,
            Profile::Production | Profile::Test => Level::Info,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Installs a global `tracing` subscriber for the selected profile, then
/// makes [`TracingLogger`] the facade backend and sets the facade threshold
/// to [`Profile::facade_level`]. Only the first call has any effect.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `RUST_LOG` or `debug`
/// - **Production**: JSON structured logs, `RUST_LOG` or `info`
/// - **Test**: Plain registry without output
///
/// If another global subscriber is already installed it is kept; the facade
/// is still routed to `tracing`.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed: Result<(), Box<dyn Error + Send + Sync>> = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init().map_err(Into::into),
        };
        if let Err(err) = installed {
            tracing::debug!(error = %err, "global subscriber already set, keeping it");
        }

        levelog::set_backend(TracingLogger);
        levelog::set_level(profile.facade_level());
    });
}
