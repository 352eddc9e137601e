//! Declarative facade configuration.

use serde::{Deserialize, Serialize};

use crate::backend::NoOpLogger;
use crate::default_logger::DefaultLogger;
use crate::errors::Result;
use crate::facade;
use crate::level::Level;

/// Which built-in backend a [`LogConfig`] installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// [`DefaultLogger`] on standard error
    #[default]
    Stderr,
    /// [`DefaultLogger`] on standard output
    Stdout,
    /// [`NoOpLogger`]
    Discard,
    /// No backend at all; every call is a no-op
    None,
}

/// Threshold and backend choice, typically read from a config file.
///
/// Missing fields fall back to the process defaults (`info`, `stderr`).
///
/// ```
/// use levelog::{BackendKind, Level, LogConfig};
///
/// let config = LogConfig::from_json(r#"{ "level": "warn" }"#).unwrap();
/// assert_eq!(config.level, Level::Warn);
/// assert_eq!(config.backend, BackendKind::Stderr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: Level,
    pub backend: BackendKind,
}

impl LogConfig {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LevelogError::InvalidConfig`](crate::LevelogError::InvalidConfig)
    /// for malformed JSON, unknown fields, or an unknown level or backend name.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Install this configuration into the global facade.
    pub fn apply(&self) {
        match self.backend {
            BackendKind::Stderr => facade::set_backend(DefaultLogger::stderr()),
            BackendKind::Stdout => facade::set_backend(DefaultLogger::stdout()),
            BackendKind::Discard => facade::set_backend(NoOpLogger),
            BackendKind::None => facade::clear_backend(),
        }
        facade::set_level(self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LevelogError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LogConfig::from_json("{}").unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.backend, BackendKind::Stderr);
    }

    #[test]
    fn test_full_document() {
        let config = LogConfig::from_json(r#"{"level":"DEBUG","backend":"discard"}"#).unwrap();
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.backend, BackendKind::Discard);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = LogConfig::from_json(r#"{"level":"chatty"}"#).unwrap_err();
        assert!(matches!(err, LevelogError::InvalidConfig(_)));
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(LogConfig::from_json(r#"{"sink":"file"}"#).is_err());
    }

    #[test]
    fn test_serialize_round_trip_names() {
        let config = LogConfig {
            level: Level::Error,
            backend: BackendKind::None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"level":"error","backend":"none"}"#);
    }
}
