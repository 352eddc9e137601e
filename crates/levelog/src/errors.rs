use thiserror::Error;

/// Result type alias using LevelogError
pub type Result<T> = std::result::Result<T, LevelogError>;

/// Returned when a string does not name a known [`Level`](crate::Level)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level {input:?} (expected debug, info, warn or error)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input, verbatim
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors raised by the configuration surface of the facade.
///
/// Logging calls themselves never fail; only parsing a level name or a
/// configuration document can.
#[derive(Debug, Error)]
pub enum LevelogError {
    #[error("invalid level: {0}")]
    InvalidLevel(#[from] ParseLevelError),

    #[error("invalid log config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_error_display() {
        let err = ParseLevelError::new("loud");
        assert_eq!(err.input(), "loud");
        assert!(err.to_string().contains("\"loud\""));
    }

    #[test]
    fn test_invalid_level_converts() {
        let err: LevelogError = ParseLevelError::new("x").into();
        assert!(matches!(err, LevelogError::InvalidLevel(_)));
    }
}
