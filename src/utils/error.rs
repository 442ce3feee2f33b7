use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DuckError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DuckError::IoError(e) => format!("Could not write duck output: {}", e),
            DuckError::SerializationError(e) => format!("Could not render summary: {}", e),
            DuckError::ConfigError { message } => format!("Configuration problem: {}", message),
            DuckError::ConfigParseError { message, .. } => {
                format!("Scenario file could not be parsed: {}", message)
            }
            DuckError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DuckError::IoError(_) => "Check that stdout is writable (e.g. not a closed pipe)",
            DuckError::SerializationError(_) => "Retry without --json",
            DuckError::ConfigError { .. } | DuckError::ConfigParseError { .. } => {
                "Make sure the file exists and is valid TOML with a [duck] table"
            }
            DuckError::InvalidConfigValueError { field, .. } if field == "duck.steps" => {
                "Add at least one step to the [duck] steps list, within the allowed maximum"
            }
            DuckError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted duck and behavior names"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DuckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: DuckError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, DuckError::IoError(_)));
        assert!(err.user_friendly_message().contains("closed"));
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = DuckError::InvalidConfigValueError {
            field: "duck.kind".to_string(),
            value: "goose".to_string(),
            reason: "unknown duck".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'goose' for duck.kind: unknown duck"
        );
        assert!(err.user_friendly_message().contains("goose"));
        assert!(err.recovery_suggestion().contains("--help"));
    }

    #[test]
    fn test_steps_error_suggests_editing_steps() {
        let err =
            crate::utils::validation::validate_non_empty::<u8>("duck.steps", &[]).unwrap_err();
        assert!(err.recovery_suggestion().contains("[duck] steps"));
        assert!(!err.recovery_suggestion().contains("--help"));
    }
}
