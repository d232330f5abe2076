//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `relay.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 2".to_string());
        assert_eq!(
            err.to_string(),
            "failed to parse configuration: expected '=' at line 2"
        );
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::ValidationError("delays.and must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: delays.and must be at least 1"
        );
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(err.to_string().starts_with("failed to read configuration:"));
    }
}
