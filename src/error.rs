use thiserror::Error;

/// Unified error type for py-publish operations
#[derive(Error, Debug)]
pub enum PyPublishError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in py-publish
pub type Result<T> = std::result::Result<T, PyPublishError>;

impl PyPublishError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PyPublishError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        PyPublishError::Version(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PyPublishError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PyPublishError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(PyPublishError::version("test")
            .to_string()
            .contains("Version"));
        assert!(PyPublishError::config("test")
            .to_string()
            .contains("Configuration"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (PyPublishError::config("x"), "Configuration error"),
            (PyPublishError::version("x"), "Version parsing error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![PyPublishError::config(""), PyPublishError::version("")];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with 'quotes'",
            "message with \\ backslash",
        ];

        for msg in special_chars {
            let err = PyPublishError::version(msg);
            let err_msg = err.to_string();
            assert!(err_msg.contains("Version"));
        }
    }
}
