//! Result and error types for Auditar.

use thiserror::Error;

/// Result type for Auditar operations
pub type AuditarResult<T> = Result<T, AuditarError>;

/// Errors that can occur in Auditar
#[derive(Debug, Error)]
pub enum AuditarError {
    /// Malformed input to the aggregator (e.g., empty category name)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Run was finalized twice or read before any category ran
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Error message
        message: String,
    },

    /// Report rendering failed
    #[error("Report rendering failed: {message}")]
    ReportError {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = AuditarError::InvalidArgument {
            message: "category name must be non-empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument: category name must be non-empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AuditarError = io.into();
        assert!(matches!(err, AuditarError::Io(_)));
    }
}
