//! Error types for the Reporta application.

use thiserror::Error;

/// A shared error type for the entire Reporta application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum ReportaError {
    /// A required field is missing or empty; raised before any network call
    #[error("Missing or invalid field: {field}")]
    Validation { field: String },

    /// Non-success HTTP response or transport failure
    #[error("Request failed ({context}): {message}")]
    Request {
        context: &'static str,
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Parse error: {format} - {message}")]
    Parse {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Security/authentication error
    #[error("Security error: {0}")]
    Security(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReportaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error for a named field
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Creates a Request error with the operation context
    pub fn request(context: &'static str, message: impl Into<String>) -> Self {
        Self::Request {
            context,
            message: message.into(),
        }
    }

    /// Creates a Parse error
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Security error
    pub fn security(message: impl Into<String>) -> Self {
        Self::Security(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a Request error
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    /// Check if this is a Parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a Config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a Security error
    pub fn is_security(&self) -> bool {
        matches!(self, Self::Security(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ReportaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ReportaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReportaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ReportaError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request {
            context: "transport",
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ReportaError>`.
pub type Result<T> = std::result::Result<T, ReportaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_helper() {
        let err = ReportaError::validation("title");
        assert!(err.is_validation());
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_request_helper_keeps_context() {
        let err = ReportaError::request("get-reports", "status 500");
        assert!(err.is_request());
        assert!(err.to_string().contains("get-reports"));
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ReportaError = parse_err.into();
        assert!(err.is_parse());
    }
}
