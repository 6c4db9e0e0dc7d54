//! Error types for the Last.fm client.

use thiserror::Error;

/// Main error type for all Last.fm operations.
#[derive(Debug, Error)]
pub enum LastfmError {
    /// HTTP request failed before a response could be read.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and no API error envelope.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Last.fm answered with an `{"error": code, "message": ...}` envelope.
    #[error("Last.fm API error {code}: {message}")]
    RemoteApi { code: i64, message: String },

    /// A required field was missing from the response.
    #[error("Missing field `{field}` for {record}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// A field had a shape that could not be coerced into its declared type.
    #[error("Field `{field}` of {record} does not match schema: expected {expected}")]
    SchemaMismatch {
        record: &'static str,
        field: String,
        expected: &'static str,
    },

    /// Response body was not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Missing or invalid configuration (API key, secret, credentials).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LastfmError {
    /// Last.fm error code, if this is a remote API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            LastfmError::RemoteApi { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for Last.fm operations.
pub type Result<T> = std::result::Result<T, LastfmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_api_display() {
        let err = LastfmError::RemoteApi {
            code: 6,
            message: "no artist".to_string(),
        };
        assert_eq!(err.to_string(), "Last.fm API error 6: no artist");
        assert_eq!(err.api_code(), Some(6));
    }

    #[test]
    fn test_missing_field_display() {
        let err = LastfmError::MissingField {
            record: "Tag",
            field: "name",
        };
        assert_eq!(err.to_string(), "Missing field `name` for Tag");
        assert_eq!(err.api_code(), None);
    }
}
