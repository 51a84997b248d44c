//! Error taxonomy for calls against the posts resource

use thiserror::Error;

/// Failure of a single request made by the posts client.
///
/// Cloneable so it can travel inside `NetworkResponse` messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport or connectivity failure, including timeouts
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed into the expected shape
    #[error("invalid response: {0}")]
    Decode(String),

    /// Server rejected the submitted payload
    #[error("rejected by server ({status}): {message}")]
    Validation { status: u16, message: String },

    /// Non-success status on a read
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Network("request timed out".to_string())
        } else if e.is_connect() {
            ApiError::Network(format!("connection failed: {}", e))
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(format!("request failed: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ApiError::Validation {
            status: 422,
            message: "title is required".to_string(),
        };
        assert_eq!(err.to_string(), "rejected by server (422): title is required");
        assert_eq!(ApiError::UnexpectedStatus(503).to_string(), "unexpected status 503");
    }
}
