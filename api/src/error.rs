//! Error taxonomy for backend calls.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBase(String),
}

impl ApiError {
    /// Text suitable for a user-facing notification. Application-level
    /// rejections carry the server's own message; everything else falls back
    /// to the error description.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_passed_through() {
        let err = ApiError::Rejected("maintenance window".into());
        assert_eq!(err.user_message(), "maintenance window");
    }

    #[test]
    fn blank_rejection_uses_description() {
        let err = ApiError::Rejected("  ".into());
        assert_eq!(err.user_message(), "Request rejected:   ");
    }

    #[test]
    fn status_errors_describe_the_code() {
        assert_eq!(ApiError::Status(502).user_message(), "Unexpected HTTP status 502");
    }
}
