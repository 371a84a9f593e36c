//! API Errors
//!
//! One error type for every backend call. `Display` is the message shown to users.

use thiserror::Error;

/// Failure of a backend request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    /// `message` is its `detail` string or the operation's fallback text.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No response arrived (connection refused, CORS, offline).
    #[error("network error: {0}")]
    Network(String),

    /// A success response whose body was not the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_displays_detail_verbatim() {
        let err = ApiError::server(404, "Goal not found");
        assert_eq!(err.to_string(), "Goal not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
        assert_eq!(err.status(), None);
        assert_eq!(ApiError::Decode("eof".into()).status(), None);
    }
}
