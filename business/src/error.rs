use thiserror::Error;

/// Failure of a call against the users API.
///
/// The controller treats every variant the same way: the operation fails,
/// local state is left untouched, and the error goes back to the caller.
/// The variants only exist so callers can print something useful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, refused connection, reset...).
    #[error("request failed: {0}")]
    Connection(String),

    /// The backend answered with a non-2xx status.
    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The backend answered 2xx but the body was not what we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// HTTP status, when the failure came from one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for users API calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),

    #[error("per-page size must be at least 1, got {0}")]
    InvalidPerPage(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_status_and_url() {
        let err = TransportError::status(404, "http://localhost/api/admin/users/7");
        assert_eq!(
            err.to_string(),
            "API returned status 404 for http://localhost/api/admin/users/7"
        );
        assert_eq!(err.http_status(), Some(404));
    }

    #[test]
    fn test_connection_error_has_no_status() {
        let err = TransportError::connection("connection refused");
        assert_eq!(err.http_status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
