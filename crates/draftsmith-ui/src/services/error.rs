//! Client-side API error taxonomy.
//!
//! # Design
//! - One error type at the client boundary; components only ever see
//!   `user_message` strings in toasts.
//! - Session expiry is distinguished so it never surfaces as a generic
//!   failure.

use thiserror::Error;

/// Failure surfaced by either backend implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (offline, DNS, refused connection).
    #[error("network failure: {0}")]
    Network(String),
    /// The backend answered with a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The session token was missing, expired, or rejected.
    #[error("session expired")]
    SessionExpired,
    /// The response body could not be decoded against the contract types.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The backend reported a domain failure in an envelope.
    #[error("backend error: {0}")]
    Backend(String),
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
}

impl ApiError {
    /// Message shown to the user in a toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            Self::Status(code) => format!("The server answered with an error ({code})."),
            Self::SessionExpired => "Session expired, please log in again.".to_string(),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
            Self::Backend(message) => message.clone(),
            Self::NotFound => "That record no longer exists.".to_string(),
        }
    }

    /// Map an HTTP status code to the matching error.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            401 | 403 => Self::SessionExpired,
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_session_expiry() {
        assert_eq!(ApiError::from_status(401), ApiError::SessionExpired);
        assert_eq!(ApiError::from_status(403), ApiError::SessionExpired);
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    }

    #[test]
    fn session_expiry_gets_a_distinct_message() {
        assert_eq!(
            ApiError::SessionExpired.user_message(),
            "Session expired, please log in again."
        );
        assert!(ApiError::Status(502).user_message().contains("502"));
        assert_eq!(
            ApiError::Backend("quota exhausted".to_string()).user_message(),
            "quota exhausted"
        );
    }
}
