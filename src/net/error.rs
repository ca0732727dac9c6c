//! Normalized failure signal for session client operations.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Error returned by every session client operation.
///
/// `Auth` is a rejection the identity service reported itself (bad
/// credentials, validation failure, duplicate account); `Network` is a
/// transport failure or malformed response body caught at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    Auth(String),
    Network(String),
}

impl SessionError {
    /// Text shown in the UI: auth rejections verbatim, transport
    /// failures as a generic retry prompt.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Auth(message) => message,
            Self::Network(_) => "Network error. Please try again.",
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth(message) => write!(f, "auth rejected: {message}"),
            Self::Network(detail) => write!(f, "network error: {detail}"),
        }
    }
}

impl std::error::Error for SessionError {}
