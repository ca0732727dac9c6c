//! Wire DTOs for the identity service responses.
//!
//! DESIGN
//! ======
//! These shapes mirror the server's JSON bodies so serde can parse them
//! directly. Fields the server owns beyond `username` are optional and
//! default-deserialized; unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-supplied user record. Opaque beyond `username`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-side numeric identifier, when the server sends one.
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Uniform body returned by login, signup, and logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Body returned by the status check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}
