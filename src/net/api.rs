//! HTTP operations against the identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! credential cookies. Server-side (SSR): stubs returning a network
//! failure since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The client never swallows errors. HTTP failure statuses become
//! `SessionError::Auth` carrying the body's `message` (or a
//! per-operation fallback); transport failures and malformed bodies
//! become `SessionError::Network`. Requests are single-shot: no retry,
//! no timeout, no cancellation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::SessionError;
use super::types::{AuthStatus, SessionResult};

/// Base path of the identity service, same-origin so the browser's
/// session cookie jar applies.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE_URL: &str = "/api/auth";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(op: &str) -> String {
    format!("{API_BASE_URL}/{op}/")
}

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Login failed";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_FALLBACK: &str = "Signup failed";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_FALLBACK: &str = "Logout failed";
#[cfg(any(test, feature = "hydrate"))]
const CHECK_FALLBACK: &str = "Auth check failed";

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Turn an HTTP outcome into the uniform result contract.
///
/// A success status with a body that does not parse as `T` is a
/// transport-level failure, not a server rejection.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_response<T: serde::de::DeserializeOwned>(
    ok: bool,
    body: &str,
    fallback: &str,
) -> Result<T, SessionError> {
    if ok {
        serde_json::from_str(body).map_err(|e| SessionError::Network(e.to_string()))
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| fallback.to_owned());
        Err(SessionError::Auth(message))
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(
    url: &str,
    payload: Option<&serde_json::Value>,
    fallback: &str,
) -> Result<SessionResult, SessionError> {
    let builder = gloo_net::http::Request::post(url)
        .credentials(web_sys::RequestCredentials::Include);
    let request = match payload {
        Some(payload) => builder
            .json(payload)
            .map_err(|e| SessionError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| SessionError::Network(e.to_string()))?,
    };
    let resp = request
        .send()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;
    let ok = resp.ok();
    let body = resp
        .text()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;
    normalize_response(ok, &body, fallback)
}

/// Authenticate with `POST /api/auth/login/`.
///
/// # Errors
///
/// `SessionError::Auth` when the service rejects the credentials,
/// `SessionError::Network` on transport failure or a malformed body.
pub async fn login(username: &str, password: &str) -> Result<SessionResult, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        post_json(&endpoint("login"), Some(&payload), LOGIN_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(SessionError::Network("not available on server".to_owned()))
    }
}

/// Register a new account with `POST /api/auth/signup/`.
///
/// Password/confirmation equality is checked by the caller before this
/// is reached; the confirmation still travels so the server can apply
/// its own validation.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn signup(
    username: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<SessionResult, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "password_confirm": password_confirm,
        });
        post_json(&endpoint("signup"), Some(&payload), SIGNUP_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password, password_confirm);
        Err(SessionError::Network("not available on server".to_owned()))
    }
}

/// End the current session with `POST /api/auth/logout/` (no body).
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn logout() -> Result<SessionResult, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&endpoint("logout"), None, LOGOUT_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SessionError::Network("not available on server".to_owned()))
    }
}

/// Ask whether the session cookie is still valid via `GET /api/auth/check/`.
///
/// # Errors
///
/// Same contract as [`login`]. The boot path treats any error here as
/// "not authenticated".
pub async fn check_status() -> Result<AuthStatus, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("check"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;
        let ok = resp.ok();
        let body = resp
            .text()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;
        normalize_response(ok, &body, CHECK_FALLBACK)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SessionError::Network("not available on server".to_owned()))
    }
}
