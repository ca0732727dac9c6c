use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_parses_full_server_record() {
    let user: User =
        serde_json::from_str(r#"{"id": 7, "username": "alice", "email": "alice@example.com"}"#)
            .unwrap();
    assert_eq!(user.id, Some(7));
    assert_eq!(user.username, "alice");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
}

#[test]
fn user_parses_username_only() {
    let user: User = serde_json::from_str(r#"{"username": "bob"}"#).unwrap();
    assert_eq!(user.id, None);
    assert_eq!(user.username, "bob");
    assert_eq!(user.email, None);
}

#[test]
fn user_requires_username() {
    let result = serde_json::from_str::<User>(r#"{"id": 1}"#);
    assert!(result.is_err());
}

// =============================================================
// SessionResult
// =============================================================

#[test]
fn session_result_parses_login_success_body() {
    let body = r#"{"success": true, "message": "Login successful", "user": {"id": 1, "username": "alice", "email": "a@b.com"}}"#;
    let result: SessionResult = serde_json::from_str(body).unwrap();
    assert!(result.success);
    assert_eq!(result.message.as_deref(), Some("Login successful"));
    assert_eq!(result.user.unwrap().username, "alice");
}

#[test]
fn session_result_parses_minimal_body() {
    let result: SessionResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(result.success);
    assert_eq!(result.message, None);
    assert_eq!(result.user, None);
}

#[test]
fn session_result_ignores_unknown_fields() {
    let result: SessionResult =
        serde_json::from_str(r#"{"success": false, "message": "nope", "extra": 42}"#).unwrap();
    assert!(!result.success);
    assert_eq!(result.message.as_deref(), Some("nope"));
}

// =============================================================
// AuthStatus
// =============================================================

#[test]
fn auth_status_parses_authenticated_body() {
    let body = r#"{"authenticated": true, "user": {"username": "bob"}}"#;
    let status: AuthStatus = serde_json::from_str(body).unwrap();
    assert!(status.authenticated);
    assert_eq!(status.user.unwrap().username, "bob");
}

#[test]
fn auth_status_parses_anonymous_body_without_user() {
    let status: AuthStatus = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(!status.authenticated);
    assert_eq!(status.user, None);
}
