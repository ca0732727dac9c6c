use super::*;
use crate::net::types::User;

fn result(success: bool, message: Option<&str>, user: Option<User>) -> SessionResult {
    SessionResult {
        success,
        message: message.map(str::to_owned),
        user,
    }
}

fn alice() -> User {
    User {
        id: Some(1),
        username: "alice".to_owned(),
        email: None,
    }
}

#[test]
fn success_body_with_user_dispatches_login() {
    let action = login_outcome(result(true, Some("Login successful"), Some(alice()))).unwrap();
    assert_eq!(
        action,
        SessionAction::LoginSucceeded { user: alice() }
    );
}

#[test]
fn success_body_without_user_is_an_error() {
    let outcome = login_outcome(result(true, None, None));
    assert_eq!(outcome, Err("Login failed".to_owned()));
}

#[test]
fn rejection_body_surfaces_server_message() {
    let outcome = login_outcome(result(false, Some("Invalid username or password"), None));
    assert_eq!(outcome, Err("Invalid username or password".to_owned()));
}

#[test]
fn rejection_body_without_message_uses_fallback() {
    let outcome = login_outcome(result(false, None, None));
    assert_eq!(outcome, Err("Login failed".to_owned()));
}
