use super::*;

#[test]
fn auth_user_message_is_server_text_verbatim() {
    let err = SessionError::Auth("Invalid username or password".to_owned());
    assert_eq!(err.user_message(), "Invalid username or password");
}

#[test]
fn network_user_message_is_generic() {
    let err = SessionError::Network("connection refused".to_owned());
    assert_eq!(err.user_message(), "Network error. Please try again.");
}

#[test]
fn display_distinguishes_kinds() {
    assert_eq!(
        SessionError::Auth("nope".to_owned()).to_string(),
        "auth rejected: nope"
    );
    assert_eq!(
        SessionError::Network("timeout".to_owned()).to_string(),
        "network error: timeout"
    );
}
