use super::*;

// =============================================================
// Local validation
// =============================================================

#[test]
fn matching_passwords_pass_validation() {
    assert_eq!(signup_validation_error("hunter2", "hunter2"), None);
}

#[test]
fn mismatched_passwords_fail_before_any_network_call() {
    assert_eq!(
        signup_validation_error("hunter2", "hunter3"),
        Some("Passwords do not match")
    );
}

#[test]
fn empty_confirmation_counts_as_mismatch() {
    assert_eq!(
        signup_validation_error("hunter2", ""),
        Some("Passwords do not match")
    );
}

// =============================================================
// Server outcome messages
// =============================================================

#[test]
fn success_banner_text() {
    assert_eq!(
        SIGNUP_SUCCESS_MESSAGE,
        "Account created successfully! Please login."
    );
}

#[test]
fn failure_message_prefers_server_text() {
    let result = SessionResult {
        success: false,
        message: Some("Username already exists".to_owned()),
        user: None,
    };
    assert_eq!(signup_failure_message(&result), "Username already exists");
}

#[test]
fn failure_message_falls_back_when_server_is_silent() {
    let result = SessionResult {
        success: false,
        message: None,
        user: None,
    };
    assert_eq!(signup_failure_message(&result), "Signup failed");
}
