use super::*;

#[test]
fn welcome_message_names_the_user() {
    assert_eq!(welcome_message("bob"), "Welcome, bob!");
}

#[test]
fn welcome_message_passes_username_through_unmodified() {
    assert_eq!(welcome_message("Ada Lovelace"), "Welcome, Ada Lovelace!");
}
