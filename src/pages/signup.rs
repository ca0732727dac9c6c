//! Signup form page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::state::auth::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::auth::{ActiveForm, SessionAction};

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::SessionResult;

#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully! Please login.";

/// Seconds the success banner stays up before the login form returns.
#[cfg(feature = "hydrate")]
const FORM_SWITCH_DELAY_SECS: u64 = 2;

/// Local precondition checked before any network call.
fn signup_validation_error(password: &str, password_confirm: &str) -> Option<&'static str> {
    (password != password_confirm).then_some("Passwords do not match")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_failure_message(result: &SessionResult) -> String {
    result
        .message
        .clone()
        .unwrap_or_else(|| "Signup failed".to_owned())
}

/// Registration form. Signup does not log the user in: success shows a
/// banner, clears the fields, and returns to the login form after a
/// fixed delay.
#[component]
pub fn SignupForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        if let Some(message) = signup_validation_error(&password.get(), &password_confirm.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();
        let confirm_value = password_confirm.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(
                &username_value,
                &email_value,
                &password_value,
                &confirm_value,
            )
            .await
            {
                Ok(result) if result.success => {
                    success.set(SIGNUP_SUCCESS_MESSAGE.to_owned());
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    password_confirm.set(String::new());
                    busy.set(false);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(
                        FORM_SWITCH_DELAY_SECS,
                    ))
                    .await;
                    session
                        .update(|s| *s = s.apply(SessionAction::FormSwitched(ActiveForm::Login)));
                }
                Ok(result) => {
                    error.set(signup_failure_message(&result));
                    busy.set(false);
                }
                Err(e) => {
                    error.set(e.user_message().to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, username_value, email_value, password_value, confirm_value);
            busy.set(false);
        }
    };

    view! {
        <div class="form-container">
            <h2>"Sign Up"</h2>

            <Show when=move || !error.get().is_empty()>
                <div class="error-message">{move || error.get()}</div>
            </Show>
            <Show when=move || !success.get().is_empty()>
                <div class="success-message">{move || success.get()}</div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="signup-username">"Username:"</label>
                    <input
                        type="text"
                        id="signup-username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </div>

                <div class="form-group">
                    <label for="signup-email">"Email:"</label>
                    <input
                        type="email"
                        id="signup-email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </div>

                <div class="form-group">
                    <label for="signup-password">"Password:"</label>
                    <input
                        type="password"
                        id="signup-password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </div>

                <div class="form-group">
                    <label for="signup-password-confirm">"Confirm Password:"</label>
                    <input
                        type="password"
                        id="signup-password-confirm"
                        required=true
                        prop:value=move || password_confirm.get()
                        on:input=move |ev| password_confirm.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </div>

                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                </button>
            </form>
        </div>
    }
}
