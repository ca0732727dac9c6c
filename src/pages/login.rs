//! Login form page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::SessionState;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::SessionResult;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::auth::SessionAction;

/// Map a login response body to the action to dispatch, or the error
/// message to show. An HTTP-success body can still carry
/// `success: false`, and a success body without a user record cannot
/// enter the authenticated phase.
#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(result: SessionResult) -> Result<SessionAction, String> {
    match (result.success, result.user) {
        (true, Some(user)) => Ok(SessionAction::LoginSucceeded { user }),
        (true, None) => Err("Login failed".to_owned()),
        (false, _) => Err(result.message.unwrap_or_else(|| "Login failed".to_owned())),
    }
}

/// Username/password form. Submission is re-entrancy-guarded by
/// disabling the controls while a request is in flight.
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let username_value = username.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(result) => match login_outcome(result) {
                    Ok(action) => session.update(|s| *s = s.apply(action)),
                    Err(message) => error.set(message),
                },
                Err(e) => error.set(e.user_message().to_owned()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="form-container">
            <h2>"Login"</h2>

            <Show when=move || !error.get().is_empty()>
                <div class="error-message">{move || error.get()}</div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="username">"Username:"</label>
                    <input
                        type="text"
                        id="username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password:"</label>
                    <input
                        type="password"
                        id="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </div>

                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
