//! Tab strip toggling between the login and signup forms.

use leptos::prelude::*;

use crate::state::auth::{ActiveForm, SessionAction, SessionState};

/// Two-tab selector for the anonymous phase. Switching is a pure local
/// state change; no network call is involved.
#[component]
pub fn FormSwitch(active: ActiveForm) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let switch = move |form: ActiveForm| {
        session.update(|s| *s = s.apply(SessionAction::FormSwitched(form)));
    };

    view! {
        <div class="form-switch">
            <button
                class:active=move || active == ActiveForm::Login
                on:click=move |_| switch(ActiveForm::Login)
            >
                "Login"
            </button>
            <button
                class:active=move || active == ActiveForm::Signup
                on:click=move |_| switch(ActiveForm::Signup)
            >
                "Sign Up"
            </button>
        </div>
    }
}
