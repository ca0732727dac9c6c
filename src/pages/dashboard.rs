//! Authenticated landing page with the logout action.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::{SessionAction, SessionState};

fn welcome_message(username: &str) -> String {
    format!("Welcome, {username}!")
}

/// Landing view for an authenticated session.
///
/// Logout clears local session state whether or not the server
/// acknowledged; a server-side failure is only logged.
#[component]
pub fn DashboardPage(user: User) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let welcome = welcome_message(&user.username);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                leptos::logging::warn!("logout failed: {e}");
            }
            session.update(|s| *s = s.apply(SessionAction::LoggedOut));
        });
        #[cfg(not(feature = "hydrate"))]
        session.update(|s| *s = s.apply(SessionAction::LoggedOut));
    };

    view! {
        <div class="dashboard">
            <h1>{welcome}</h1>
            <p>"You are successfully logged in."</p>
            <button class="logout-btn" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
