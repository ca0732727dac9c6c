//! Root application component and SSR shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session state signal and resolves the boot `Loading` phase
//! with one status check. Everything below renders off that single
//! value: loading notice, anonymous form container, or dashboard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::form_switch::FormSwitch;
use crate::pages::{dashboard::DashboardPage, login::LoginForm, signup::SignupForm};
use crate::state::auth::{ActiveForm, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session signal and kicks off the initial status
/// check. A transport failure during that check is logged and fails
/// open into the login form.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::auth::SessionAction;

        let action = match crate::net::api::check_status().await {
            Ok(status) => SessionAction::StatusResolved {
                authenticated: status.authenticated,
                user: status.user,
            },
            Err(e) => {
                leptos::logging::warn!("auth status check failed: {e}");
                SessionAction::StatusCheckFailed
            }
        };
        session.update(|s| *s = s.apply(action));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-ui.css"/>
        <Title text="Authentication System"/>

        <main class="app">
            {move || match session.get() {
                SessionState::Loading => {
                    view! {
                        <div class="loading">
                            <h2>"Loading..."</h2>
                        </div>
                    }
                        .into_any()
                }
                SessionState::Authenticated { user } => {
                    view! { <DashboardPage user=user/> }.into_any()
                }
                SessionState::Anonymous { active_form } => {
                    view! { <AnonymousView active_form=active_form/> }.into_any()
                }
            }}
        </main>
    }
}

/// Container for the anonymous phase: heading, form tabs, and whichever
/// form is active.
#[component]
fn AnonymousView(active_form: ActiveForm) -> impl IntoView {
    view! {
        <div class="auth-container">
            <h1>"Authentication System"</h1>
            <FormSwitch active=active_form/>
            {match active_form {
                ActiveForm::Login => view! { <LoginForm/> }.into_any(),
                ActiveForm::Signup => view! { <SignupForm/> }.into_any(),
            }}
        </div>
    }
}
