//! Session state machine for the authentication flow.
//!
//! DESIGN
//! ======
//! One value, transitioned only by [`SessionState::apply`]. The variant
//! layout makes "a user record exists iff authenticated" hold by
//! construction, and the active-form selector is only representable
//! while anonymous.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Which anonymous form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveForm {
    #[default]
    Login,
    Signup,
}

/// Presentation phase for the whole application.
///
/// Starts in `Loading`; the initial status check resolves it into one of
/// the other two phases.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Boot state while the initial status check is in flight.
    #[default]
    Loading,
    /// No session; one of the two forms is active.
    Anonymous { active_form: ActiveForm },
    /// Live session with the server-supplied user record.
    Authenticated { user: User },
}

/// Events that transition the session state.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    /// The initial status check came back.
    StatusResolved {
        authenticated: bool,
        user: Option<User>,
    },
    /// The initial status check failed in transit; fail open to login.
    StatusCheckFailed,
    /// The login call succeeded with a user record.
    LoginSucceeded { user: User },
    /// The logout call completed. Local state clears whether or not the
    /// server acknowledged.
    LoggedOut,
    /// Tab switch between the anonymous forms; signup completion also
    /// lands here to return to login.
    FormSwitched(ActiveForm),
}

impl SessionState {
    fn anonymous_login() -> Self {
        Self::Anonymous {
            active_form: ActiveForm::Login,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The cached user record, present exactly while authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    /// The active form selector, meaningful only while anonymous.
    pub fn active_form(&self) -> Option<ActiveForm> {
        match self {
            Self::Anonymous { active_form } => Some(*active_form),
            _ => None,
        }
    }

    /// Compute the next state for an action.
    ///
    /// A status check that claims `authenticated` without a user record
    /// is treated as anonymous rather than entering a half-authenticated
    /// state. Form switches outside the anonymous phase are no-ops.
    pub fn apply(&self, action: SessionAction) -> Self {
        match action {
            SessionAction::StatusResolved {
                authenticated: true,
                user: Some(user),
            } => Self::Authenticated { user },
            SessionAction::StatusResolved { .. }
            | SessionAction::StatusCheckFailed
            | SessionAction::LoggedOut => Self::anonymous_login(),
            SessionAction::LoginSucceeded { user } => Self::Authenticated { user },
            SessionAction::FormSwitched(form) => match self {
                Self::Anonymous { .. } => Self::Anonymous { active_form: form },
                other => other.clone(),
            },
        }
    }
}
