//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reconciler effect, the guest route gate, and the login/register
//! pages all read this state; only the action functions below write it.
//! `update_auth_token` is the single entry point for placing a token in
//! the store, whether it came from a successful login response or from
//! a persisted cookie discovered by the reconciler.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

/// Outcome of the most recent login attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub logged_in: bool,
    pub error: Option<String>,
}

/// Authentication state: the session token plus login outcome flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub login: LoginState,
}

impl AuthState {
    /// Whether the store already reflects `token` as an accepted session.
    ///
    /// Used to make token adoption idempotent: re-applying the same token
    /// must not dirty the signal, or the reconciler effect would re-run
    /// forever on its own write.
    pub fn has_adopted(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token) && self.login.logged_in && self.login.error.is_none()
    }

    /// Accept `token` as the active session, clearing any login error.
    pub fn adopt_token(&mut self, token: &str) {
        self.token = Some(token.to_owned());
        self.login.logged_in = true;
        self.login.error = None;
    }

    /// Record a failed login attempt without touching persisted state.
    pub fn reject_login(&mut self, message: String) {
        self.token = None;
        self.login.logged_in = false;
        self.login.error = Some(message);
    }
}

/// Place `token` into the auth store, marking the session as logged in.
///
/// No-op when the store already holds this token, so callers (the
/// reconciler in particular) may invoke it on every pass.
pub fn update_auth_token(auth: RwSignal<AuthState>, token: &str) {
    if auth.with_untracked(|state| state.has_adopted(token)) {
        return;
    }
    auth.update(|state| state.adopt_token(token));
}

/// Record a failed login attempt in the store.
pub fn login_failed(auth: RwSignal<AuthState>, message: String) {
    auth.update(|state| state.reject_login(message));
}
