//! Guest-only route gate for the login/register screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! An authenticated user must never see the credential forms. The gate
//! renders its children only while *neither* the persisted cookie nor
//! the in-memory store holds a token; in every other case it renders
//! nothing and relies on the reconciler, which has already issued the
//! redirect in the same update cycle.

#[cfg(test)]
#[path = "guest_gate_test.rs"]
mod guest_gate_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::cookie;

/// Render predicate: guest pages show only when both tokens are absent.
pub fn should_render_guest(cookie_token: Option<&str>, store_token: Option<&str>) -> bool {
    cookie_token.is_none() && store_token.is_none()
}

/// Conditional wrapper around unauthenticated-only routes.
///
/// The predicate is re-evaluated on every auth-state change — never
/// cached — and the cookie is re-read each time since another tab may
/// have written it.
#[component]
pub fn GuestGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let state = auth.get();
        let cookie_token = cookie::read_token();
        should_render_guest(cookie_token.as_deref(), state.token.as_deref()).then(|| children())
    }
}
