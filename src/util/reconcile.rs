//! Reconciliation between the in-memory auth store and the persisted
//! session cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two sources of truth can disagree: the `token` cookie (survives the
//! tab, shared across tabs) and the auth store (this tab only). One
//! reconciliation pass runs per change batch of `{token, logged_in,
//! error}` and resolves the divergence deterministically:
//!
//! - a cookie is always adopted into the store first, so a returning
//!   visitor is authenticated without a network round trip;
//! - a fresh login (store token, no cookie, no error) is persisted with
//!   a 7-day expiry and the user is pushed to `/`;
//! - when both agree (token in store and cookie) we only navigate —
//!   rewriting the cookie here would silently extend the session on
//!   every pass, turning the fixed expiry into a sliding one.
//!
//! Adoption ordering is load-bearing: adopting the cookie makes the
//! store token non-null, but the persist arm requires the cookie to be
//! *absent*, so the same pass can never adopt and re-persist. Passes
//! are idempotent; re-running with unchanged inputs produces no new
//! writes or navigations beyond what the router already de-duplicates.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, update_auth_token};
use crate::util::cookie;

/// Snapshot of both truth sources for one reconciliation pass.
#[derive(Clone, Copy, Debug)]
pub struct ReconcileInputs<'a> {
    pub cookie_token: Option<&'a str>,
    pub store_token: Option<&'a str>,
    pub logged_in: bool,
    pub error: Option<&'a str>,
}

/// Actions a reconciliation pass decided on. Decision only — the caller
/// performs the store dispatch, cookie write, and navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Token to dispatch into the store (cookie adoption).
    pub adopt: Option<String>,
    /// Token to persist as a fresh 7-day cookie.
    pub persist: Option<String>,
    /// Whether to push-navigate to `/`.
    pub navigate_home: bool,
}

/// Evaluate one reconciliation pass.
pub fn reconcile(inputs: ReconcileInputs<'_>) -> ReconcilePlan {
    let mut plan = ReconcilePlan::default();

    // A persisted credential always syncs into the store, even when the
    // store already holds a token (the cookie is the durable source).
    if let Some(token) = inputs.cookie_token {
        plan.adopt = Some(token.to_owned());
    }

    match (inputs.store_token, inputs.cookie_token) {
        // Fresh login in this tab: persist once, then go home. A login
        // error means the token cannot be trusted enough to persist.
        (Some(token), None) if inputs.logged_in && inputs.error.is_none() => {
            plan.persist = Some(token.to_owned());
            plan.navigate_home = true;
        }
        // Already persisted: steady state, navigate without rewriting.
        (Some(_), Some(_)) => plan.navigate_home = true,
        // Unauthenticated (or mid-adoption): nothing to do.
        _ => {}
    }

    plan
}

/// Install the reconciler as a reactive effect over the auth store.
///
/// `navigate` is injected so pages/tests control the routing primitive;
/// the reconciler only ever requests an in-app push to `/`. The cookie
/// is re-read on every pass rather than cached — another tab may have
/// written it since the last run.
pub fn install_auth_reconciler<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        let cookie_token = cookie::read_token();
        let plan = reconcile(ReconcileInputs {
            cookie_token: cookie_token.as_deref(),
            store_token: state.token.as_deref(),
            logged_in: state.login.logged_in,
            error: state.login.error.as_deref(),
        });

        if let Some(token) = plan.adopt {
            update_auth_token(auth, &token);
        }
        if let Some(token) = plan.persist {
            cookie::write_token(&token);
        }
        if plan.navigate_home {
            navigate("/", NavigateOptions::default());
        }
    });
}
