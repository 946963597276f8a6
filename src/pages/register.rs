//! Registration page: create an account, then sign straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::state::auth::AuthState;

/// Trim inputs and fold an empty invite field into `None`.
fn validate_register_input(
    username: &str,
    password: &str,
    invite: &str,
) -> Result<Credentials, &'static str> {
    let username = username.trim();
    let password = password.trim();
    let invite = invite.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
        invite_token: (!invite.is_empty()).then(|| invite.to_owned()),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let invite = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials =
            match validate_register_input(&username.get(), &password.get(), &invite.get()) {
                Ok(credentials) => credentials,
                Err(message) => {
                    crate::state::auth::login_failed(auth, message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Register, then reuse the login flow so the session follows
            // the exact same store/cookie/broadcast path.
            let outcome = match crate::net::api::register(&credentials).await {
                Ok(()) => crate::net::api::login(&credentials).await,
                Err(message) => Err(message),
            };
            match outcome {
                Ok(token) => {
                    crate::state::auth::update_auth_token(auth, &token);
                    crate::util::broadcast::announce_login();
                }
                Err(message) => crate::state::auth::login_failed(auth, message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Invite token (optional)"
                        prop:value=move || invite.get()
                        on:input=move |ev| invite.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || auth.get().login.error.is_some()>
                    <p class="auth-message auth-message--error">
                        {move || auth.get().login.error.clone().unwrap_or_default()}
                    </p>
                </Show>
                <a class="auth-link" href="/login">"Back to sign in"</a>
            </div>
        </div>
    }
}
