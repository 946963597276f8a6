//! Cross-tab login announcements over a `BroadcastChannel`.
//!
//! SYSTEM CONTEXT
//! ==============
//! When one tab completes a login it posts `"login"` on the `"dim"`
//! channel. Sibling tabs hard-reload to `/` so they re-read the freshly
//! written cookie from scratch; the tab that has focus is the one that
//! just logged in and is already navigating itself, so it ignores the
//! message. Delivery is fire-and-forget with no ordering guarantee —
//! every decision here must be safe to apply zero or multiple times.
//!
//! ERROR HANDLING
//! ==============
//! Channel construction failing (unsupported environment) degrades to a
//! logged no-op: cross-tab auto-login is lost, manual login still works.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

/// Channel shared by every instance of the app in this browser profile.
pub const CHANNEL_NAME: &str = "dim";

/// The only recognized payload.
pub const LOGIN_MESSAGE: &str = "login";

/// Decide whether a received payload warrants a full-page reload.
///
/// Only the literal `"login"` string counts, and only in an unfocused
/// tab. Non-string payloads arrive here as `None` and are ignored
/// rather than treated as an error.
pub fn should_force_reload(payload: Option<&str>, has_focus: bool) -> bool {
    payload == Some(LOGIN_MESSAGE) && !has_focus
}

/// Subscribe to login announcements for the lifetime of the current
/// reactive owner. The channel is closed on cleanup, including unmount
/// while a message is in flight.
pub fn install_login_listener() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::on_cleanup;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Ok(channel) = web_sys::BroadcastChannel::new(CHANNEL_NAME) else {
            log::warn!("broadcast channel unavailable; cross-tab login disabled");
            return;
        };

        let onmessage = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
            move |event: web_sys::MessageEvent| {
                let payload = event.data().as_string();
                if should_force_reload(payload.as_deref(), document_has_focus()) {
                    force_reload_home();
                }
            },
        );
        channel.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        // The closure lives inside the cleanup handler so it outlives
        // every message delivered before unmount.
        on_cleanup(move || {
            channel.set_onmessage(None);
            channel.close();
            drop(onmessage);
        });
    }
}

/// Announce a completed login to sibling tabs. Best-effort.
pub fn announce_login() {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::BroadcastChannel::new(CHANNEL_NAME) {
            Ok(channel) => {
                let _ = channel.post_message(&wasm_bindgen::JsValue::from_str(LOGIN_MESSAGE));
                channel.close();
            }
            Err(_) => log::warn!("broadcast channel unavailable; login not announced"),
        }
    }
}

/// Whether this tab currently has document focus.
#[cfg(feature = "hydrate")]
fn document_has_focus() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.has_focus().ok())
        .unwrap_or(false)
}

/// Full-page replacement navigation to `/`.
///
/// Not an in-app push: a backgrounded tab's reactive graph may be
/// parked, and a hard reload re-reads the new cookie on boot.
#[cfg(feature = "hydrate")]
fn force_reload_home() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace("/");
    }
}
