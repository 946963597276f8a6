//! Reset the viewport to the top-left origin on every route change.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Invisible component: scrolls to (0,0) whenever the pathname changes.
///
/// Runs unconditionally — including when a gated route renders nothing —
/// so navigating never lands the user mid-page.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        // Subscribe to path changes; the scroll itself is not reactive.
        let _path = location.pathname.get();
        scroll_to_origin();
    });
}

fn scroll_to_origin() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
