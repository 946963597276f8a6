//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::guest_gate::GuestGate;
use crate::components::scroll_to_top::ScrollToTop;
use crate::pages::{library::LibraryPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::util::{broadcast, reconcile};

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
/// Provides the auth context and sets up client-side routing. The auth
/// orchestrator and scroll reset live inside the router so they can use
/// its navigation and location hooks.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/dim-web.css"/>
        <Title text="Dim"/>

        <Router>
            <AuthOrchestrator/>
            <ScrollToTop/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestGate><LoginPage/></GuestGate> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestGate><RegisterPage/></GuestGate> }
                />
                <Route path=StaticSegment("") view=LibraryPage/>
            </Routes>
        </Router>
    }
}

/// Invisible component wiring the auth core into the running app: the
/// store/cookie reconciler plus the cross-tab login listener.
#[component]
fn AuthOrchestrator() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    reconcile::install_auth_reconciler(auth, navigate);
    broadcast::install_login_listener();
}
