//! Library page — the authenticated landing screen at `/`.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Library;
use crate::state::auth::AuthState;
use crate::util::cookie;

/// Name-sort the listing; the server usually does this but the order is
/// part of the page contract, not something to trust the wire for.
fn sort_libraries(mut libraries: Vec<Library>) -> Vec<Library> {
    libraries.sort_by(|a, b| a.name.cmp(&b.name));
    libraries
}

/// Library listing. Redirects to `/login` when no credential exists in
/// either the store or the cookie.
#[component]
pub fn LibraryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.token.is_none() && cookie::read_token().is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let libraries = LocalResource::new(move || {
        let token = auth.with(|state| state.token.clone());
        async move {
            match token {
                Some(token) => crate::net::api::fetch_libraries(&token)
                    .await
                    .map(sort_libraries)
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="library-page">
            <header class="library-page__header">
                <h1>"Libraries"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading libraries..."</p> }>
                {move || {
                    libraries
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="library-page__empty">"No libraries yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="library-page__list">
                                        {list
                                            .into_iter()
                                            .map(|lib| {
                                                view! {
                                                    <li class="library-page__item">
                                                        <span class="library-page__name">{lib.name}</span>
                                                        <span class="library-page__kind">{lib.media_type}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
