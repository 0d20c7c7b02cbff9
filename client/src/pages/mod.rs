//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own data loading and delegates rendering details to
//! `components`. API-backed sections start empty during SSR and fill once the
//! browser fetch resolves (live or fallback).

pub mod admin;
pub mod admin_login;
pub mod events;
pub mod home;
pub mod speakers;
pub mod team;
pub mod wing_detail;
pub mod wings;

use std::future::Future;

use leptos::prelude::*;

/// Signal filled with `fetch()`'s output once the page is mounted in the
/// browser. Stays `None` on the server.
pub(crate) fn load_on_mount<T, Fut>(fetch: fn() -> Fut) -> RwSignal<Option<T>>
where
    T: Send + Sync + 'static,
    Fut: Future<Output = T> + 'static,
{
    let slot = RwSignal::new(None);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        slot.set(Some(fetch().await));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = fetch;
    slot
}

#[component]
pub(crate) fn LoadingPanel(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <p class="loading-panel" aria-live="polite">
            {label}
        </p>
    }
}
