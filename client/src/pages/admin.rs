//! Admin registrations page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated on a token being present in localStorage. Nothing is verified here;
//! the table is bundled mock data, so the gate only keeps casual visitors out.
//! Signing out empties the session and the gate performs the redirect.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::registrations_table::RegistrationsTable;
use crate::content::registrations::registrations;
use crate::state::auth::AdminSession;
use crate::util::auth::{install_admin_gate, sign_out};

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AdminSession>>();
    install_admin_gate(session, use_navigate());

    view! {
        <Title text="Registrations | AETHER Admin"/>
        <Show
            when=move || session.get().is_authorized()
            fallback=|| view! { <p class="loading-panel">"Checking access…"</p> }
        >
            <section class="section admin">
                <header class="admin__header">
                    <h1>"Registrations"</h1>
                    <button class="btn btn--ghost" on:click=move |_| sign_out(session)>
                        "Sign out"
                    </button>
                </header>
                <RegistrationsTable rows=registrations()/>
            </section>
        </Show>
    }
}
