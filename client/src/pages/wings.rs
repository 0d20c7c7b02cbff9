//! Wing directory.

use leptos::prelude::*;
use leptos_meta::Title;

use super::{LoadingPanel, load_on_mount};
use crate::components::hero::Hero;
use crate::components::source_badge::SourceBadge;
use crate::components::wing_card::WingCard;
use crate::net::api::fetch_wings;

#[component]
pub fn WingsPage() -> impl IntoView {
    let wings = load_on_mount(fetch_wings);

    view! {
        <Title text="Wings | AETHER"/>
        <Hero title="Wings" tagline="Six focused groups. Pick one, or pick them all." compact=true/>
        <section class="section">
            {move || match wings.get() {
                None => view! { <LoadingPanel label="Loading wings…"/> }.into_any(),
                Some(wings) => {
                    let reason = wings.fallback_reason().cloned();
                    view! {
                        <SourceBadge reason=reason/>
                        <div class="card-grid">
                            {wings.into_value().into_iter().map(|wing| view! { <WingCard wing=wing/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
