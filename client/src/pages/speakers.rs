//! Speaker lineup.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::hero::Hero;
use crate::components::speaker_card::SpeakerCard;
use crate::content::speakers::speakers;

#[component]
pub fn SpeakersPage() -> impl IntoView {
    view! {
        <Title text="Speakers | AETHER"/>
        <Hero title="Speakers" tagline="Engineers, founders and researchers who have shared the stage with us." compact=true/>
        <section class="section">
            <div class="card-grid">
                {speakers().into_iter().map(|speaker| view! { <SpeakerCard speaker=speaker/> }).collect_view()}
            </div>
        </section>
    }
}
