//! Page hero banner hosting the particle mesh.

use leptos::prelude::*;

use crate::components::particle_background::ParticleBackground;

#[component]
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(into)] tagline: String,
    #[prop(optional)] compact: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="hero" class:hero--compact=compact>
            <ParticleBackground/>
            <div class="hero__content">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__tagline">{tagline}</p>
                {children.map(|children| children())}
            </div>
        </section>
    }
}
