//! Wing gallery tile; a broken image becomes a placeholder glyph.

use leptos::prelude::*;

#[component]
pub fn GalleryImage(src: String, alt: String) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <figure class="gallery-image">
            <Show
                when=move || !failed.get()
                fallback=|| view! { <span class="gallery-image__placeholder" aria-hidden="true">"◈"</span> }
            >
                <img
                    class="gallery-image__img"
                    src=src.clone()
                    alt=alt.clone()
                    loading="lazy"
                    on:error=move |_| failed.set(true)
                />
            </Show>
        </figure>
    }
}
