//! Member portrait that degrades to initials.

use leptos::prelude::*;

use crate::util::initials::initials;

/// Photo when it loads, initials when the URL is missing or errors.
#[component]
pub fn Avatar(name: String, image_url: Option<String>, #[prop(optional)] large: bool) -> impl IntoView {
    let failed = RwSignal::new(false);
    let letters = initials(&name);
    let src = image_url.filter(|url| !url.trim().is_empty());

    view! {
        <div class="avatar" class:avatar--large=large>
            {move || match src.clone() {
                Some(src) if !failed.get() => {
                    view! {
                        <img
                            class="avatar__img"
                            src=src
                            alt=name.clone()
                            loading="lazy"
                            on:error=move |_| failed.set(true)
                        />
                    }
                        .into_any()
                }
                _ => view! { <span class="avatar__initials" aria-hidden="true">{letters.clone()}</span> }.into_any(),
            }}
        </div>
    }
}
