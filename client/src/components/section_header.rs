use leptos::prelude::*;

/// Eyebrow label, heading and optional lede for a page section.
#[component]
pub fn SectionHeader(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] lede: Option<String>,
) -> impl IntoView {
    view! {
        <header class="section-header">
            <span class="section-header__eyebrow">{eyebrow}</span>
            <h2 class="section-header__title">{title}</h2>
            {lede.map(|lede| view! { <p class="section-header__lede">{lede}</p> })}
        </header>
    }
}
