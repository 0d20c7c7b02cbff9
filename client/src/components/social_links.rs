//! Row of icon links for a member or speaker.

use leptos::prelude::*;

use crate::net::types::SocialLinks;

#[component]
pub fn SocialLinkList(links: SocialLinks, #[prop(into)] owner: String) -> impl IntoView {
    let entries = links.entries();
    if entries.is_empty() {
        return ().into_any();
    }
    view! {
        <ul class="social-links">
            {entries
                .into_iter()
                .map(|(kind, href)| {
                    let label = format!("{owner} on {}", kind.label());
                    view! {
                        <li>
                            <a
                                class=format!("social-links__link social-links__link--{}", kind.slug())
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                title=label.clone()
                                aria-label=label
                            >
                                {kind.glyph()}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
