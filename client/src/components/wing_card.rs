//! Wing summary card linking to the wing detail page.

use leptos::prelude::*;

use crate::net::types::Wing;

/// Focus areas shown on a card before the "+N" overflow chip.
const CARD_FOCUS_LIMIT: usize = 3;

#[component]
pub fn WingCard(wing: Wing) -> impl IntoView {
    let href = format!("/wings/{}", wing.slug);
    let class = format!("wing-card wing-card--{}", wing.theme.css_modifier());
    let overflow = wing.focus_areas.len().saturating_sub(CARD_FOCUS_LIMIT);
    let focus = wing.focus_areas.into_iter().take(CARD_FOCUS_LIMIT).collect::<Vec<_>>();

    view! {
        <a class=class href=href>
            <h3 class="wing-card__name">{wing.name}</h3>
            <p class="wing-card__description">{wing.description}</p>
            <ul class="wing-card__focus">
                {focus.into_iter().map(|area| view! { <li class="chip">{area}</li> }).collect_view()}
                {(overflow > 0).then(|| view! { <li class="chip chip--muted">{format!("+{overflow}")}</li> })}
            </ul>
            <span class="wing-card__more">"Explore wing →"</span>
        </a>
    }
}
