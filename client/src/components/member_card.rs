//! Team member card.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::social_links::SocialLinkList;
use crate::net::types::TeamMember;

#[component]
pub fn MemberCard(member: TeamMember, #[prop(optional)] featured: bool) -> impl IntoView {
    let TeamMember { name, role, program, image_url, social_links, .. } = member;
    let has_program = !program.trim().is_empty();

    view! {
        <article class="member-card" class:member-card--featured=featured>
            <Avatar name=name.clone() image_url=image_url large=featured/>
            <h3 class="member-card__name">{name.clone()}</h3>
            <p class="member-card__role">{role}</p>
            <Show when=move || has_program>
                <p class="member-card__program">{program.clone()}</p>
            </Show>
            <SocialLinkList links=social_links owner=name/>
        </article>
    }
}
