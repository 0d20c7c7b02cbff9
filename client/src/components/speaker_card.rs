//! Speaker card with topic chips.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::social_links::SocialLinkList;
use crate::net::types::Speaker;

#[component]
pub fn SpeakerCard(speaker: Speaker) -> impl IntoView {
    let Speaker { name, title, company, bio, topics, image_url, social_links, featured } = speaker;
    let affiliation = match (title.trim(), company.trim()) {
        ("", company) => company.to_owned(),
        (title, "") => title.to_owned(),
        (title, company) => format!("{title}, {company}"),
    };

    view! {
        <article class="speaker-card" class:speaker-card--featured=featured>
            <Avatar name=name.clone() image_url=image_url large=true/>
            <div class="speaker-card__body">
                <h3 class="speaker-card__name">{name.clone()}</h3>
                <p class="speaker-card__affiliation">{affiliation}</p>
                <p class="speaker-card__bio">{bio}</p>
                <ul class="speaker-card__topics">
                    {topics
                        .into_iter()
                        .map(|topic| view! { <li class="chip">{topic}</li> })
                        .collect_view()}
                </ul>
                <SocialLinkList links=social_links owner=name/>
            </div>
        </article>
    }
}
