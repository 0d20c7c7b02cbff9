//! Landing page: hero, next event, featured team, speakers and wings.

use leptos::prelude::*;
use leptos_meta::Title;

use super::{LoadingPanel, load_on_mount};
use crate::components::event_countdown::EventCountdown;
use crate::components::hero::Hero;
use crate::components::member_card::MemberCard;
use crate::components::section_header::SectionHeader;
use crate::components::source_badge::SourceBadge;
use crate::components::speaker_card::SpeakerCard;
use crate::components::wing_card::WingCard;
use crate::content::events::{events, next_event};
use crate::content::speakers::speakers;
use crate::net::api::{fetch_team_members, fetch_wings};
use crate::state::roster::{featured_speakers, home_roster};
use crate::util::countdown::now_ms;

#[component]
pub fn HomePage() -> impl IntoView {
    let team = load_on_mount(fetch_team_members);
    let wings = load_on_mount(fetch_wings);
    let calendar = events();
    let upcoming = next_event(&calendar, now_ms()).cloned();

    view! {
        <Title text="AETHER | Student Technology Club"/>
        <Hero title="AETHER" tagline="Where curious students build what comes next.">
            <div class="hero__actions">
                <a class="btn btn--primary" href="/wings">
                    "Explore wings"
                </a>
                <a class="btn btn--ghost" href="/events">
                    "Upcoming events"
                </a>
            </div>
            {upcoming
                .map(|event| {
                    view! {
                        <div class="hero__next-event">
                            <span class="hero__next-label">{format!("Next up: {}", event.name)}</span>
                            <EventCountdown target_ms=event.starts_at_ms()/>
                        </div>
                    }
                })}
        </Hero>

        <section class="section">
            <SectionHeader eyebrow="The crew" title="Meet the team"/>
            {move || match team.get() {
                None => view! { <LoadingPanel label="Loading team…"/> }.into_any(),
                Some(team) => {
                    let roster = home_roster(team);
                    let reason = roster.fallback_reason().cloned();
                    view! {
                        <SourceBadge reason=reason/>
                        <div class="card-grid card-grid--featured">
                            {roster
                                .into_value()
                                .into_iter()
                                .map(|member| view! { <MemberCard member=member featured=true/> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <a class="section__more" href="/team">
                "See the full team →"
            </a>
        </section>

        <section class="section">
            <SectionHeader eyebrow="On stage" title="Featured speakers"/>
            <div class="card-grid">
                {featured_speakers(&speakers())
                    .into_iter()
                    .map(|speaker| view! { <SpeakerCard speaker=speaker/> })
                    .collect_view()}
            </div>
            <a class="section__more" href="/speakers">
                "All speakers →"
            </a>
        </section>

        <section class="section">
            <SectionHeader eyebrow="Find your wing" title="Our wings"/>
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
