//! Full team roster.

use leptos::prelude::*;
use leptos_meta::Title;

use super::{LoadingPanel, load_on_mount};
use crate::components::hero::Hero;
use crate::components::member_card::MemberCard;
use crate::components::source_badge::SourceBadge;
use crate::net::api::fetch_team_members;
use crate::state::roster::team_roster;

#[component]
pub fn TeamPage() -> impl IntoView {
    let team = load_on_mount(fetch_team_members);

    view! {
        <Title text="Team | AETHER"/>
        <Hero title="Our Team" tagline="The people who keep AETHER running." compact=true/>
        <section class="section">
            {move || match team.get() {
                None => view! { <LoadingPanel label="Loading team…"/> }.into_any(),
                Some(team) => {
                    let roster = team_roster(team);
                    let reason = roster.fallback_reason().cloned();
                    let members = roster.into_value();
                    view! {
                        <SourceBadge reason=reason/>
                        <div class="card-grid">
                            {members.into_iter().map(|member| view! { <MemberCard member=member/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
