//! Event calendar with a countdown per event.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::event_countdown::EventCountdown;
use crate::components::hero::Hero;
use crate::content::events::{Event, events};

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <Title text="Events | AETHER"/>
        <Hero title="Events" tagline="Hackathons, talks and summits across the year." compact=true/>
        <section class="section">
            <div class="event-list">
                {events().into_iter().map(|event| view! { <EventItem event=event/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn EventItem(event: Event) -> impl IntoView {
    let when = event.display_date();
    let target_ms = event.starts_at_ms();
    view! {
        <article class="event-item" id=event.slug>
            <header class="event-item__header">
                <h3 class="event-item__name">{event.name}</h3>
                <p class="event-item__tagline">{event.tagline}</p>
            </header>
            <p class="event-item__meta">
                <span>{when}</span>
                " · "
                <span>{event.venue}</span>
            </p>
            <p class="event-item__description">{event.description}</p>
            <EventCountdown target_ms=target_ms/>
        </article>
    }
}
