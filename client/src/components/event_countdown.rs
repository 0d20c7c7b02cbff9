//! Live countdown to an event start.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the countdown as of render time; after hydration a
//! one-second ticker refreshes the clock until the component unmounts.

use leptos::prelude::*;

use crate::util::countdown::{CountdownState, countdown, now_ms, pad2};

#[component]
pub fn EventCountdown(target_ms: i64) -> impl IntoView {
    let now = RwSignal::new(now_ms());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                now.set(now_ms());
                if countdown(target_ms, now.get_untracked()) == CountdownState::Started {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="countdown" role="timer">
            {move || match countdown(target_ms, now.get()) {
                CountdownState::Started => view! { <span class="countdown__live">"Happening now"</span> }.into_any(),
                CountdownState::Upcoming(left) => {
                    view! {
                        <CountdownUnit value=left.days.to_string() label="Days"/>
                        <CountdownUnit value=pad2(left.hours) label="Hours"/>
                        <CountdownUnit value=pad2(left.minutes) label="Minutes"/>
                        <CountdownUnit value=pad2(left.seconds) label="Seconds"/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn CountdownUnit(value: String, label: &'static str) -> impl IntoView {
    view! {
        <span class="countdown__unit">
            <span class="countdown__value">{value}</span>
            <span class="countdown__label">{label}</span>
        </span>
    }
}
