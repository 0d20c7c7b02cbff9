//! Site navigation bar.

use leptos::prelude::*;

const LINKS: [(&str, &str); 5] =
    [("/", "Home"), ("/team", "Team"), ("/wings", "Wings"), ("/events", "Events"), ("/speakers", "Speakers")];

#[component]
pub fn NavBar() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <nav class="nav-bar" class:nav-bar--open=move || open.get()>
            <a href="/" class="nav-bar__brand">
                <span class="nav-bar__logo">"Æ"</span>
                "AETHER"
            </a>
            <button
                class="nav-bar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "☰"
            </button>
            <ul class="nav-bar__links" on:click=move |_| open.set(false)>
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a href=href class="nav-bar__link">
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
