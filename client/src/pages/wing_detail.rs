//! Wing detail: focus areas, coordinators, activities and gallery.
//!
//! The slug comes from the route; an unknown slug renders a not-found panel
//! rather than the global fallback so the visitor keeps the site chrome.

#[cfg(test)]
#[path = "wing_detail_test.rs"]
mod wing_detail_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{LoadingPanel, load_on_mount};
use crate::components::avatar::Avatar;
use crate::components::gallery_image::GalleryImage;
use crate::components::source_badge::SourceBadge;
use crate::net::api::fetch_wings;
use crate::net::types::Wing;

/// Wing whose slug matches `slug`, ignoring case and surrounding whitespace.
pub fn find_wing<'a>(wings: &'a [Wing], slug: &str) -> Option<&'a Wing> {
    let slug = slug.trim();
    wings.iter().find(|wing| wing.slug.eq_ignore_ascii_case(slug))
}

#[component]
pub fn WingDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let wings = load_on_mount(fetch_wings);

    view! {
        {move || match wings.get() {
            None => view! { <LoadingPanel label="Loading wing…"/> }.into_any(),
            Some(wings) => {
                let reason = wings.fallback_reason().cloned();
                match find_wing(wings.value(), &slug()).cloned() {
                    Some(wing) => view! { <WingDetail wing=wing/> <SourceBadge reason=reason/> }.into_any(),
                    None => view! { <WingNotFound/> }.into_any(),
                }
            }
        }}
    }
}

#[component]
fn WingDetail(wing: Wing) -> impl IntoView {
    let Wing { name, description, focus_areas, coordinators, activities, gallery, theme, .. } = wing;
    let header_class = format!("wing-detail__header wing-detail__header--{}", theme.css_modifier());
    let page_title = format!("{name} | AETHER");

    view! {
        <Title text=page_title/>
        <article class="wing-detail">
            <header class=header_class>
                <a class="wing-detail__back" href="/wings">
                    "← All wings"
                </a>
                <h1>{name.clone()}</h1>
                <p>{description}</p>
            </header>

            <section class="wing-detail__section">
                <h2>"Focus areas"</h2>
                <ul class="chip-list">
                    {focus_areas.into_iter().map(|area| view! { <li class="chip">{area}</li> }).collect_view()}
                </ul>
            </section>

            <section class="wing-detail__section">
                <h2>"Coordinators"</h2>
                <div class="coordinator-list">
                    {coordinators
                        .into_iter()
                        .map(|c| {
                            view! {
                                <div class="coordinator">
                                    <Avatar name=c.name.clone() image_url=c.image_url/>
                                    <div>
                                        <strong>{c.name}</strong>
                                        <span>{c.role}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="wing-detail__section">
                <h2>"What we do"</h2>
                <ul class="activity-list">
                    {activities
                        .into_iter()
                        .map(|a| {
                            view! {
                                <li>
                                    <h3>{a.title}</h3>
                                    <p>{a.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="wing-detail__section">
                <h2>"Gallery"</h2>
                <div class="gallery">
                    {gallery
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            let alt = format!("{name} photo {}", i + 1);
                            view! { <GalleryImage src=src alt=alt/> }
                        })
                        .collect_view()}
                </div>
            </section>
        </article>
    }
}

#[component]
fn WingNotFound() -> impl IntoView {
    view! {
        <Title text="Wing not found | AETHER"/>
        <section class="not-found">
            <h1>"Wing not found"</h1>
            <p>"That wing does not exist, or it has been renamed."</p>
            <a class="btn btn--primary" href="/wings">
                "Back to wings"
            </a>
        </section>
    }
}
