//! "Offline data" marker for sections rendered from bundled content.

use leptos::prelude::*;

use crate::net::error::FetchError;

/// Renders nothing for live data; a small badge when `reason` is present.
#[component]
pub fn SourceBadge(reason: Option<FetchError>) -> impl IntoView {
    reason.map(|reason| {
        view! {
            <span class="source-badge" title=reason.to_string()>
                "offline data"
            </span>
        }
    })
}
