//! Admin registrations table with search, filters and CSV export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows are a fixed in-memory list held in a `StoredValue`. The three filter
//! inputs feed one memoized `RegistrationFilter`; the visible rows, the
//! summary and the export all derive from it, so they never disagree.

use leptos::prelude::*;

use crate::state::registrations::{
    PaymentStatus, Registration, RegistrationFilter, event_names, format_amount, summarize,
};
use crate::util::countdown::now_ms;
use crate::util::csv::{export_date, export_filename, registrations_csv};
use crate::util::download::download_text;

const ALL: &str = "all";

#[component]
pub fn RegistrationsTable(rows: Vec<Registration>) -> impl IntoView {
    let events = event_names(&rows);
    let rows = StoredValue::new(rows);

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(None::<PaymentStatus>);
    let event = RwSignal::new(None::<String>);
    let export_error = RwSignal::new(None::<String>);

    let filter = Memo::new(move |_| RegistrationFilter { search: search.get(), status: status.get(), event: event.get() });
    let shown = Memo::new(move |_| {
        let filter = filter.get();
        rows.with_value(|rows| filter.apply(rows).into_iter().cloned().collect::<Vec<_>>())
    });
    let summary = move || shown.with(|shown| summarize(&shown.iter().collect::<Vec<_>>()));

    let on_export = move |_| {
        let csv = shown.with_untracked(|shown| registrations_csv(&shown.iter().collect::<Vec<_>>()));
        let filename = export_filename(&export_date(now_ms()));
        match download_text(&filename, "text/csv;charset=utf-8", &csv) {
            Ok(()) => export_error.set(None),
            Err(e) => {
                log::warn!("registrations export: {e}");
                export_error.set(Some(e));
            }
        }
    };

    view! {
        <section class="registrations">
            <div class="registrations__controls">
                <input
                    class="registrations__search"
                    type="search"
                    placeholder="Search name, email or ID"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="registrations__select"
                    aria-label="Payment status"
                    on:change=move |ev| status.set(PaymentStatus::parse(&event_target_value(&ev)))
                >
                    <option value=ALL>"All statuses"</option>
                    {PaymentStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="registrations__select"
                    aria-label="Event"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        event.set((value != ALL).then_some(value));
                    }
                >
                    <option value=ALL>"All events"</option>
                    {events
                        .into_iter()
                        .map(|name| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" on:click=on_export>
                    "Export CSV"
                </button>
            </div>

            {move || export_error.get().map(|e| view! { <p class="registrations__error">{e}</p> })}

            <dl class="registrations__summary">
                {move || {
                    let s = summary();
                    view! {
                        <div>
                            <dt>"Showing"</dt>
                            <dd>{s.shown}</dd>
                        </div>
                        <div>
                            <dt>"Paid"</dt>
                            <dd>{s.paid}</dd>
                        </div>
                        <div>
                            <dt>"Collected"</dt>
                            <dd>{format_amount(s.paid_amount)}</dd>
                        </div>
                    }
                }}
            </dl>

            <div class="registrations__scroll">
                <table class="registrations__table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Contact"</th>
                            <th>"Event"</th>
                            <th>"Team"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || shown.get() key=|row| row.id.clone() let:row>
                            <RegistrationRow row=row/>
                        </For>
                    </tbody>
                </table>
                <Show when=move || shown.with(Vec::is_empty)>
                    <p class="registrations__empty">"No registrations match these filters."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn RegistrationRow(row: Registration) -> impl IntoView {
    let status_class = format!("status-pill status-pill--{}", row.status.as_str());
    view! {
        <tr>
            <td class="mono">{row.id}</td>
            <td>{row.name}</td>
            <td>
                <span class="registrations__email">{row.email}</span>
                <span class="registrations__phone">{row.phone}</span>
            </td>
            <td>{row.event}</td>
            <td>{row.team_members}</td>
            <td>{format_amount(u64::from(row.amount))}</td>
            <td>
                <span class=status_class>{row.status.label()}</span>
            </td>
            <td>{row.date}</td>
        </tr>
    }
}
