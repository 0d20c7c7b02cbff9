//! CSV export of admin registrations.
//!
//! Output is RFC 4180 with `\n` record separators: a fixed header row, then
//! one record per row in the order given. Fields containing a comma, quote,
//! or line break are quoted with inner quotes doubled.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use crate::state::registrations::Registration;

pub const CSV_HEADER: [&str; 9] = ["ID", "Name", "Email", "Phone", "Event", "Team Members", "Amount", "Status", "Date"];

/// Quote `field` if it would otherwise break the record.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

fn record<S: AsRef<str>>(fields: &[S]) -> String {
    fields.iter().map(|f| escape_field(f.as_ref())).collect::<Vec<_>>().join(",")
}

/// Build the export document for `rows`.
pub fn registrations_csv(rows: &[&Registration]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(record(&CSV_HEADER));
    lines.extend(rows.iter().map(|row| {
        record(&[
            row.id.as_str(),
            row.name.as_str(),
            row.email.as_str(),
            row.phone.as_str(),
            row.event.as_str(),
            row.team_members.as_str(),
            &row.amount.to_string(),
            row.status.as_str(),
            row.date.as_str(),
        ])
    }));
    lines.join("\n")
}

/// UTC calendar date of `now_ms` as `YYYY-MM-DD`; blank if out of range.
pub fn export_date(now_ms: i64) -> String {
    time::OffsetDateTime::from_unix_timestamp_nanos(i128::from(now_ms) * 1_000_000)
        .map(|instant| instant.date().to_string())
        .unwrap_or_default()
}

/// Download name for an export made on `date` (`YYYY-MM-DD`).
pub fn export_filename(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() { "registrations.csv".to_owned() } else { format!("registrations-{date}.csv") }
}
