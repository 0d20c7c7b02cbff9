//! Bundled event calendar.

use time::OffsetDateTime;
use time::macros::{datetime, format_description};

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub venue: String,
    pub description: String,
    pub starts_at: OffsetDateTime,
}

impl Event {
    /// Start instant as Unix milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub fn starts_at_ms(&self) -> i64 {
        (self.starts_at.unix_timestamp_nanos() / 1_000_000) as i64
    }

    /// Human date, e.g. `21 Nov 2026, 09:30 AM`.
    pub fn display_date(&self) -> String {
        let format = format_description!("[day] [month repr:short] [year], [hour repr:12]:[minute] [period]");
        self.starts_at.format(format).unwrap_or_default()
    }
}

fn event(slug: &str, name: &str, tagline: &str, venue: &str, description: &str, starts_at: OffsetDateTime) -> Event {
    Event {
        slug: slug.to_owned(),
        name: name.to_owned(),
        tagline: tagline.to_owned(),
        venue: venue.to_owned(),
        description: description.to_owned(),
        starts_at,
    }
}

/// Events in chronological order.
pub fn events() -> Vec<Event> {
    vec![
        event(
            "orientation-2026",
            "AETHER Orientation",
            "Meet the wings, find your crew.",
            "Main Auditorium",
            "An open house for new members with wing demos and a club roadmap for the year.",
            datetime!(2026-08-22 16:00 +05:30),
        ),
        event(
            "hackathon-2026",
            "AETHER Hackathon 2026",
            "36 hours. One campus. Build something real.",
            "Innovation Centre",
            "Our flagship hackathon with tracks in web, climate, AI and hardware, mentors from industry, and prizes for every track.",
            datetime!(2026-11-21 09:30 +05:30),
        ),
        event(
            "tech-talks-winter",
            "Tech Talk Series: Winter Edition",
            "Industry speakers on what they are building now.",
            "Seminar Hall 2",
            "An evening of short talks and a panel with our featured speakers, followed by open networking.",
            datetime!(2026-12-05 17:00 +05:30),
        ),
        event(
            "climate-summit-2027",
            "Climate Tech Summit",
            "Software for a cooler planet.",
            "Convention Hall",
            "Workshops and a startup showcase on energy, mobility and carbon data, run with the Climate Tech wing.",
            datetime!(2027-01-16 10:00 +05:30),
        ),
    ]
}

/// The first event that has not started at `now_ms`, else the last event.
pub fn next_event(events: &[Event], now_ms: i64) -> Option<&Event> {
    events
        .iter()
        .find(|event| event.starts_at_ms() > now_ms)
        .or_else(|| events.last())
}
