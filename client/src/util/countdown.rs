//! Countdown arithmetic for upcoming events.
//!
//! Pure over millisecond timestamps so the ticking component only has to
//! supply the clock.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

const SECOND_MS: i64 = 1_000;
const MINUTE_S: i64 = 60;
const HOUR_S: i64 = 60 * MINUTE_S;
const DAY_S: i64 = 24 * HOUR_S;

/// Time left, split for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownState {
    Upcoming(Countdown),
    Started,
}

/// Remaining time from `now_ms` until `target_ms`, whole seconds rounded down.
pub fn countdown(target_ms: i64, now_ms: i64) -> CountdownState {
    if target_ms <= now_ms {
        return CountdownState::Started;
    }
    let remaining_s = (target_ms - now_ms) / SECOND_MS;
    CountdownState::Upcoming(Countdown {
        days: remaining_s / DAY_S,
        hours: remaining_s % DAY_S / HOUR_S,
        minutes: remaining_s % HOUR_S / MINUTE_S,
        seconds: remaining_s % MINUTE_S,
    })
}

/// Two-digit zero-padded unit, e.g. `07`.
pub fn pad2(value: i64) -> String {
    format!("{value:02}")
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
        i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
    }
}
