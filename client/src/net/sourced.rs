//! Live-or-fallback result type for display lists.
//!
//! DESIGN
//! ======
//! Both branches always carry a value, so pages render the same way either
//! way; the branch only decides whether an "offline data" marker is shown.

#[cfg(test)]
#[path = "sourced_test.rs"]
mod sourced_test;

use super::error::FetchError;

/// Data that came from the API, or a bundled default substituted for it.
#[derive(Clone, Debug, PartialEq)]
pub enum Sourced<T> {
    Live(T),
    Fallback { value: T, reason: FetchError },
}

impl<T> Sourced<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Live(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Live(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Why the fallback was used, if it was.
    pub fn fallback_reason(&self) -> Option<&FetchError> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Transform the carried value, keeping the branch.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        match self {
            Self::Live(value) => Sourced::Live(f(value)),
            Self::Fallback { value, reason } => Sourced::Fallback { value: f(value), reason },
        }
    }
}

/// Resolve a list fetch: non-empty live data wins, anything else is replaced
/// by `fallback()` and the cause is logged under `resource`.
pub fn resolve_list<T>(
    resource: &str,
    outcome: Result<Vec<T>, FetchError>,
    fallback: impl FnOnce() -> Vec<T>,
) -> Sourced<Vec<T>> {
    let reason = match outcome {
        Ok(list) if !list.is_empty() => {
            log::info!("{resource}: loaded {} live records", list.len());
            return Sourced::Live(list);
        }
        Ok(_) => FetchError::Empty,
        Err(reason) => reason,
    };
    if reason == FetchError::Unavailable {
        log::debug!("{resource}: {reason}; using bundled data");
    } else {
        log::warn!("{resource}: {reason}; using bundled data");
    }
    Sourced::Fallback { value: fallback(), reason }
}
