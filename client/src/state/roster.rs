//! Roster and lineup selection for public pages.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::content;
use crate::net::error::FetchError;
use crate::net::sourced::Sourced;
use crate::net::types::{MemberType, Speaker, TeamMember};

fn home_featured(members: &[TeamMember]) -> Vec<TeamMember> {
    members
        .iter()
        .filter(|m| m.active && m.member_type == MemberType::HomeFeatured)
        .cloned()
        .collect()
}

/// Landing-page roster: active `HOME_FEATURED` members.
///
/// Live data without any featured member falls back to the bundled featured
/// roster so the section never renders empty.
pub fn home_roster(team: Sourced<Vec<TeamMember>>) -> Sourced<Vec<TeamMember>> {
    match team {
        Sourced::Live(members) => {
            let featured = home_featured(&members);
            if featured.is_empty() {
                Sourced::Fallback { value: home_featured(&content::team::team_members()), reason: FetchError::Empty }
            } else {
                Sourced::Live(featured)
            }
        }
        Sourced::Fallback { value, reason } => Sourced::Fallback { value: home_featured(&value), reason },
    }
}

/// Team-page roster: active members in the order provided.
///
/// Live data where every member is inactive falls back to the bundled
/// active roster, like [`home_roster`].
pub fn team_roster(team: Sourced<Vec<TeamMember>>) -> Sourced<Vec<TeamMember>> {
    match team {
        Sourced::Live(members) => {
            let visible = visible_roster(&members);
            if visible.is_empty() {
                Sourced::Fallback { value: visible_roster(&content::team::team_members()), reason: FetchError::Empty }
            } else {
                Sourced::Live(visible)
            }
        }
        Sourced::Fallback { value, reason } => Sourced::Fallback { value: visible_roster(&value), reason },
    }
}

/// Active members in the order provided.
pub fn visible_roster(members: &[TeamMember]) -> Vec<TeamMember> {
    members.iter().filter(|m| m.active).cloned().collect()
}

/// Speakers flagged for the landing page, in the order provided.
pub fn featured_speakers(speakers: &[Speaker]) -> Vec<Speaker> {
    speakers.iter().filter(|s| s.featured).cloned().collect()
}
