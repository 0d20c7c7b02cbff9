//! Bundled content tables.
//!
//! These are the fallback lists for API-backed sections and the only source
//! for static sections (speakers, events, registrations). Every function
//! builds a fresh `Vec`; callers filter copies and never mutate these.


pub mod events;
pub mod registrations;
pub mod speakers;
pub mod team;
pub mod wings;

use crate::net::types::SocialLinks;

pub(crate) fn links(linkedin: &str, github: &str, instagram: &str) -> SocialLinks {
    let owned = |value: &str| (!value.is_empty()).then(|| value.to_owned());
    SocialLinks {
        linkedin: owned(linkedin),
        github: owned(github),
        instagram: owned(instagram),
        twitter: None,
        email: None,
    }
}
