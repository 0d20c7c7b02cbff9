//! Reduced-motion preference.
//!
//! TRADE-OFFS
//! ==========
//! Read once when the particle background mounts; a preference change while
//! the page is open takes effect on the next mount. SSR reports `false`.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

#[cfg(feature = "hydrate")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the user asked the OS to minimize animation.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
