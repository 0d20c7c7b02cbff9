//! Page state and the pure selection logic behind it.
//!
//! DESIGN
//! ======
//! Plain structs and functions with no browser dependencies, so filtering and
//! roster selection are tested natively. Components wrap them in signals.

pub mod auth;
pub mod registrations;
pub mod roster;
