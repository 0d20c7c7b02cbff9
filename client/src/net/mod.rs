//! Network layer for the external club API.
//!
//! ERROR HANDLING
//! ==============
//! Fetches never surface errors to pages. Every list fetch resolves to a
//! [`sourced::Sourced`] value carrying either live data or the bundled
//! fallback plus the reason the live path failed.

pub mod api;
pub mod error;
pub mod sourced;
pub mod types;
