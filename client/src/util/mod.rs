//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (localStorage, matchMedia, Blob downloads, clocks) live
//! here behind `hydrate` gates so pages and components stay testable natively.

pub mod auth;
pub mod countdown;
pub mod csv;
pub mod download;
pub mod initials;
pub mod motion;
