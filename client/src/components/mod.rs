//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive records through props and
//! keep only local view state (image failure flags, countdown ticks, table
//! filters). Data loading happens in pages.

pub mod avatar;
pub mod event_countdown;
pub mod footer;
pub mod gallery_image;
pub mod hero;
pub mod member_card;
pub mod nav_bar;
pub mod particle_background;
pub mod registrations_table;
pub mod section_header;
pub mod social_links;
pub mod source_badge;
pub mod speaker_card;
pub mod wing_card;
