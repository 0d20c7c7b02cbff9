//! Decorative particle mesh for the AETHER site background.
//!
//! The simulation is plain Rust and runs natively in tests; only
//! [`render`] and [`engine::Engine`] touch the browser canvas. The host
//! component in the `client` crate owns the animation-frame loop and the
//! resize listener, and calls [`engine::Engine::frame`] once per frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`mesh`] | Nodes, bounds, seeded generation, per-frame update |
//! | [`scene`] | Draw plan (connection lines and pulsing dots) built from a mesh |
//! | [`color`] | Theme palette and RGB interpolation |
//! | [`render`] | Paints a [`scene::Scene`] onto a 2D context |
//! | [`engine`] | Canvas-bound wrapper combining mesh, palette and renderer |
//! | [`consts`] | Tuning constants (node count, connection distance, pulse) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod mesh;
pub mod render;
pub mod scene;
