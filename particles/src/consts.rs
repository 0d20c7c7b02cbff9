//! Shared numeric constants for the particle mesh.

// ── Population ──────────────────────────────────────────────────

/// Nodes generated per resize when the host does not override the count.
pub const DEFAULT_NODE_COUNT: usize = 50;

/// Largest per-axis speed in CSS pixels per frame.
pub const MAX_SPEED_PX: f64 = 0.5;

/// Smallest base node radius in CSS pixels.
pub const MIN_NODE_SIZE_PX: f64 = 1.0;

/// Largest base node radius in CSS pixels.
pub const MAX_NODE_SIZE_PX: f64 = 3.0;

// ── Connections ─────────────────────────────────────────────────

/// Pairs closer than this are joined by a line.
pub const CONNECTION_DISTANCE_PX: f64 = 150.0;

/// Line opacity at zero distance. Decays linearly to 0 at the threshold.
pub const MAX_LINE_ALPHA: f64 = 0.5;

/// Stroke width for connection lines.
pub const LINE_WIDTH_PX: f64 = 0.8;

// ── Dots ────────────────────────────────────────────────────────

/// Relative radius swing of the pulse (0.3 = ±30%).
pub const PULSE_AMPLITUDE: f64 = 0.3;

/// Pulse angular rate in radians per millisecond.
pub const PULSE_RATE: f64 = 0.002;

/// Halo radius as a multiple of the dot radius.
pub const GLOW_SCALE: f64 = 3.0;

/// Halo fill opacity.
pub const GLOW_ALPHA: f64 = 0.15;

/// Dot core fill opacity.
pub const DOT_ALPHA: f64 = 0.9;
