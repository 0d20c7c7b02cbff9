//! Particle nodes, drawing bounds and the per-frame update.
//!
//! DESIGN
//! ======
//! Generation is driven by a seeded `SmallRng` so the host can reproduce a
//! mesh exactly (tests pin seeds; the browser seeds from the clock). Nodes
//! are regenerated wholesale on resize rather than rescaled.

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::color::Palette;
use crate::consts::{CONNECTION_DISTANCE_PX, MAX_NODE_SIZE_PX, MAX_SPEED_PX, MIN_NODE_SIZE_PX, PULSE_AMPLITUDE, PULSE_RATE};
use crate::scene::Scene;

/// Drawing surface extent in CSS pixels. Origin is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Negative or non-finite extents collapse to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: sanitize_extent(width), height: sanitize_extent(height) }
    }

    /// Inclusive containment on both edges.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// One moving point of the mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Base radius before the pulse is applied.
    pub size: f64,
    /// Pulse phase offset in radians.
    pub phase: f64,
}

impl Node {
    fn random(rng: &mut SmallRng, bounds: Bounds) -> Self {
        Self {
            x: rng.random::<f64>() * bounds.width,
            y: rng.random::<f64>() * bounds.height,
            vx: (rng.random::<f64>() * 2.0 - 1.0) * MAX_SPEED_PX,
            vy: (rng.random::<f64>() * 2.0 - 1.0) * MAX_SPEED_PX,
            size: MIN_NODE_SIZE_PX + rng.random::<f64>() * (MAX_NODE_SIZE_PX - MIN_NODE_SIZE_PX),
            phase: rng.random::<f64>() * TAU,
        }
    }

    /// Advance one frame, bouncing off the edges of `bounds`.
    pub fn step(&mut self, bounds: Bounds) {
        (self.x, self.vx) = bounce(self.x + self.vx, self.vx, bounds.width);
        (self.y, self.vy) = bounce(self.y + self.vy, self.vy, bounds.height);
    }

    /// Radius at `time_ms`: the base size swung by a sine of the phase.
    #[must_use]
    pub fn pulse_radius(&self, time_ms: f64) -> f64 {
        self.size * (1.0 + PULSE_AMPLITUDE * (time_ms * PULSE_RATE + self.phase).sin())
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Node) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Clamp `pos` into `[0, extent]`; on contact the velocity is flipped to point
/// back inside.
fn bounce(pos: f64, vel: f64, extent: f64) -> (f64, f64) {
    if pos <= 0.0 {
        (0.0, vel.abs())
    } else if pos >= extent {
        (extent, -vel.abs())
    } else {
        (pos, vel)
    }
}

/// A pair of nodes within connection range, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// The full node population plus the bounds it lives in.
#[derive(Clone, Debug)]
pub struct Mesh {
    bounds: Bounds,
    count: usize,
    nodes: Vec<Node>,
}

impl Mesh {
    /// Generate `count` nodes inside `bounds` from `seed`.
    #[must_use]
    pub fn new(bounds: Bounds, count: usize, seed: u64) -> Self {
        let mut mesh = Self { bounds, count, nodes: Vec::with_capacity(count) };
        mesh.reseed(bounds, seed);
        mesh
    }

    /// Discard every node and regenerate the population for new bounds.
    pub fn reseed(&mut self, bounds: Bounds, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.bounds = bounds;
        self.nodes.clear();
        self.nodes.extend((0..self.count).map(|_| Node::random(&mut rng, bounds)));
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Move every node one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for node in &mut self.nodes {
            node.step(bounds);
        }
    }

    /// Per-frame update honoring the reduced-motion preference. Returns
    /// whether anything moved.
    pub fn advance(&mut self, reduced_motion: bool) -> bool {
        if reduced_motion {
            return false;
        }
        self.step();
        true
    }

    /// Every unordered pair closer than `threshold`.
    #[must_use]
    pub fn connections(&self, threshold: f64) -> Vec<Connection> {
        let mut out = Vec::new();
        for (a, left) in self.nodes.iter().enumerate() {
            for (offset, right) in self.nodes[a + 1..].iter().enumerate() {
                let distance = left.distance_to(right);
                if distance < threshold {
                    out.push(Connection { a, b: a + 1 + offset, distance });
                }
            }
        }
        out
    }

    /// Draw plan for the current positions at `time_ms`.
    #[must_use]
    pub fn scene(&self, time_ms: f64, palette: &Palette) -> Scene {
        Scene::build(self, self.connections(CONNECTION_DISTANCE_PX), time_ms, palette)
    }
}
