//! Draw plan produced from a mesh each frame.
//!
//! The renderer only reads a [`Scene`]; keeping it a plain value lets the
//! opacity and pulse math be checked without a canvas.

use crate::color::{Palette, Rgb};
use crate::consts::{CONNECTION_DISTANCE_PX, GLOW_SCALE, MAX_LINE_ALPHA};
use crate::mesh::{Connection, Mesh};

/// A connection line between two node centers.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
    pub color: Rgb,
}

/// A pulsing node disc and its halo.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub glow_radius: f64,
    pub color: Rgb,
}

/// Everything one frame paints: lines first, then dots on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub lines: Vec<Line>,
    pub dots: Vec<Dot>,
}

impl Scene {
    pub(crate) fn build(mesh: &Mesh, connections: Vec<Connection>, time_ms: f64, palette: &Palette) -> Self {
        let nodes = mesh.nodes();
        let lines = connections
            .into_iter()
            .map(|conn| {
                let (a, b) = (&nodes[conn.a], &nodes[conn.b]);
                Line {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    alpha: line_alpha(conn.distance, CONNECTION_DISTANCE_PX),
                    color: palette.blend(conn.distance / CONNECTION_DISTANCE_PX),
                }
            })
            .collect();
        let dots = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let radius = node.pulse_radius(time_ms).max(0.0);
                Dot {
                    x: node.x,
                    y: node.y,
                    radius,
                    glow_radius: radius * GLOW_SCALE,
                    color: if i % 2 == 0 { palette.primary } else { palette.secondary },
                }
            })
            .collect();
        Self { lines, dots }
    }
}

/// Opacity for a line of length `distance`: [`MAX_LINE_ALPHA`] at zero,
/// falling linearly to 0 at `threshold`.
#[must_use]
pub fn line_alpha(distance: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    MAX_LINE_ALPHA * (1.0 - distance.max(0.0) / threshold)
}
