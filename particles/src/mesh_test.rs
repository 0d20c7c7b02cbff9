#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{DEFAULT_NODE_COUNT, MAX_LINE_ALPHA};
use crate::scene::line_alpha;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn node_at(x: f64, y: f64, vx: f64, vy: f64) -> Node {
    Node { x, y, vx, vy, size: 2.0, phase: 0.0 }
}

// --- Bounds ---

#[test]
fn bounds_collapse_negative_and_non_finite_extents() {
    assert_eq!(Bounds::new(-5.0, f64::NAN), Bounds { width: 0.0, height: 0.0 });
    assert_eq!(Bounds::new(f64::INFINITY, 10.0), Bounds { width: 0.0, height: 10.0 });
}

#[test]
fn bounds_contains_is_inclusive() {
    let b = Bounds::new(100.0, 50.0);
    assert!(b.contains(0.0, 0.0));
    assert!(b.contains(100.0, 50.0));
    assert!(!b.contains(100.1, 10.0));
    assert!(!b.contains(10.0, -0.1));
}

// --- Generation ---

#[test]
fn new_mesh_has_requested_count_inside_bounds() {
    let bounds = Bounds::new(800.0, 600.0);
    let mesh = Mesh::new(bounds, DEFAULT_NODE_COUNT, 7);
    assert_eq!(mesh.nodes().len(), 50);
    for node in mesh.nodes() {
        assert!(bounds.contains(node.x, node.y), "{node:?} outside {bounds:?}");
        assert!(node.vx.abs() <= 0.5 && node.vy.abs() <= 0.5);
        assert!((1.0..=3.0).contains(&node.size));
        assert!((0.0..std::f64::consts::TAU).contains(&node.phase));
    }
}

#[test]
fn same_seed_produces_identical_mesh() {
    let bounds = Bounds::new(640.0, 480.0);
    let a = Mesh::new(bounds, 30, 42);
    let b = Mesh::new(bounds, 30, 42);
    assert_eq!(a.nodes(), b.nodes());
}

#[test]
fn different_seeds_produce_different_meshes() {
    let bounds = Bounds::new(640.0, 480.0);
    let a = Mesh::new(bounds, 30, 1);
    let b = Mesh::new(bounds, 30, 2);
    assert_ne!(a.nodes(), b.nodes());
}

#[test]
fn reseed_regenerates_for_new_bounds() {
    let mut mesh = Mesh::new(Bounds::new(1000.0, 1000.0), 20, 3);
    let small = Bounds::new(50.0, 40.0);
    mesh.reseed(small, 4);
    assert_eq!(mesh.bounds(), small);
    assert_eq!(mesh.nodes().len(), 20);
    assert!(mesh.nodes().iter().all(|n| small.contains(n.x, n.y)));
}

#[test]
fn zero_count_mesh_is_empty_and_steps_cleanly() {
    let mut mesh = Mesh::new(Bounds::new(10.0, 10.0), 0, 0);
    mesh.step();
    assert!(mesh.nodes().is_empty());
    assert!(mesh.connections(150.0).is_empty());
}

// --- Update ---

#[test]
fn step_moves_by_velocity_away_from_edges() {
    let mut node = node_at(10.0, 20.0, 0.5, -0.25);
    node.step(Bounds::new(100.0, 100.0));
    assert!(approx_eq(node.x, 10.5));
    assert!(approx_eq(node.y, 19.75));
    assert_eq!(node.vx, 0.5);
    assert_eq!(node.vy, -0.25);
}

#[test]
fn step_reflects_and_clamps_at_far_edge() {
    let mut node = node_at(99.8, 50.0, 0.5, 0.0);
    node.step(Bounds::new(100.0, 100.0));
    assert_eq!(node.x, 100.0);
    assert_eq!(node.vx, -0.5);
}

#[test]
fn step_reflects_and_clamps_at_origin_edge() {
    let mut node = node_at(50.0, 0.2, 0.0, -0.4);
    node.step(Bounds::new(100.0, 100.0));
    assert_eq!(node.y, 0.0);
    assert_eq!(node.vy, 0.4);
}

#[test]
fn positions_stay_in_bounds_over_many_steps() {
    for seed in [0_u64, 1, 99, 12_345, u64::MAX] {
        let bounds = Bounds::new(320.0, 200.0);
        let mut mesh = Mesh::new(bounds, DEFAULT_NODE_COUNT, seed);
        for _ in 0..5_000 {
            mesh.step();
            assert!(mesh.nodes().iter().all(|n| bounds.contains(n.x, n.y)), "seed {seed} escaped");
        }
    }
}

#[test]
fn positions_stay_in_bounds_on_tiny_surface() {
    let bounds = Bounds::new(0.3, 0.0);
    let mut mesh = Mesh::new(bounds, 10, 5);
    for _ in 0..1_000 {
        mesh.step();
    }
    assert!(mesh.nodes().iter().all(|n| bounds.contains(n.x, n.y)));
}

#[test]
fn reduced_motion_freezes_positions() {
    let mut mesh = Mesh::new(Bounds::new(500.0, 500.0), 25, 11);
    let before = mesh.nodes().to_vec();
    for _ in 0..10 {
        assert!(!mesh.advance(true));
    }
    assert_eq!(mesh.nodes(), before.as_slice());
}

#[test]
fn reduced_motion_still_produces_a_scene() {
    let mut mesh = Mesh::new(Bounds::new(500.0, 500.0), 25, 11);
    mesh.advance(true);
    let scene = mesh.scene(1_000.0, &Palette::default());
    assert_eq!(scene.dots.len(), 25);
}

#[test]
fn advance_without_reduced_motion_moves_nodes() {
    let mut mesh = Mesh::new(Bounds::new(500.0, 500.0), 25, 11);
    let before = mesh.nodes().to_vec();
    assert!(mesh.advance(false));
    assert_ne!(mesh.nodes(), before.as_slice());
}

// --- Connections and scene ---

#[test]
fn connections_are_unordered_pairs_within_threshold() {
    let mut mesh = Mesh::new(Bounds::new(1_000.0, 1_000.0), 3, 0);
    mesh.nodes = vec![
        node_at(0.0, 0.0, 0.0, 0.0),
        node_at(100.0, 0.0, 0.0, 0.0),
        node_at(400.0, 0.0, 0.0, 0.0),
    ];
    let conns = mesh.connections(150.0);
    assert_eq!(conns.len(), 1);
    assert_eq!((conns[0].a, conns[0].b), (0, 1));
    assert!(approx_eq(conns[0].distance, 100.0));
}

#[test]
fn connections_never_repeat_or_self_pair() {
    let mesh = Mesh::new(Bounds::new(200.0, 200.0), 40, 8);
    let conns = mesh.connections(1_000.0);
    assert_eq!(conns.len(), 40 * 39 / 2);
    assert!(conns.iter().all(|c| c.a < c.b));
}

#[test]
fn line_alpha_decays_linearly() {
    assert!(approx_eq(line_alpha(0.0, 150.0), MAX_LINE_ALPHA));
    assert!(approx_eq(line_alpha(75.0, 150.0), MAX_LINE_ALPHA / 2.0));
    assert_eq!(line_alpha(150.0, 150.0), 0.0);
    assert_eq!(line_alpha(400.0, 150.0), 0.0);
    assert_eq!(line_alpha(10.0, 0.0), 0.0);
}

#[test]
fn pulse_radius_swings_around_base_size() {
    let node = Node { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, size: 2.0, phase: 0.0 };
    assert!(approx_eq(node.pulse_radius(0.0), 2.0));
    let peak = node.pulse_radius(std::f64::consts::FRAC_PI_2 / 0.002);
    assert!(approx_eq(peak, 2.6));
    for t in (0..10_000).step_by(37) {
        let r = node.pulse_radius(f64::from(t));
        assert!((1.4 - EPSILON..=2.6 + EPSILON).contains(&r));
    }
}

#[test]
fn scene_lines_follow_connections() {
    let mut mesh = Mesh::new(Bounds::new(1_000.0, 1_000.0), 2, 0);
    mesh.nodes = vec![node_at(10.0, 10.0, 0.0, 0.0), node_at(10.0, 85.0, 0.0, 0.0)];
    let palette = Palette::default();
    let scene = mesh.scene(0.0, &palette);
    assert_eq!(scene.lines.len(), 1);
    let line = &scene.lines[0];
    assert_eq!(line.from, (10.0, 10.0));
    assert_eq!(line.to, (10.0, 85.0));
    assert!(approx_eq(line.alpha, MAX_LINE_ALPHA / 2.0));
    assert_eq!(line.color, palette.blend(0.5));
    assert_eq!(scene.dots.len(), 2);
    assert!(approx_eq(scene.dots[0].glow_radius, scene.dots[0].radius * 3.0));
}
