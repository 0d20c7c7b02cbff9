//! Rendering: paints a [`Scene`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads a finished scene and produces pixels; it never mutates the mesh.
//!
//! Fallible `Canvas2D` calls propagate via `Result<(), JsValue>`; the caller
//! ([`crate::engine::Engine::frame`]) hands the result to the host.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{DOT_ALPHA, GLOW_ALPHA, LINE_WIDTH_PX};
use crate::scene::{Dot, Line, Scene};

/// Clear the surface and draw lines, then dots.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    ctx.set_line_width(LINE_WIDTH_PX);
    for line in &scene.lines {
        draw_line(ctx, line);
    }
    for dot in &scene.dots {
        draw_dot(ctx, dot)?;
    }
    Ok(())
}

fn draw_line(ctx: &CanvasRenderingContext2d, line: &Line) {
    ctx.set_stroke_style_str(&line.color.css_rgba(line.alpha));
    ctx.begin_path();
    ctx.move_to(line.from.0, line.from.1);
    ctx.line_to(line.to.0, line.to.1);
    ctx.stroke();
}

fn draw_dot(ctx: &CanvasRenderingContext2d, dot: &Dot) -> Result<(), JsValue> {
    // Halo under the core.
    ctx.set_fill_style_str(&dot.color.css_rgba(GLOW_ALPHA));
    ctx.begin_path();
    ctx.arc(dot.x, dot.y, dot.glow_radius, 0.0, TAU)?;
    ctx.fill();

    ctx.set_fill_style_str(&dot.color.css_rgba(DOT_ALPHA));
    ctx.begin_path();
    ctx.arc(dot.x, dot.y, dot.radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}
