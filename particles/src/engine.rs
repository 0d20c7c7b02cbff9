//! Canvas-bound host for the mesh.
//!
//! Owns the `<canvas>` element, its 2D context and the node state. The only
//! place outside `render` that touches browser types.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Palette;
use crate::consts::DEFAULT_NODE_COUNT;
use crate::mesh::{Bounds, Mesh};
use crate::render;

/// Canvas-bound mesh: owns the element, its 2D context and the node state.
///
/// The host drives it: [`Engine::resize`] whenever the surface changes size,
/// [`Engine::frame`] from each animation-frame callback.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    mesh: Mesh,
    palette: Palette,
    dpr: f64,
}

impl Engine {
    /// Bind to `canvas`. Returns `None` when no 2D context is available.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, palette: Palette) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(object)) => match object.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => return None,
            },
            _ => return None,
        };
        Some(Self {
            canvas,
            ctx,
            mesh: Mesh::new(Bounds::default(), DEFAULT_NODE_COUNT, 0),
            palette,
            dpr: 1.0,
        })
    }

    /// Size the backing store for `dpr` and regenerate the nodes.
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64, seed: u64) {
        let bounds = Bounds::new(width_css, height_css);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width(backing_px(bounds.width, self.dpr));
        self.canvas.set_height(backing_px(bounds.height, self.dpr));
        self.mesh.reseed(bounds, seed);
    }

    /// Update (unless `reduced_motion`) and draw one frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self, time_ms: f64, reduced_motion: bool) -> Result<(), JsValue> {
        self.mesh.advance(reduced_motion);
        let scene = self.mesh.scene(time_ms, &self.palette);
        let bounds = self.mesh.bounds();
        render::draw(&self.ctx, &scene, bounds.width, bounds.height, self.dpr)
    }

    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32
}
