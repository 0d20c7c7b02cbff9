//! Animated particle mesh behind the hero section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `<canvas>` and a `particles::engine::Engine`. On mount the engine
//! is sized to the canvas and a self-scheduling animation-frame loop starts.
//! A window `resize` listener re-sizes the backing store and regenerates the
//! nodes.
//!
//! DESIGN
//! ======
//! Teardown flips an alive flag; the next frame callback sees it, drops its
//! own closure and stops scheduling. The resize listener is removed in the
//! same cleanup. No 2D context means no animation and nothing else.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use particles::color::Palette;
#[cfg(feature = "hydrate")]
use particles::engine::Engine;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::motion::prefers_reduced_motion;

/// Full-bleed canvas drawing the node mesh.
///
/// `primary` and `secondary` are `#rgb`/`#rrggbb` theme colors; a missing or
/// invalid value keeps that color's default (cyan primary, violet secondary).
#[component]
pub fn ParticleBackground(
    #[prop(optional, into)] primary: Option<String>,
    #[prop(optional, into)] secondary: Option<String>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let palette = Palette::from_optional_hex(primary.as_deref(), secondary.as_deref());
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let Some(engine) = Engine::new(canvas.clone(), palette) else {
                log::debug!("particle background: no 2d context");
                return;
            };
            let engine = Rc::new(RefCell::new(engine));
            let resizes = Rc::new(Cell::new(0_u64));
            fit_to_canvas(&engine, &canvas, 0);

            let resize_handle = {
                let engine = Rc::clone(&engine);
                window_event_listener(leptos::ev::resize, move |_| {
                    resizes.set(resizes.get() + 1);
                    fit_to_canvas(&engine, &canvas, resizes.get());
                })
            };

            let alive = Arc::new(AtomicBool::new(true));
            start_frame_loop(engine, Arc::clone(&alive), prefers_reduced_motion());
            on_cleanup(move || {
                alive.store(false, Ordering::Relaxed);
                resize_handle.remove();
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (primary, secondary);
    }

    view! { <canvas class="particle-background" node_ref=canvas_ref aria-hidden="true"></canvas> }
}

#[cfg(feature = "hydrate")]
fn fit_to_canvas(engine: &Rc<RefCell<Engine>>, canvas: &web_sys::HtmlCanvasElement, resizes: u64) {
    let width = f64::from(canvas.client_width().max(1));
    let height = f64::from(canvas.client_height().max(1));
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = (js_sys::Date::now() as u64) ^ resizes.rotate_left(32);
    engine.borrow_mut().resize(width, height, dpr, seed);
}

#[cfg(feature = "hydrate")]
fn schedule(cb: &Closure<dyn FnMut(f64)>) -> bool {
    web_sys::window().is_some_and(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
}

#[cfg(feature = "hydrate")]
fn start_frame_loop(engine: Rc<RefCell<Engine>>, alive: Arc<AtomicBool>, reduced_motion: bool) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |time_ms: f64| {
        if !alive.load(Ordering::Relaxed) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        if engine.borrow_mut().frame(time_ms, reduced_motion).is_err() {
            log::debug!("particle background: frame skipped");
        }
        let scheduled = holder_for_cb.borrow().as_ref().is_some_and(schedule);
        if !scheduled {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if schedule(&cb) {
        *holder.borrow_mut() = Some(cb);
    }
}
