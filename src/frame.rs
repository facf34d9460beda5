use std::cell::RefCell;
use std::rc::Rc;

use orbit_core::{Engine, Tick};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::anchors::DomAnchors;
use crate::canvas::CanvasPainter;

pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub anchors: Rc<RefCell<DomAnchors>>,
    pub blob_layer: CanvasPainter,
    pub sphere_layer: CanvasPainter,
}

impl FrameContext {
    /// One animation tick at the browser's frame timestamp.
    pub fn frame(&mut self, time: f64) -> Tick {
        let mut anchors = self.anchors.borrow_mut();
        self.engine.borrow_mut().frame(
            time,
            &mut self.blob_layer,
            &mut self.sphere_layer,
            &mut *anchors,
        )
    }

    pub fn render_static(&mut self, time: f64) {
        let mut anchors = self.anchors.borrow_mut();
        self.engine.borrow_mut().render_static(
            time,
            &mut self.blob_layer,
            &mut self.sphere_layer,
            &mut *anchors,
        );
    }
}

fn request_frame(window: &web::Window, tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame. Stalled ticks draw nothing
/// but still reschedule.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
        if let Tick::Stalled { delta } = frame_ctx_tick.borrow_mut().frame(time) {
            log::debug!("[frame] skipped stalled frame ({:.0}ms)", delta);
        }
        if let Some(w) = web::window() {
            request_frame(&w, &tick_clone);
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        request_frame(&w, &tick);
    }
}
