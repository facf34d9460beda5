use std::cell::RefCell;
use std::rc::Rc;

use orbit_core::{Engine, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::anchors::DomAnchors;
use crate::dom;
use crate::svg;

#[derive(Clone)]
pub struct ResizeWiring {
    pub container: web::Element,
    pub canvases: Vec<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
    pub svg: Option<web::SvgsvgElement>,
    pub engine: Rc<RefCell<Engine>>,
    pub anchors: Rc<RefCell<DomAnchors>>,
}

impl ResizeWiring {
    /// Measure the container and push the new size everywhere that depends
    /// on it.
    pub fn apply(&self) -> Viewport {
        let viewport = dom::container_viewport(&self.container);
        for (canvas, ctx) in &self.canvases {
            dom::sync_canvas_backing_size(canvas, ctx, viewport);
        }
        let layout = {
            let mut engine = self.engine.borrow_mut();
            engine.resize(viewport);
            engine.layout.clone()
        };
        self.anchors.borrow_mut().set_viewport(viewport);
        if let Some(svg) = &self.svg {
            svg::update_connector_paths(svg, viewport, &layout);
        }
        viewport
    }
}

/// Re-apply sizing on window resize, then run `after` (used to redraw the
/// still frame when animation is off).
pub fn wire_resize(w: ResizeWiring, mut after: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || {
        let viewport = w.apply();
        log::debug!("[resize] {}x{}", viewport.width, viewport.height);
        after();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
