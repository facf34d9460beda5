use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use orbit_core::Engine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to the element's top-left corner, in CSS px.
#[inline]
fn local_position(ev: &web::MouseEvent, el: &web::Element) -> (Vec2, f32, f32) {
    let rect = el.get_bounding_client_rect();
    let local = Vec2::new(
        (f64::from(ev.client_x()) - rect.left()) as f32,
        (f64::from(ev.client_y()) - rect.top()) as f32,
    );
    (local, rect.width() as f32, rect.height() as f32)
}

/// Parallax target follows the pointer while it is over `container` and
/// eases back to rest when it leaves.
pub fn wire_pointer(container: &web::Element, engine: Rc<RefCell<Engine>>) {
    let el = container.clone();
    let engine_move = engine.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (local, width, height) = local_position(&ev, &el);
        engine_move.borrow_mut().pointer_mut().aim(local, width, height);
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let on_leave = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        engine.borrow_mut().pointer_mut().release();
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}
