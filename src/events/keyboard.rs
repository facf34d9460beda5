use std::cell::RefCell;
use std::rc::Rc;

use orbit_core::Engine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Points,
    Edges,
}

#[inline]
pub fn toggle_for_key(key: &str) -> Option<Toggle> {
    match key {
        "p" | "P" => Some(Toggle::Points),
        "e" | "E" => Some(Toggle::Edges),
        _ => None,
    }
}

fn is_typing(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

pub fn handle_keydown(ev: &web::KeyboardEvent, engine: &Rc<RefCell<Engine>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || is_typing(ev) {
        return;
    }
    let Some(toggle) = toggle_for_key(&ev.key()) else {
        return;
    };
    let mut engine = engine.borrow_mut();
    match toggle {
        Toggle::Points => {
            let on = engine.toggle_points();
            log::info!("[keys] points {}", if on { "on" } else { "off" });
        }
        Toggle::Edges => {
            let on = engine.toggle_edges();
            log::info!("[keys] edges {}", if on { "on" } else { "off" });
        }
    }
}

pub fn wire_toggle_keys(engine: Rc<RefCell<Engine>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &engine);
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
