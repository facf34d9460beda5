use orbit_core::{Layout, Preset, Viewport, LAYOUT_KEYS};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::REDUCED_MOTION_QUERY;

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// CSS size of the container, as the engine sees it.
pub fn container_viewport(container: &web::Element) -> Viewport {
    let rect = container.get_bounding_client_rect();
    Viewport::new(rect.width() as f32, rect.height() as f32)
}

/// Size both backing stores to `viewport * dpr` and reset their transforms so
/// drawing happens in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: Viewport,
) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let w_px = (f64::from(viewport.width) * dpr) as u32;
    let h_px = (f64::from(viewport.height) * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Preset from `data-shape`, then layout overrides from `data-<key>`
/// attributes. Bad values are logged and skipped.
pub fn read_config(container: &web::Element) -> (Preset, Layout) {
    let preset = match container.get_attribute("data-shape") {
        Some(name) => Preset::by_name(&name).unwrap_or_else(|e| {
            log::warn!("[config] {}; using default shape", e);
            Preset::default()
        }),
        None => Preset::default(),
    };
    let mut layout = preset.layout();
    for key in LAYOUT_KEYS {
        let Some(value) = container.get_attribute(&format!("data-{}", key)) else {
            continue;
        };
        if let Err(e) = layout.apply(key, &value) {
            log::warn!("[config] {}", e);
        }
    }
    (preset, layout)
}
