//! Connector paths and marker animations in the hero SVG.

use std::cell::RefCell;
use std::rc::Rc;

use orbit_core::{
    begin_offset, hero_fans, parse_duration_secs, sorted_rows, synthesize, write_connectors,
    Engine, Layout, PathSink, ViewBox, Viewport, INPUT_PATHS, OUTPUT_PATHS,
};
use rand::Rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::anchors::{self, DomAnchors};
use crate::constants::{
    ATTACH_SIZE_INPUT, ATTACH_SIZE_OUTPUT, DEFAULT_MOTION_DUR_SECS, HERO_SVG_SELECTOR,
    LEFT_ROW_SELECTOR, RIGHT_ROW_SELECTOR,
};
use crate::dom;

pub fn hero_svg(document: &web::Document) -> Option<web::SvgsvgElement> {
    document
        .query_selector(HERO_SVG_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::SvgsvgElement>().ok())
}

fn select_all(svg: &web::SvgsvgElement, selector: &str) -> Vec<web::Element> {
    svg.query_selector_all(selector)
        .map(dom::elements)
        .unwrap_or_default()
}

/// Writes path data onto elements of one SVG, looked up by id.
pub struct SvgPaths<'a> {
    svg: &'a web::SvgsvgElement,
}

impl<'a> SvgPaths<'a> {
    pub fn new(svg: &'a web::SvgsvgElement) -> Self {
        Self { svg }
    }
}

impl PathSink for SvgPaths<'_> {
    fn set_path(&mut self, id: &str, d: &str) -> bool {
        match self.svg.query_selector(&format!("#{}", id)) {
            Ok(Some(el)) => el.set_attribute("d", d).is_ok(),
            _ => false,
        }
    }
}

fn row_ys(svg: &web::SvgsvgElement, selector: &str) -> Vec<f32> {
    sorted_rows(
        select_all(svg, selector)
            .iter()
            .filter_map(|el| el.get_attribute("y")?.trim().parse::<f32>().ok()),
    )
}

/// Recompute both connector fans for the current viewport.
pub fn update_connector_paths(svg: &web::SvgsvgElement, viewport: Viewport, layout: &Layout) {
    let viewbox = anchors::view_box(svg).unwrap_or(ViewBox::new(0.0, 0.0, 0.0, 0.0));
    let (left, right) = hero_fans(
        row_ys(svg, LEFT_ROW_SELECTOR),
        row_ys(svg, RIGHT_ROW_SELECTOR),
        viewport,
        viewbox,
        layout,
    );
    let mut sink = SvgPaths::new(svg);
    let written = write_connectors(&mut sink, INPUT_PATHS, &synthesize(&left))
        + write_connectors(&mut sink, OUTPUT_PATHS, &synthesize(&right));
    log::debug!("[svg] {} connector paths written", written);
}

/// Start every marker at a random point in its cycle. Sibling `animate`
/// elements share the marker's offset.
pub fn randomize_motion_timings<R: Rng + ?Sized>(svg: &web::SvgsvgElement, rng: &mut R) {
    for motion in select_all(svg, "animateMotion") {
        let duration = motion
            .get_attribute("dur")
            .as_deref()
            .and_then(parse_duration_secs)
            .unwrap_or(DEFAULT_MOTION_DUR_SECS);
        let begin = begin_offset(duration, rng);
        let _ = motion.set_attribute("begin", &begin);
        let Some(parent) = motion.parent_element() else {
            continue;
        };
        for anim in parent
            .query_selector_all("animate")
            .map(dom::elements)
            .unwrap_or_default()
        {
            let _ = anim.set_attribute("begin", &begin);
        }
    }
}

/// Path a marker follows, from its `mpath` child.
fn motion_path_id(motion: &web::Element) -> Option<String> {
    let mpath = motion.query_selector("mpath").ok().flatten()?;
    let href = mpath
        .get_attribute("href")
        .or_else(|| mpath.get_attribute("xlink:href"))?;
    Some(href.trim_start_matches('#').to_string())
}

fn attach_size(motion: &web::Element, path_id: &str) -> f32 {
    if let Some(size) = motion
        .get_attribute("data-attach-size")
        .and_then(|v| v.trim().parse::<f32>().ok())
    {
        return size;
    }
    if path_id.starts_with(OUTPUT_PATHS.prefix) {
        ATTACH_SIZE_OUTPUT
    } else {
        ATTACH_SIZE_INPUT
    }
}

/// Each time a marker finishes a lap, pin a fading point where its path ends.
pub fn wire_attach_on_repeat(
    svg: &web::SvgsvgElement,
    engine: &Rc<RefCell<Engine>>,
    anchors: &Rc<RefCell<DomAnchors>>,
) {
    let mut wired = 0;
    for motion in select_all(svg, "animateMotion") {
        let Some(path_id) = motion_path_id(&motion) else {
            continue;
        };
        let size = attach_size(&motion, &path_id);
        let engine = engine.clone();
        let anchors = anchors.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let anchors = anchors.borrow();
            engine
                .borrow_mut()
                .spawn_attached(&*anchors, &path_id, size, instant::now());
        }) as Box<dyn FnMut(_)>);
        let _ = motion.add_event_listener_with_callback("repeatEvent", closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    }
    log::info!("[svg] {} markers wired", wired);
}
