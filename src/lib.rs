#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use orbit_core::Engine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod anchors;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod startup;
mod svg;

use anchors::DomAnchors;
use canvas::CanvasPainter;
use constants::{BLOB_CANVAS_ID, CONTAINER_SELECTOR, GLOBE_CANVAS_ID};
use events::ResizeWiring;
use frame::FrameContext;
use startup::Startup;

struct Layer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

fn layer(document: &web::Document, id: &str) -> anyhow::Result<Layer> {
    let canvas =
        dom::canvas_by_id(document, id).ok_or_else(|| anyhow::anyhow!("no #{} canvas", id))?;
    let ctx = dom::context_2d(&canvas).ok_or_else(|| anyhow::anyhow!("no 2d context on #{}", id))?;
    Ok(Layer { canvas, ctx })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .query_selector(CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no {} container", CONTAINER_SELECTOR))?;
    let blob = layer(&document, BLOB_CANVAS_ID)?;
    let globe = layer(&document, GLOBE_CANVAS_ID)?;
    let svg = svg::hero_svg(&document);

    let (preset, layout) = dom::read_config(&container);
    let viewport = dom::container_viewport(&container);
    log::info!(
        "[init] {:?} {}x{} streams={}",
        preset.kind,
        viewport.width,
        viewport.height,
        layout.enable_streams
    );
    let engine = Rc::new(RefCell::new(Engine::with_rng(
        viewport,
        layout,
        preset,
        StdRng::from_entropy(),
    )));
    let anchors = Rc::new(RefCell::new(DomAnchors::collect(
        &container,
        svg.clone(),
        viewport,
    )));

    let resize = ResizeWiring {
        container: container.clone(),
        canvases: vec![
            (blob.canvas.clone(), blob.ctx.clone()),
            (globe.canvas.clone(), globe.ctx.clone()),
        ],
        svg: svg.clone(),
        engine: engine.clone(),
        anchors: anchors.clone(),
    };
    resize.apply();

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        engine: engine.clone(),
        anchors: anchors.clone(),
        blob_layer: CanvasPainter::new(blob.ctx),
        sphere_layer: CanvasPainter::new(globe.ctx),
    }));

    events::wire_pointer(&container, engine.clone());
    events::wire_toggle_keys(engine.clone());

    let startup = Startup::for_motion(dom::prefers_reduced_motion());
    if let Some(svg) = &svg {
        if startup.randomize_timings {
            svg::randomize_motion_timings(svg, &mut rand::thread_rng());
        }
        if startup.wire_markers {
            svg::wire_attach_on_repeat(svg, &engine, &anchors);
        }
    }

    if !startup.run_loop {
        log::info!("[init] reduced motion: drawing a still frame");
        frame_ctx.borrow_mut().render_static(instant::now());
        let still = frame_ctx.clone();
        events::wire_resize(resize, move || {
            still.borrow_mut().render_static(instant::now());
        });
        return Ok(());
    }

    events::wire_resize(resize, || {});
    frame::start_loop(frame_ctx);
    Ok(())
}
