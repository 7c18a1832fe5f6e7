#![cfg(target_arch = "wasm32")]
use plexus_core::{FieldConfig, ParticleField};
use lifecycle::LoopGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod layout;
mod lifecycle;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        // Only the presentation follows the viewport; the point count stays
        // whatever it was at startup.
        dom::add_listener(&window, "resize", move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

/// Stop the loop when the page is hidden and start a fresh one when it comes
/// back from the back/forward cache.
fn wire_lifecycle(frame_ctx: Rc<RefCell<frame::FrameContext<'static>>>, gate: Rc<LoopGate>) {
    let Some(window) = web::window() else {
        return;
    };
    let hide_gate = gate.clone();
    dom::add_listener(&window, "pagehide", move || hide_gate.stop());

    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            log::info!("[frame] page restored, resuming loop");
            frame::start_loop(frame_ctx.clone(), gate.clone(), gate.resume());
        }
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref())
    {
        log::warn!("failed to attach 'pageshow' listener: {:?}", e);
    }
    on_show.forget();
}

fn build_field() -> anyhow::Result<ParticleField> {
    let (width, height) = dom::viewport_size().unwrap_or((0.0, 0.0));
    let config = FieldConfig::for_viewport(width);
    let field = ParticleField::new(config, rand::random())?;
    log::info!(
        "[field] {} points for viewport {}x{} ({} max connections)",
        field.len(),
        width,
        height,
        field.max_connections()
    );
    Ok(field)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plexus-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page enhancements do not depend on the background, wire them first so
    // they work even without WebGPU.
    events::wire_cursor(&document);
    events::wire_chatbot(&document);
    events::wire_mega_menus(&document);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let field = build_field()?;
    let gpu = frame::init_gpu(&canvas, &field).await;
    if gpu.is_none() {
        log::warn!("[gpu] unavailable, particle background disabled");
        return Ok(());
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        gpu,
        canvas,
        stats: frame::FrameStats::new(),
    }));
    let gate = Rc::new(LoopGate::new());
    wire_lifecycle(frame_ctx.clone(), gate.clone());
    frame::start_loop(frame_ctx, gate.clone(), gate.current());
    Ok(())
}
