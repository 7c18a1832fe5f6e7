use crate::constants::STATS_LOG_INTERVAL_SEC;
use crate::lifecycle::LoopGate;
use crate::render;
use instant::Instant;
use plexus_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rolling throughput numbers, logged every few seconds at debug level.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
    connections: usize,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            connections: 0,
        }
    }

    fn record(&mut self, active_connections: usize) {
        self.frames += 1;
        self.connections += active_connections;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= STATS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {:.1} connections/frame",
                self.frames as f32 / elapsed,
                self.connections as f32 / self.frames as f32
            );
            *self = Self::new();
        }
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FrameContext<'a> {
    pub field: ParticleField,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub stats: FrameStats,
}

impl<'a> FrameContext<'a> {
    /// One display refresh: advance the field once and draw its payload.
    pub fn frame(&mut self) {
        self.field.tick();
        let payload = self.field.frame();
        self.stats.record(payload.active_connection_count);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&payload) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field.len(), field.max_connections()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame()` from requestAnimationFrame while `generation` is the
/// gate's current one.
pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
    gate: Rc<LoopGate>,
    generation: u32,
) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !gate.is_current(generation) {
            log::info!("[frame] loop {} stopped", generation);
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
