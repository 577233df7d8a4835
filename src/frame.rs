use crate::core::{GestureDetector, ParticleMorph};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches. Owned behind `Rc<RefCell<_>>` by
/// the exported handle; input callbacks and the frame loop borrow it in turn
/// on the same thread.
pub struct FrameContext {
    pub morph: ParticleMorph,
    pub gestures: GestureDetector,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.morph.step(dt_sec);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let snapshot = self.morph.frame_snapshot();
            match g.render(&snapshot, self.morph.live_positions()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[frame] surface lost; reconfiguring");
                    g.reconfigure(self.canvas.width(), self.canvas.height());
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Drop GPU resources. Safe to call more than once.
    pub fn release_gpu(&mut self) {
        if self.gpu.take().is_some() {
            log::info!("[frame] GPU resources released");
        }
    }
}

/// requestAnimationFrame loop that can be stopped.
///
/// The tick body runs only while `alive` is set; `stop` clears it, cancels
/// the pending callback, and drops the closure.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let alive = Rc::new(Cell::new(true));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let alive_tick = alive.clone();
        let raf_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_tick.set(None);
            if !alive_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                raf_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            raf_id.set(request_frame(cb));
        }
        Self {
            alive,
            raf_id,
            tick,
        }
    }

    pub fn stop(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's self-reference
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
