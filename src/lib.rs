#![cfg(target_arch = "wasm32")]
use crate::core::{
    landmarks_from_flat, GestureDetector, Lifecycle, MorphConfig, ParticleMorph, CAPTURE_HEIGHT,
    CAPTURE_WIDTH, COLOR_BG, PINCH_THRESHOLD,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[inline]
fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!(
        "ember-hand starting (capture {}x{}, pinch < {})",
        CAPTURE_WIDTH,
        CAPTURE_HEIGHT,
        PINCH_THRESHOLD
    );
    if let Some(doc) = dom::window_document() {
        dom::set_page_background(&doc, COLOR_BG);
        overlay::set_loading(&doc, true);
        overlay::wire_enter_button(&doc);
    }
    Ok(())
}

/// Loading overlay: spinner while the hand tracker loads, enter button after.
#[wasm_bindgen]
pub fn set_overlay_loading(loading: bool) {
    if let Some(doc) = dom::window_document() {
        overlay::set_loading(&doc, loading);
    }
}

#[wasm_bindgen]
pub fn dismiss_overlay() {
    if let Some(doc) = dom::window_document() {
        overlay::hide(&doc);
    }
}

/// JS-facing handle to a running particle morph.
///
/// Created with `await EmberHand.initialize(canvas, width, height)`. The host
/// owns the canvas size and reports changes through `on_resize`. Every
/// method throws once `teardown()` has run.
#[wasm_bindgen]
pub struct EmberHand {
    lifecycle: Lifecycle,
    ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: Option<frame::FrameLoop>,
    fallback_listeners: Vec<dom::Listener>,
}

#[wasm_bindgen]
impl EmberHand {
    /// Build the particle buffers, acquire the WebGPU surface, and start the
    /// frame loop. Fails if the surface cannot be created.
    pub async fn initialize(
        canvas: web::HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<EmberHand, JsValue> {
        init(canvas, width, height).await.map_err(|e| {
            log::error!("init error: {:?}", e);
            js_err(e)
        })
    }

    pub fn update_anchor(&self, x_norm: f32, y_norm: f32) -> Result<(), JsValue> {
        self.ctx()?.borrow_mut().morph.update_anchor(x_norm, y_norm);
        Ok(())
    }

    pub fn trigger_explosion(&self) -> Result<(), JsValue> {
        self.ctx()?.borrow_mut().morph.trigger_explosion();
        Ok(())
    }

    pub fn trigger_assembly(&self) -> Result<(), JsValue> {
        self.ctx()?.borrow_mut().morph.trigger_assembly();
        Ok(())
    }

    /// Viewport changed: resize the canvas backing store and the camera.
    pub fn on_resize(&self, width: u32, height: u32) -> Result<(), JsValue> {
        let ctx = self.ctx()?;
        let mut c = ctx.borrow_mut();
        let (w_px, h_px) = dom::apply_viewport(&c.canvas, width, height);
        c.morph.on_resize(width, height);
        log::info!("[resize] {}x{} css, {}x{} px", width, height, w_px, h_px);
        Ok(())
    }

    /// Feed one frame of 21 hand landmarks (63 floats, x/y/z interleaved).
    pub fn push_landmarks(&self, landmarks: &[f32]) -> Result<(), JsValue> {
        let ctx = self.ctx()?;
        let points = match landmarks_from_flat(landmarks) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[gesture] {}", e);
                return Ok(());
            }
        };
        let mut c = ctx.borrow_mut();
        if let Some(update) = c.gestures.process(&points) {
            if let Some(ev) = update.event {
                log::info!("[gesture] {:?}", ev);
            }
            c.morph.apply_hand(update);
        }
        Ok(())
    }

    /// The tracker lost the hand; the next pose counts as a fresh gesture.
    pub fn hand_lost(&self) -> Result<(), JsValue> {
        self.ctx()?.borrow_mut().gestures.reset();
        Ok(())
    }

    /// Drive the cloud with mouse/touch and the keyboard instead of a camera.
    /// Calling it again while enabled does nothing.
    pub fn enable_pointer_fallback(&mut self) -> Result<(), JsValue> {
        if !self.lifecycle.enable_fallback_input().map_err(js_err)? {
            log::debug!("[input] pointer/keyboard fallback already enabled");
            return Ok(());
        }
        let canvas = self.ctx.borrow().canvas.clone();
        let weak = Rc::downgrade(&self.ctx);
        self.fallback_listeners = events::wire_pointer_fallback(&canvas, weak.clone());
        self.fallback_listeners.extend(events::wire_global_keydown(weak));
        log::info!("[input] pointer/keyboard fallback enabled");
        Ok(())
    }

    pub fn morph_factor(&self) -> Result<f32, JsValue> {
        Ok(self.ctx()?.borrow().morph.morph_factor())
    }

    /// Stop the frame loop, detach input listeners, and release GPU
    /// resources. The handle is dead afterwards.
    pub fn teardown(&mut self) -> Result<(), JsValue> {
        self.lifecycle.tear_down().map_err(js_err)?;
        if let Some(fl) = self.frame_loop.take() {
            fl.stop();
        }
        self.fallback_listeners.clear();
        self.ctx.borrow_mut().release_gpu();
        log::info!("[engine] torn down");
        Ok(())
    }
}

impl EmberHand {
    fn ctx(&self) -> Result<&Rc<RefCell<frame::FrameContext>>, JsValue> {
        self.lifecycle.ensure_running().map_err(js_err)?;
        Ok(&self.ctx)
    }
}

async fn init(canvas: web::HtmlCanvasElement, width: u32, height: u32) -> anyhow::Result<EmberHand> {
    // Size the backing store first so the surface is configured at full resolution
    let (w_px, h_px) = dom::apply_viewport(&canvas, width, height);

    let seed = rand::random::<u64>();
    let morph = ParticleMorph::new(MorphConfig::default(), width, height, seed)?;
    log::info!(
        "[engine] particles={} viewport={}x{} ({}x{} px) seed={:#x}",
        morph.particle_count(),
        width,
        height,
        w_px,
        h_px,
        seed
    );

    let gpu = render::GpuState::new(&canvas, morph.particle_count()).await?;

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        morph,
        gestures: GestureDetector::new(PINCH_THRESHOLD, constants::MIRROR_HAND_X),
        canvas,
        gpu: Some(gpu),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::FrameLoop::start(ctx.clone());

    Ok(EmberHand {
        lifecycle: Lifecycle::default(),
        ctx,
        frame_loop: Some(frame_loop),
        fallback_listeners: Vec::new(),
    })
}
