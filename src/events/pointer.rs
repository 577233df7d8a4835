use crate::core::canvas_uv;
use crate::dom::Listener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Normalized [0, 1] position of a pointer event within the canvas box.
#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    canvas_uv(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Stand-in for the hand tracker: move steers the anchor, press explodes,
/// release reassembles. Dropping the returned listeners detaches them.
pub fn wire_pointer_fallback(
    canvas: &web::HtmlCanvasElement,
    ctx: Weak<RefCell<FrameContext>>,
) -> Vec<Listener> {
    [
        wire_pointermove(canvas, ctx.clone()),
        wire_pointerdown(canvas, ctx.clone()),
        wire_pointerup(ctx),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    ctx: Weak<RefCell<FrameContext>>,
) -> Option<Listener> {
    let canvas_for_uv = canvas.clone();
    Listener::attach(canvas, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        let [u, v] = pointer_canvas_uv(ev, &canvas_for_uv);
        if u.is_finite() && v.is_finite() {
            ctx.borrow_mut().morph.update_anchor(u, v);
        }
    })
}

fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    ctx: Weak<RefCell<FrameContext>>,
) -> Option<Listener> {
    let canvas_for_capture = canvas.clone();
    Listener::attach(canvas, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        ctx.borrow_mut().morph.trigger_explosion();
        log::info!("[pointer] explode");
        _ = canvas_for_capture.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

// Release anywhere on the page counts, not just over the canvas.
fn wire_pointerup(ctx: Weak<RefCell<FrameContext>>) -> Option<Listener> {
    let window = web::window()?;
    Listener::attach(&window, "pointerup", move |ev: web::Event| {
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        ctx.borrow_mut().morph.trigger_assembly();
        log::info!("[pointer] assemble");
        ev.prevent_default();
    })
}
