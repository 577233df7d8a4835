use crate::core::{action_for_key, KeyAction};
use crate::dom::Listener;
use crate::frame::FrameContext;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, ctx: &Weak<RefCell<FrameContext>>) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::Explode | KeyAction::Assemble => {
            let Some(ctx) = ctx.upgrade() else {
                return;
            };
            let mut c = ctx.borrow_mut();
            if action == KeyAction::Explode {
                c.morph.trigger_explosion();
            } else {
                c.morph.trigger_assembly();
            }
            log::info!("[key] {:?}", action);
        }
        KeyAction::ToggleOverlay => {
            if let Some(doc) = crate::dom::window_document() {
                overlay::toggle(&doc);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(ctx: Weak<RefCell<FrameContext>>) -> Option<Listener> {
    let window = web::window()?;
    Listener::attach(&window, "keydown", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(ev, &ctx);
        }
    })
}
