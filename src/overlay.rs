use crate::constants::{OVERLAY_ENTER_ID, OVERLAY_FADE_SEC, OVERLAY_ID, OVERLAY_SPINNER_ID};
use crate::core::OverlayState;
use crate::dom;
use std::cell::Cell;
use web_sys as web;

thread_local! {
    static STATE: Cell<OverlayState> = Cell::new(OverlayState::default());
}

fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1("hidden");
    } else {
        _ = cl.remove_1("hidden");
    }
}

// Push the state into the DOM. Hiding fades out; the page's `.hidden` class
// takes over once the transition settles.
fn render(document: &web::Document, state: OverlayState) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        set_hidden(&el, !state.is_visible());
        if state.is_visible() {
            _ = el.set_attribute("style", "");
        } else {
            _ = el.set_attribute(
                "style",
                &format!(
                    "opacity:0;pointer-events:none;transition:opacity {OVERLAY_FADE_SEC}s ease-in-out"
                ),
            );
        }
    }
    if let Some(spinner) = document.get_element_by_id(OVERLAY_SPINNER_ID) {
        set_hidden(&spinner, !state.spinner_visible());
    }
    if let Some(enter) = document.get_element_by_id(OVERLAY_ENTER_ID) {
        set_hidden(&enter, !state.enter_visible());
    }
}

fn update(document: &web::Document, f: impl FnOnce(&mut OverlayState)) -> OverlayState {
    let state = STATE.with(|cell| {
        let mut s = cell.get();
        f(&mut s);
        cell.set(s);
        s
    });
    render(document, state);
    state
}

/// Spinner while the hand tracker warms up, enter button once it is ready.
pub fn set_loading(document: &web::Document, loading: bool) {
    update(document, |s| s.set_loading(loading));
}

pub fn hide(document: &web::Document) {
    update(document, |s| s.dismiss());
}

pub fn toggle(document: &web::Document) {
    update(document, |s| s.toggle());
}

/// Dismiss the overlay when the enter button is clicked. The button lives as
/// long as the page, so the listener does too.
pub fn wire_enter_button(document: &web::Document) {
    let doc = document.clone();
    let listener = dom::add_click_listener(document, OVERLAY_ENTER_ID, move || {
        let mut entered = false;
        update(&doc, |s| entered = s.enter());
        if entered {
            log::info!("[overlay] entered");
        }
    });
    if let Some(l) = listener {
        l.forget();
    }
}
