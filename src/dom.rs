use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::core::color::hex_css;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An attached DOM event listener. Dropping it removes the listener and
/// frees the closure.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    /// Keep the listener for the lifetime of the page.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Listener> {
    let el = document.get_element_by_id(element_id)?;
    Listener::attach(&el, "click", move |_| handler())
}

/// Paint the page behind the transparent canvas.
pub fn set_page_background(document: &web::Document, hex: u32) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("background-color", &hex_css(hex));
    }
}

/// Device pixel ratio clamped to the render surface limit.
#[inline]
pub fn capped_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
}

/// Size the canvas to `width` x `height` CSS pixels and its backing store to
/// that times the capped pixel ratio. Returns the backing-store size.
pub fn apply_viewport(canvas: &web::HtmlCanvasElement, width: u32, height: u32) -> (u32, u32) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{width}px"));
    _ = style.set_property("height", &format!("{height}px"));
    let dpr = capped_pixel_ratio();
    let w_px = ((width as f64) * dpr) as u32;
    let h_px = ((height as f64) * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (canvas.width(), canvas.height())
}
