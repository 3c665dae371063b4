use crate::core::Typewriter;
use crate::timing;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

#[inline]
pub fn by_selector(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Look up an element and cast it, treating a wrong element type like a
/// missing one.
pub fn typed_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    by_id(document, id).and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    add_listener(el, "click", move |_: web::MouseEvent| handler());
}

/// Current viewport size in CSS pixels.
pub fn viewport() -> (f64, f64) {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

/// Size the canvas backing store to the viewport and return the new size.
pub fn fit_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = viewport();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Append `text` to `el` one character per `interval_ms`, after a newline if
/// the element already has content. Resolves once the last character lands.
pub async fn type_into(el: &web::Element, text: &str, interval_ms: u32) {
    let existing = el.text_content().unwrap_or_default();
    let mut content = existing.clone();
    for ch in Typewriter::new(&existing, text) {
        content.push(ch);
        el.set_text_content(Some(&content));
        timing::sleep(interval_ms).await;
    }
}
