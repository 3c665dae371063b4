use crate::constants::{TIP_FADE_CLASS, TIP_INTERVAL_MS};
use crate::core::TipRotation;
use crate::dom;
use crate::timing::{self, Interval};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn show_next(tip_text: &web::Element, rotation: &RefCell<TipRotation>) {
    let Some(tip) = rotation.borrow_mut().advance() else {
        return;
    };
    dom::set_text(tip_text, tip);
    // Drop the class and force a reflow so the fade animation restarts.
    dom::remove_class(tip_text, TIP_FADE_CLASS);
    if let Some(html) = tip_text.dyn_ref::<web::HtmlElement>() {
        _ = html.offset_width();
    }
    dom::add_class(tip_text, TIP_FADE_CLASS);
}

/// Show the current tip immediately, then rotate on a fixed period.
pub fn start(tip_text: web::Element, rotation: Rc<RefCell<TipRotation>>) -> Option<Interval> {
    show_next(&tip_text, &rotation);
    timing::every(TIP_INTERVAL_MS, move || show_next(&tip_text, &rotation))
}
