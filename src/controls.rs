//! User-facing toggles and the one-shot access control.

use crate::audio::SharedContext;
use crate::constants::*;
use crate::core::cue::is_mute_key;
use crate::core::{AccessGate, Fallback, FallbackChain, MuteFlag, Theme};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// ---------------- Theme ----------------

pub fn stored_theme(window: &web::Window) -> Theme {
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn apply_theme(window: &web::Window, document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(icon) = dom::by_selector(document, SEL_THEME_ICON) {
        dom::set_text(&icon, theme.toggle_icon());
    }
    if let Some(meta) = dom::typed_by_id::<web::HtmlMetaElement>(document, ID_THEME_COLOR_META) {
        meta.set_content(theme.meta_color());
    }
    match window.local_storage() {
        Ok(Some(storage)) => {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                log::warn!("[theme] could not persist: {:?}", e);
            }
        }
        _ => log::debug!("[theme] no local storage"),
    }
}

pub fn init_theme(window: &web::Window, document: &web::Document, initial: Theme) {
    let current = Rc::new(Cell::new(initial));
    apply_theme(window, document, initial);
    let Some(button) = dom::by_id(document, ID_THEME_BUTTON) else {
        return;
    };
    let window = window.clone();
    let document = document.clone();
    dom::add_click_listener(&button, move || {
        let next = current.get().toggled();
        current.set(next);
        apply_theme(&window, &document, next);
        log::info!("[theme] {}", next.as_str());
    });
}

// ---------------- Mute ----------------

fn render_mute(button: &web::Element, muted: bool) {
    _ = button.class_list().toggle_with_force(CLASS_MUTED, muted);
    if let Ok(Some(icon)) = button.query_selector(SEL_MUTE_ICON) {
        dom::set_text(&icon, if muted { "🔇" } else { "🔊" });
    }
}

/// Mute button plus the `m` shortcut. Without the button neither is wired.
pub fn init_mute(document: &web::Document, mute: MuteFlag, audio: SharedContext) {
    let Some(button) = dom::by_id(document, ID_MUTE_BUTTON) else {
        return;
    };

    let click_mute = mute.clone();
    let click_button = button.clone();
    dom::add_click_listener(&button, move || {
        audio.unlock();
        let muted = click_mute.toggle();
        render_mute(&click_button, muted);
        log::info!("[audio] muted={}", muted);
    });

    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        if is_mute_key(&ev.key()) {
            let muted = mute.toggle();
            render_mute(&button, muted);
            log::info!("[audio] muted={}", muted);
        }
    });
}

// ---------------- Profile image ----------------

/// Walk the candidate list on every load error; hide the image at the end.
pub fn init_profile_image(document: &web::Document) {
    let Some(img) = dom::typed_by_id::<web::HtmlImageElement>(document, ID_PROFILE_IMAGE) else {
        return;
    };
    let chain = RefCell::new(FallbackChain::new(&PROFILE_IMAGES));
    let target = img.clone();
    let on_error = Closure::wrap(Box::new(move || match chain.borrow_mut().on_error() {
        Fallback::Try(src) => {
            log::debug!("[assets] profile image -> {}", src);
            target.set_src(src);
        }
        Fallback::Exhausted => {
            log::warn!("[assets] no profile image could be loaded");
            _ = target.style().set_property("display", "none");
        }
    }) as Box<dyn FnMut()>);
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
}

// ---------------- Access control ----------------

/// Wire the access button and return a future that resolves on its first
/// activation. The button is disabled in the same handler, so later clicks
/// only unlock audio.
pub fn wire_access(button: &web::HtmlButtonElement, audio: SharedContext) -> JsFuture {
    let mut resolve_slot: Option<js_sys::Function> = None;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let gate = Rc::new(RefCell::new(AccessGate::default()));
    let click_button = button.clone();
    let click_audio = audio.clone();
    dom::add_click_listener(button, move || {
        click_audio.unlock();
        if click_button.disabled() || !gate.borrow_mut().activate() {
            return;
        }
        click_button.set_disabled(true);
        log::info!("[flow] access requested");
        if let Some(resolve) = &resolve_slot {
            _ = resolve.call0(&JsValue::NULL);
        }
    });

    let touch = Closure::wrap(Box::new(move || audio.unlock()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = button.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        touch.as_ref().unchecked_ref(),
        &opts,
    );
    touch.forget();

    JsFuture::from(promise)
}
