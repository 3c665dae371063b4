//! Timer plumbing: an awaitable delay plus owned handles for the loops that
//! keep running in the background.

use crate::core::tasks::Registry;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve after `ms` milliseconds. Without a window it resolves at once.
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .is_ok()
        });
        if scheduled != Some(true) {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}

/// A repeating `setInterval`. Dropping the handle clears the interval before
/// the callback it points at is freed.
pub struct Interval {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

pub fn every(ms: u32, tick: impl FnMut() + 'static) -> Option<Interval> {
    let window = web::window()?;
    let tick = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            ms as i32,
        )
        .map_err(|e| log::warn!("[timing] setInterval failed: {:?}", e))
        .ok()?;
    Some(Interval { id, _tick: tick })
}

/// A one-shot `setTimeout`. The callback is handed to JS, so the handle can
/// be dropped without affecting it.
#[derive(Clone, Copy, Debug)]
pub struct Timeout {
    id: i32,
}

pub fn after(ms: u32, f: impl FnOnce() + 'static) -> Option<Timeout> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms as i32)
        .map_err(|e| log::warn!("[timing] setTimeout failed: {:?}", e))
        .ok()?;
    Some(Timeout { id })
}

pub enum Task {
    Interval(Interval),
    Timeout(Timeout),
}

impl From<Interval> for Task {
    fn from(i: Interval) -> Self {
        log::debug!("[timing] interval #{} adopted", i.id);
        Task::Interval(i)
    }
}

impl From<Timeout> for Task {
    fn from(t: Timeout) -> Self {
        log::debug!("[timing] timeout #{} adopted", t.id);
        Task::Timeout(t)
    }
}

/// The page's background timers. Built with [`Registry::for_page`], so the
/// intervals it holds are never cleared.
pub type Background = Registry<Task>;
