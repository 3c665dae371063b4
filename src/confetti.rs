use crate::constants::{CLASS_ACTIVE, ID_CONFETTI_CANVAS};
use crate::core::Burst;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawn one confetti batch over the whole viewport and animate it on
/// `requestAnimationFrame` until its frame budget runs out.
pub fn launch(document: &web::Document) {
    let Some(canvas) = dom::typed_by_id::<web::HtmlCanvasElement>(document, ID_CONFETTI_CANVAS)
    else {
        return;
    };
    let Some(ctx) = dom::context_2d(&canvas) else {
        return;
    };
    dom::add_class(&canvas, CLASS_ACTIVE);
    let (width, height) = dom::fit_canvas_to_viewport(&canvas);
    let mut burst = Burst::spawn(&mut rand::thread_rng(), width as f32, height as f32);
    log::debug!("[confetti] {} particles", burst.particles.len());

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.clear_rect(0.0, 0.0, width, height);
        if let Some(alpha) = burst.step() {
            draw(&ctx, &burst, alpha);
        }
        if burst.is_finished() {
            dom::remove_class(&canvas, CLASS_ACTIVE);
            // Releases this closure; nothing re-enters it afterwards.
            _ = tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn draw(ctx: &web::CanvasRenderingContext2d, burst: &Burst, alpha: f32) {
    for p in &burst.particles {
        ctx.save();
        _ = ctx.translate(p.position.x as f64, p.position.y as f64);
        _ = ctx.rotate(p.rotation_rad());
        ctx.set_fill_style_str(p.color);
        ctx.set_global_alpha(alpha as f64);
        let size = p.size as f64;
        ctx.fill_rect(-size / 2.0, -size / 2.0, size, size);
        ctx.restore();
    }
}
