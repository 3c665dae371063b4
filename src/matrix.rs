use crate::constants::*;
use crate::core::{Rain, Theme};
use crate::dom;
use crate::timing::{self, Interval};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Start the falling-glyph background on `#matrix`. Runs until the returned
/// handle is dropped.
pub fn start(document: &web::Document) -> Option<Interval> {
    let canvas = dom::typed_by_id::<web::HtmlCanvasElement>(document, ID_MATRIX_CANVAS)?;
    let ctx = dom::context_2d(&canvas)?;

    let (width, height) = dom::fit_canvas_to_viewport(&canvas);
    let rain = Rc::new(RefCell::new(Rain::new(width, height)));

    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        let rain_resize = rain.clone();
        dom::add_listener(&window, "resize", move |_: web::Event| {
            let (w, h) = dom::fit_canvas_to_viewport(&canvas_resize);
            rain_resize.borrow_mut().resize(w, h);
        });
    }

    let root = document.document_element();
    let font = format!("{}px monospace", RAIN_FONT_PX);
    let mut rng = rand::thread_rng();
    timing::every(RAIN_TICK_MS, move || {
        let w = canvas.width() as f64;
        let h = canvas.height() as f64;
        ctx.set_fill_style_str(RAIN_TRAIL_FILL);
        ctx.fill_rect(0.0, 0.0, w, h);

        // The theme can flip at any time, so read it every tick.
        let theme = Theme::from_stored(
            root.as_ref()
                .and_then(|el| el.get_attribute("data-theme"))
                .as_deref(),
        );
        ctx.set_fill_style_str(theme.rain_color());
        ctx.set_font(&font);

        let mut buf = [0u8; 4];
        for glyph in rain.borrow_mut().tick(&mut rng) {
            _ = ctx.fill_text(glyph.ch.encode_utf8(&mut buf), glyph.x, glyph.y);
        }
    })
}
