use crate::controls;
use crate::core::{Mode, Theme};
use web_sys as web;

/// Everything read from the environment at start-up.
#[derive(Clone, Copy, Debug)]
pub struct PageConfig {
    pub mode: Mode,
    pub theme: Theme,
}

impl PageConfig {
    pub fn from_window(window: &web::Window) -> Self {
        let search = window.location().search().unwrap_or_default();
        let mode_param = web::UrlSearchParams::new_with_str(&search)
            .ok()
            .and_then(|params| params.get(Mode::QUERY_KEY));
        Self {
            mode: Mode::from_param(mode_param.as_deref()),
            theme: controls::stored_theme(window),
        }
    }
}
