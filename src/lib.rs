pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod carousel;
#[cfg(target_arch = "wasm32")]
mod config;
#[cfg(target_arch = "wasm32")]
mod confetti;
#[cfg(target_arch = "wasm32")]
mod controls;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod matrix;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod timing;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::audio::{AssetCue, SharedContext, SynthCue};
    use crate::config::PageConfig;
    use crate::constants::{BEEP_ASSET, BEEP_ASSET_VOLUME};
    use crate::core::{AudioCue, MuteFlag, Sequencer};
    use crate::page::Page;
    use crate::{controls, matrix};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("cyber-firewall starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let config = PageConfig::from_window(&window);
        log::info!("[config] mode={:?} theme={}", config.mode, config.theme.as_str());

        // Audio: recorded asset first, synthesized blip second, silence last.
        let mute = MuteFlag::default();
        let audio = SharedContext::default();
        let cue = AudioCue::new(mute.clone())
            .with_strategy(AssetCue::new(BEEP_ASSET, BEEP_ASSET_VOLUME))
            .with_strategy(SynthCue::new(audio.clone()));

        let mut page = Page::bind(&document, cue)?;

        controls::init_theme(&window, &document, config.theme);
        page.background().adopt("matrix", matrix::start(&document));
        controls::init_profile_image(&document);
        controls::init_mute(&document, mute, audio.clone());
        page.apply_branding(config.mode);

        let activation = controls::wire_access(page.access_button(), audio);
        let mut sequencer = Sequencer::new(config.mode);
        sequencer
            .run(&mut page, async move {
                if let Err(e) = activation.await {
                    log::warn!("[flow] activation promise rejected: {:?}", e);
                }
            })
            .await;
        log::info!(
            "[flow] finished; background tasks still running: {:?}",
            page.background().names()
        );
        Ok(())
    }
}
