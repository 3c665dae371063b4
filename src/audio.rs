use crate::constants::*;
use crate::core::{CueError, CueFuture, CueStrategy};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> String {
    format!("{:?}", e)
}

/// Lazily created `AudioContext` shared by the unlock gesture and the synth
/// fallback.
#[derive(Clone, Default)]
pub struct SharedContext(Rc<RefCell<Option<web::AudioContext>>>);

impl SharedContext {
    pub fn get_or_create(&self) -> Result<web::AudioContext, CueError> {
        if let Some(ctx) = self.0.borrow().as_ref() {
            return Ok(ctx.clone());
        }
        let ctx = web::AudioContext::new().map_err(|e| CueError::Unsupported(js_err(e)))?;
        *self.0.borrow_mut() = Some(ctx.clone());
        Ok(ctx)
    }

    /// Called from a user gesture: create and resume the context and play a
    /// one-sample silent buffer so later sounds are allowed. Only the first
    /// call does anything.
    pub fn unlock(&self) {
        if self.0.borrow().is_some() {
            return;
        }
        let ctx = match self.get_or_create() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::debug!("[audio] unlock skipped: {}", e);
                return;
            }
        };
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        let played = ctx
            .create_buffer(1, 1, 22050.0)
            .and_then(|buf| {
                let src = ctx.create_buffer_source()?;
                src.set_buffer(Some(&buf));
                src.connect_with_audio_node(&ctx.destination())?;
                src.start()
            });
        if let Err(e) = played {
            log::debug!("[audio] silent unlock buffer failed: {:?}", e);
        }
    }
}

/// The recorded success sound.
pub struct AssetCue {
    src: &'static str,
    volume: f64,
}

impl AssetCue {
    pub fn new(src: &'static str, volume: f64) -> Self {
        Self { src, volume }
    }
}

impl CueStrategy for AssetCue {
    fn name(&self) -> &'static str {
        "asset"
    }

    fn play(&self) -> CueFuture {
        let src = self.src;
        let volume = self.volume;
        Box::pin(async move {
            let el = web::HtmlAudioElement::new_with_src(src)
                .map_err(|e| CueError::Unsupported(js_err(e)))?;
            el.set_volume(volume);
            let started = el.play().map_err(|e| CueError::Blocked(js_err(e)))?;
            JsFuture::from(started)
                .await
                .map_err(|e| CueError::Blocked(js_err(e)))?;
            Ok(())
        })
    }
}

/// A short decaying sine blip, for when the asset is missing or autoplay is
/// refused.
pub struct SynthCue {
    ctx: SharedContext,
}

impl SynthCue {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }
}

impl CueStrategy for SynthCue {
    fn name(&self) -> &'static str {
        "synth"
    }

    fn play(&self) -> CueFuture {
        let shared = self.ctx.clone();
        Box::pin(async move {
            let ctx = shared.get_or_create()?;
            if ctx.state() == web::AudioContextState::Suspended {
                let resumed = ctx.resume().map_err(|e| CueError::Blocked(js_err(e)))?;
                JsFuture::from(resumed)
                    .await
                    .map_err(|e| CueError::Blocked(js_err(e)))?;
            }
            beep(&ctx).map_err(|e| CueError::Unsupported(js_err(e)))
        })
    }
}

fn beep(ctx: &web::AudioContext) -> Result<(), wasm_bindgen::JsValue> {
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value(BEEP_FREQ_HZ);
    let now = ctx.current_time();
    gain.gain().set_value_at_time(BEEP_START_GAIN, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(BEEP_END_GAIN, now + BEEP_SECONDS)?;
    osc.start_with_when(now)?;
    osc.stop_with_when(now + BEEP_SECONDS)?;
    Ok(())
}
