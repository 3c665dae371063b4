//! The page controller: every DOM collaborator resolved once, plus the
//! [`Stage`] implementation the sequencer drives.

use crate::carousel;
use crate::confetti;
use crate::constants::*;
use crate::core::{AudioCue, ClientInfo, Mode, Panel, Region, Stage, TipRotation};
use crate::dom;
use crate::timing::{self, Background};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("required element #{0} not found")]
    Missing(&'static str),
}

pub struct Page {
    document: web::Document,
    terminal_output: web::Element,
    access_button: web::HtmlButtonElement,
    footer_output: Option<web::Element>,
    terminal: Option<web::Element>,
    terminal_title: Option<web::Element>,
    profile_section: Option<web::Element>,
    about_demo: Option<web::Element>,
    ethical_badge: Option<web::Element>,
    your_info: Option<web::Element>,
    your_info_content: Option<web::Element>,
    cyber_tips: Option<web::Element>,
    tip_text: Option<web::Element>,

    cue: Rc<AudioCue>,
    tips: Rc<RefCell<TipRotation>>,
    background: Background,
}

impl Page {
    /// Resolve every element up front. Only the terminal output and the
    /// access control are required; anything else missing turns the matching
    /// step into a no-op.
    pub fn bind(document: &web::Document, cue: AudioCue) -> Result<Self, PageError> {
        let terminal_output = dom::by_id(document, ID_TERMINAL_OUTPUT)
            .ok_or(PageError::Missing(ID_TERMINAL_OUTPUT))?;
        let access_button = dom::typed_by_id::<web::HtmlButtonElement>(document, ID_ACCESS_BUTTON)
            .ok_or(PageError::Missing(ID_ACCESS_BUTTON))?;
        Ok(Self {
            document: document.clone(),
            terminal_output,
            access_button,
            footer_output: dom::by_id(document, ID_FOOTER_OUTPUT),
            terminal: dom::by_id(document, ID_TERMINAL),
            terminal_title: dom::by_selector(document, SEL_TERMINAL_TITLE),
            profile_section: dom::by_id(document, ID_PROFILE_SECTION),
            about_demo: dom::by_id(document, ID_ABOUT_DEMO),
            ethical_badge: dom::by_id(document, ID_ETHICAL_BADGE),
            your_info: dom::by_id(document, ID_YOUR_INFO),
            your_info_content: dom::by_id(document, ID_YOUR_INFO_CONTENT),
            cyber_tips: dom::by_id(document, ID_CYBER_TIPS),
            tip_text: dom::by_id(document, ID_TIP_TEXT),
            cue: Rc::new(cue),
            tips: Rc::new(RefCell::new(TipRotation::default())),
            background: Background::for_page(),
        })
    }

    pub fn access_button(&self) -> &web::HtmlButtonElement {
        &self.access_button
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Document title, app name and tagline for the alternate mode.
    pub fn apply_branding(&self, mode: Mode) {
        let Some((title, name, tagline)) = mode.branding() else {
            return;
        };
        self.document.set_title(title);
        if let Some(el) = dom::by_id(&self.document, ID_APP_NAME) {
            dom::set_text(&el, name);
        }
        if let Some(el) = dom::by_id(&self.document, ID_APP_TAGLINE) {
            dom::set_text(&el, tagline);
        }
    }

    fn region(&self, region: Region) -> Option<&web::Element> {
        match region {
            Region::Terminal => Some(&self.terminal_output),
            Region::Footer => self.footer_output.as_ref(),
        }
    }

    fn panel(&self, panel: Panel) -> Option<&web::Element> {
        match panel {
            Panel::AccessButton => {
                let el: &web::Element = &self.access_button;
                Some(el)
            }
            Panel::AboutDemo => self.about_demo.as_ref(),
            Panel::EthicalBadge => self.ethical_badge.as_ref(),
            Panel::Profile => self.profile_section.as_ref(),
            Panel::Tips => self.cyber_tips.as_ref(),
        }
    }
}

impl Stage for Page {
    async fn type_line(&mut self, region: Region, text: &str, interval_ms: u32) {
        if let Some(el) = self.region(region) {
            dom::type_into(el, text, interval_ms).await;
        }
    }

    async fn pause(&mut self, ms: u32) {
        timing::sleep(ms).await;
    }

    fn clear(&mut self, region: Region) {
        if let Some(el) = self.region(region) {
            dom::set_text(el, "");
        }
    }

    fn reveal(&mut self, panel: Panel) {
        if let Some(el) = self.panel(panel) {
            dom::add_class(el, CLASS_VISIBLE);
        }
    }

    fn set_terminal_title(&mut self, title: &str) {
        if let Some(el) = &self.terminal_title {
            dom::set_text(el, title);
        }
    }

    fn disable_access(&mut self) {
        self.access_button.set_disabled(true);
    }

    fn launch_confetti(&mut self) {
        confetti::launch(&self.document);
    }

    fn play_cue(&mut self) {
        let cue = self.cue.clone();
        spawn_local(async move {
            if let Some(name) = cue.play().await {
                log::debug!("[audio] played via {}", name);
            }
        });
    }

    fn glitch(&mut self) {
        let Some(terminal) = self.terminal.clone() else {
            return;
        };
        dom::add_class(&terminal, GLITCH_CLASS);
        let settle = timing::after(GLITCH_DURATION_MS, move || {
            dom::remove_class(&terminal, GLITCH_CLASS)
        });
        self.background.adopt("glitch", settle);
    }

    fn start_tips(&mut self) {
        let Some(tip_text) = self.tip_text.clone() else {
            return;
        };
        let carousel = carousel::start(tip_text, self.tips.clone());
        self.background.adopt("tips", carousel);
    }

    fn client_info(&self) -> ClientInfo {
        let window = web::window();
        let user_agent = window
            .as_ref()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        let (w, h) = window
            .as_ref()
            .and_then(|w| w.screen().ok())
            .map(|s| (s.width().unwrap_or(0), s.height().unwrap_or(0)))
            .unwrap_or((0, 0));
        let time: String = js_sys::Date::new_0()
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into();
        ClientInfo::new(&user_agent, w, h, time)
    }

    fn show_client_info(&mut self, info: &ClientInfo) -> bool {
        let (Some(panel), Some(content)) = (&self.your_info, &self.your_info_content) else {
            return false;
        };
        dom::set_text(content, &info.lines().join("\n"));
        dom::add_class(panel, CLASS_VISIBLE);
        true
    }
}
