// Host-side tests for session state: mode and theme selection, the access
// latch, the audio fallback chain, asset fallback, visitor details and the
// background task registry.

use cyber_firewall::constants::PROFILE_IMAGES;
use cyber_firewall::core::client::{browser_from_user_agent, os_from_user_agent};
use cyber_firewall::core::cue::is_mute_key;
use cyber_firewall::core::{
    AccessGate, AudioCue, ClientInfo, CueError, CueFuture, CueStrategy, Fallback, FallbackChain,
    Mode, MuteFlag, Registry, Theme,
};
use std::cell::Cell;
use std::rc::Rc;

// ---------------- Mode / theme ----------------

#[test]
fn only_exact_professional_selects_alternate_mode() {
    assert_eq!(Mode::from_param(Some("professional")), Mode::Professional);
    assert_eq!(Mode::from_param(Some("Professional")), Mode::Birthday);
    assert_eq!(Mode::from_param(Some("")), Mode::Birthday);
    assert_eq!(Mode::from_param(Some("birthday")), Mode::Birthday);
    assert_eq!(Mode::from_param(None), Mode::Birthday);
}

#[test]
fn mode_chrome_differs_per_variant() {
    assert_eq!(Mode::Birthday.terminal_title(), "birthday_firewall.exe");
    assert_eq!(Mode::Professional.terminal_title(), "security_awareness_demo.exe");
    assert_eq!(Mode::Birthday.branding(), None);
    let (title, name, tagline) = Mode::Professional.branding().unwrap();
    assert!(title.starts_with("Security Awareness Demo"));
    assert_eq!(name, "Security Awareness");
    assert_eq!(tagline, "Educational Demo");
}

#[test]
fn stored_theme_defaults_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
}

#[test]
fn theme_toggle_round_trips_through_storage_value() {
    let t = Theme::Dark.toggled();
    assert_eq!(t, Theme::Light);
    assert_eq!(Theme::from_stored(Some(t.as_str())), t);
    assert_eq!(t.toggled(), Theme::Dark);
}

#[test]
fn theme_icon_advertises_the_other_theme() {
    assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_ne!(Theme::Dark.meta_color(), Theme::Light.meta_color());
    assert_eq!(Theme::Dark.rain_color(), "#0F0");
    assert_eq!(Theme::Light.rain_color(), "#006b47");
}

// ---------------- Access latch ----------------

#[test]
fn access_gate_only_opens_once() {
    let mut gate = AccessGate::default();
    assert!(!gate.is_used());
    assert!(gate.activate());
    assert!(gate.is_used());
    assert!(!gate.activate());
    assert!(!gate.activate());
}

// ---------------- Audio cue ----------------

struct Scripted {
    name: &'static str,
    ok: bool,
    calls: Rc<Cell<u32>>,
}

impl Scripted {
    fn new(name: &'static str, ok: bool) -> (Self, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                name,
                ok,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl CueStrategy for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }

    fn play(&self) -> CueFuture {
        self.calls.set(self.calls.get() + 1);
        let ok = self.ok;
        Box::pin(async move {
            if ok {
                Ok(())
            } else {
                Err(CueError::Blocked("NotAllowedError".into()))
            }
        })
    }
}

#[test]
fn cue_uses_first_strategy_that_works() {
    let (asset, asset_calls) = Scripted::new("asset", true);
    let (synth, synth_calls) = Scripted::new("synth", true);
    let cue = AudioCue::new(MuteFlag::default())
        .with_strategy(asset)
        .with_strategy(synth);
    assert_eq!(pollster::block_on(cue.play()), Some("asset"));
    assert_eq!(asset_calls.get(), 1);
    assert_eq!(synth_calls.get(), 0);
}

#[test]
fn cue_falls_back_in_order() {
    let (asset, asset_calls) = Scripted::new("asset", false);
    let (synth, synth_calls) = Scripted::new("synth", true);
    let cue = AudioCue::new(MuteFlag::default())
        .with_strategy(asset)
        .with_strategy(synth);
    assert_eq!(pollster::block_on(cue.play()), Some("synth"));
    assert_eq!(asset_calls.get(), 1);
    assert_eq!(synth_calls.get(), 1);
}

#[test]
fn cue_drops_silently_when_everything_fails() {
    let (asset, _) = Scripted::new("asset", false);
    let (synth, synth_calls) = Scripted::new("synth", false);
    let cue = AudioCue::new(MuteFlag::default())
        .with_strategy(asset)
        .with_strategy(synth);
    assert_eq!(pollster::block_on(cue.play()), None);
    assert_eq!(synth_calls.get(), 1);
}

#[test]
fn muted_cue_invokes_nothing() {
    let mute = MuteFlag::default();
    let (asset, asset_calls) = Scripted::new("asset", true);
    let (synth, synth_calls) = Scripted::new("synth", true);
    let cue = AudioCue::new(mute.clone())
        .with_strategy(asset)
        .with_strategy(synth);
    assert!(mute.toggle());
    assert_eq!(pollster::block_on(cue.play()), None);
    assert_eq!(asset_calls.get() + synth_calls.get(), 0);

    assert!(!cue.mute().toggle());
    assert_eq!(pollster::block_on(cue.play()), Some("asset"));
}

#[test]
fn mute_shortcut_is_m_in_either_case() {
    assert!(is_mute_key("m"));
    assert!(is_mute_key("M"));
    assert!(!is_mute_key("n"));
    assert!(!is_mute_key("Meta"));
}

// ---------------- Asset fallback ----------------

#[test]
fn profile_image_candidates_are_tried_in_order_then_hidden() {
    let mut chain = FallbackChain::new(&PROFILE_IMAGES);
    assert_eq!(chain.current(), Some(PROFILE_IMAGES[0]));
    for expected in &PROFILE_IMAGES[1..] {
        assert_eq!(chain.on_error(), Fallback::Try(*expected));
    }
    assert_eq!(chain.on_error(), Fallback::Exhausted);
    assert_eq!(chain.on_error(), Fallback::Exhausted);
    assert_eq!(chain.current(), None);
}

// ---------------- Visitor details ----------------

#[test]
fn user_agent_maps_to_device_and_browser() {
    let edge = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36 Edg/120.0";
    assert_eq!(os_from_user_agent(edge), "Windows");
    assert_eq!(browser_from_user_agent(edge), "Edge");

    let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
    assert_eq!(os_from_user_agent(safari), "macOS");
    assert_eq!(browser_from_user_agent(safari), "Safari");

    assert_eq!(os_from_user_agent("curl/8.0"), "Unknown");
    assert_eq!(browser_from_user_agent("curl/8.0"), "Browser");
}

#[test]
fn client_info_lines_are_labelled() {
    let info = ClientInfo::new(
        "Mozilla/5.0 (X11; Linux x86_64) Chrome/120.0",
        2560,
        1440,
        "now".into(),
    );
    assert_eq!(
        info.lines(),
        [
            "Device: Linux".to_string(),
            "Browser: Chrome".to_string(),
            "Screen: 2560×1440".to_string(),
            "Time: now".to_string(),
        ]
    );
}

// ---------------- Background tasks ----------------

/// Stand-in for a timer handle: counts how often it was dropped, the way an
/// interval handle clears its timer on drop.
struct Handle(Rc<Cell<u32>>);

impl Drop for Handle {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn page_registry_keeps_handles_after_its_owner_is_gone() {
    let cleared = Rc::new(Cell::new(0));
    let background = Registry::<Handle>::for_page();
    assert!(background.is_empty());
    assert!(background.adopt("matrix", Some(Handle(cleared.clone()))));
    assert!(background.adopt("tips", Some(Handle(cleared.clone()))));
    let seen_later = background.clone();
    drop(background);
    assert_eq!(cleared.get(), 0);
    assert_eq!(seen_later.names(), vec!["matrix", "tips"]);
    drop(seen_later);
    assert_eq!(cleared.get(), 0, "page loops must never be stopped");
}

#[test]
fn unpinned_registry_drops_handles_with_its_last_owner() {
    let cleared = Rc::new(Cell::new(0));
    let scoped = Registry::<Handle>::default();
    scoped.adopt("glitch", Some(Handle(cleared.clone())));
    drop(scoped);
    assert_eq!(cleared.get(), 1);
}

#[test]
fn tasks_that_never_started_are_not_recorded() {
    let background = Registry::<Handle>::for_page();
    assert!(!background.adopt("matrix", None::<Handle>));
    assert_eq!(background.len(), 0);
}
