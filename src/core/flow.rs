//! The narrative sequencer: Landing, Scanning, AccessGranted, Reveal, Footer.
//!
//! The sequencer owns no DOM. It drives a [`Stage`], which the page
//! implements against real elements and timers and the tests implement with
//! a recorder. Every typed line is awaited before the next is issued, so the
//! stage never sees two typewriters running on the same region.

use super::client::ClientInfo;
use super::mode::Mode;
use super::script::{self, Line};
use crate::constants::*;
use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Landing,
    Scanning,
    AccessGranted,
    Reveal,
    Footer,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Landing,
        Phase::Scanning,
        Phase::AccessGranted,
        Phase::Reveal,
        Phase::Footer,
    ];

    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Landing => Some(Phase::Scanning),
            Phase::Scanning => Some(Phase::AccessGranted),
            Phase::AccessGranted => Some(Phase::Reveal),
            Phase::Reveal => Some(Phase::Footer),
            Phase::Footer => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Landing => "landing",
            Phase::Scanning => "scanning",
            Phase::AccessGranted => "access-granted",
            Phase::Reveal => "reveal",
            Phase::Footer => "footer",
        }
    }
}

/// Text regions the typewriter writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Terminal,
    Footer,
}

/// Elements that start hidden and get revealed once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    AccessButton,
    AboutDemo,
    EthicalBadge,
    Profile,
    Tips,
}

/// Everything the sequencer needs from the page.
///
/// The two async methods are the only suspension points; the rest fire and
/// return immediately. Implementations swallow their own failures.
#[allow(async_fn_in_trait)]
pub trait Stage {
    async fn type_line(&mut self, region: Region, text: &str, interval_ms: u32);
    async fn pause(&mut self, ms: u32);

    fn clear(&mut self, region: Region);
    fn reveal(&mut self, panel: Panel);
    fn set_terminal_title(&mut self, title: &str);
    fn disable_access(&mut self);
    fn launch_confetti(&mut self);
    fn play_cue(&mut self);
    fn glitch(&mut self);
    fn start_tips(&mut self);
    fn client_info(&self) -> ClientInfo;
    /// Fill the dedicated visitor panel. Returns `false` when the page has
    /// none, in which case the details are typed into the terminal instead.
    fn show_client_info(&mut self, info: &ClientInfo) -> bool;

    fn on_enter(&mut self, _phase: Phase) {}
}

/// One-shot latch behind the access control.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessGate {
    used: bool,
}

impl AccessGate {
    /// `true` only for the first activation.
    pub fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.used, true)
    }

    #[inline]
    pub fn is_used(&self) -> bool {
        self.used
    }
}

#[derive(Clone, Debug)]
pub struct Sequencer {
    mode: Mode,
    phase: Option<Phase>,
}

impl Sequencer {
    pub fn new(mode: Mode) -> Self {
        Self { mode, phase: None }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `None` before the run starts.
    #[inline]
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    fn upcoming(&self) -> Option<Phase> {
        match self.phase {
            None => Some(Phase::Landing),
            Some(p) => p.next(),
        }
    }

    /// Play the whole narrative. `activation` resolves when the visitor uses
    /// the access control; Scanning is not entered before that.
    pub async fn run<S, A>(&mut self, stage: &mut S, activation: A)
    where
        S: Stage,
        A: Future<Output = ()>,
    {
        let mut activation = Some(activation);
        while let Some(next) = self.upcoming() {
            if next == Phase::Scanning {
                if let Some(signal) = activation.take() {
                    signal.await;
                }
            }
            self.phase = Some(next);
            log::info!("[flow] {:?}: entering {}", self.mode, next.name());
            stage.on_enter(next);
            match next {
                Phase::Landing => self.landing(stage).await,
                Phase::Scanning => self.scanning(stage).await,
                Phase::AccessGranted => self.access_granted(stage).await,
                Phase::Reveal => self.reveal(stage).await,
                Phase::Footer => self.footer(stage).await,
            }
        }
    }

    async fn landing<S: Stage>(&self, stage: &mut S) {
        stage.set_terminal_title(self.mode.terminal_title());
        if self.mode.is_professional() {
            stage.reveal(Panel::AboutDemo);
        }
        type_lines(stage, Region::Terminal, script::landing(self.mode), TYPING_SPEED_MS).await;
        stage.reveal(Panel::AccessButton);
    }

    async fn scanning<S: Stage>(&self, stage: &mut S) {
        stage.disable_access();
        clear_terminal(stage).await;
        type_lines(stage, Region::Terminal, script::scan(self.mode), SCAN_TYPING_SPEED_MS).await;
    }

    async fn access_granted<S: Stage>(&self, stage: &mut S) {
        clear_terminal(stage).await;
        type_lines(stage, Region::Terminal, &[script::ACCESS_BANNER], TYPING_SPEED_MS).await;

        stage.play_cue();
        stage.launch_confetti();
        stage.glitch();
        stage.pause(LINE_DELAY_MS).await;

        type_lines(stage, Region::Terminal, script::ACCESS_WELCOME, TYPING_SPEED_MS).await;
        let info = stage.client_info();
        if !stage.show_client_info(&info) {
            for detail in info.lines() {
                stage
                    .type_line(Region::Terminal, &format!(">   {}", detail), TYPING_SPEED_MS)
                    .await;
                stage.pause(LINE_DELAY_MS).await;
            }
        }
        type_lines(stage, Region::Terminal, &[script::ACCESS_DISCLAIMER], TYPING_SPEED_MS).await;

        stage.reveal(Panel::EthicalBadge);
        stage.pause(BADGE_HOLD_MS).await;
    }

    async fn reveal<S: Stage>(&self, stage: &mut S) {
        if !self.mode.is_professional() {
            stage.reveal(Panel::Profile);
            stage.pause(PROFILE_SETTLE_MS).await;
        }
        type_lines(stage, Region::Terminal, script::reveal(self.mode), TYPING_SPEED_MS).await;
        if !self.mode.is_professional() {
            stage.reveal(Panel::AboutDemo);
        }
    }

    async fn footer<S: Stage>(&self, stage: &mut S) {
        type_lines(stage, Region::Footer, script::footer(self.mode), TYPING_SPEED_MS).await;
        stage.reveal(Panel::Tips);
        stage.start_tips();
    }
}

async fn type_lines<S: Stage>(stage: &mut S, region: Region, lines: &[Line], interval_ms: u32) {
    for line in lines {
        stage.type_line(region, line.text, interval_ms).await;
        stage.pause(line.pause_ms).await;
    }
}

async fn clear_terminal<S: Stage>(stage: &mut S) {
    stage.clear(Region::Terminal);
    stage.pause(CLEAR_SETTLE_MS).await;
}
