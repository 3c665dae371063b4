use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum CueError {
    #[error("audio playback unsupported: {0}")]
    Unsupported(String),
    #[error("audio playback blocked: {0}")]
    Blocked(String),
}

pub type CueFuture = Pin<Box<dyn Future<Output = Result<(), CueError>>>>;

/// One way of producing the success sound.
pub trait CueStrategy {
    fn name(&self) -> &'static str;
    fn play(&self) -> CueFuture;
}

/// Shared mute toggle; cloned into every input handler that can flip it.
#[derive(Clone, Debug, Default)]
pub struct MuteFlag(Rc<Cell<bool>>);

impl MuteFlag {
    #[inline]
    pub fn is_muted(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, muted: bool) {
        self.0.set(muted);
    }

    /// Flip and return the new state.
    pub fn toggle(&self) -> bool {
        let muted = !self.0.get();
        self.0.set(muted);
        muted
    }
}

pub fn is_mute_key(key: &str) -> bool {
    matches!(key, "m" | "M")
}

/// Ordered fallback chain for the success sound. Strategies are tried until
/// one succeeds; every failure is logged and swallowed.
pub struct AudioCue {
    mute: MuteFlag,
    strategies: Vec<Box<dyn CueStrategy>>,
}

impl AudioCue {
    pub fn new(mute: MuteFlag) -> Self {
        Self {
            mute,
            strategies: Vec::new(),
        }
    }

    pub fn with_strategy(mut self, strategy: impl CueStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn mute(&self) -> &MuteFlag {
        &self.mute
    }

    /// Returns the name of the strategy that played, or `None` when muted or
    /// when every strategy failed.
    pub async fn play(&self) -> Option<&'static str> {
        if self.mute.is_muted() {
            return None;
        }
        for strategy in &self.strategies {
            match strategy.play().await {
                Ok(()) => return Some(strategy.name()),
                Err(e) => log::debug!("[audio] {} failed: {}", strategy.name(), e),
            }
        }
        log::debug!("[audio] cue dropped");
        None
    }
}
