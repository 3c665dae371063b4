//! Browser-independent logic. Everything here builds and tests on the host;
//! the wasm-only modules at the crate root drive it against the DOM.

pub mod assets;
pub mod client;
pub mod confetti;
pub mod cue;
pub mod flow;
pub mod mode;
pub mod rain;
pub mod script;
pub mod tasks;
pub mod tips;
pub mod typewriter;

pub use assets::{Fallback, FallbackChain};
pub use client::ClientInfo;
pub use confetti::{Burst, Particle};
pub use cue::{AudioCue, CueError, CueFuture, CueStrategy, MuteFlag};
pub use flow::{AccessGate, Panel, Phase, Region, Sequencer, Stage};
pub use mode::{Mode, Theme};
pub use rain::{Glyph, Rain};
pub use script::Line;
pub use tasks::Registry;
pub use tips::{TipRotation, CYBER_TIPS};
pub use typewriter::Typewriter;
