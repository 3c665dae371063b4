//! Timing, physics and asset tuning constants for the page.
//!
//! Millisecond values are `u32` because they go straight into
//! `setTimeout`/`setInterval`.

// Typing cadence
pub const TYPING_SPEED_MS: u32 = 32; // default per-character interval
pub const SCAN_TYPING_SPEED_MS: u32 = 26; // slightly faster while "scanning"
pub const LINE_DELAY_MS: u32 = 280; // pause after most lines
pub const CLEAR_SETTLE_MS: u32 = 220; // pause after wiping the terminal
pub const BADGE_HOLD_MS: u32 = 700; // ethical badge on screen before the reveal
pub const PROFILE_SETTLE_MS: u32 = 400; // profile panel fade-in before the reveal text

// Terminal chrome glitch
pub const GLITCH_CLASS: &str = "glitch";
pub const GLITCH_DURATION_MS: u32 = 400;

// Confetti burst
pub const CONFETTI_COUNT: usize = 80;
pub const CONFETTI_FRAMES: u32 = 120;
pub const CONFETTI_GRAVITY: f32 = 0.15; // px/frame^2
pub const CONFETTI_DECAY: f32 = 0.97; // per-frame velocity multiplier
pub const CONFETTI_SPIN_DEG: f32 = 5.0; // rotation per frame
pub const CONFETTI_MAX_SPEED: f32 = 8.0; // spread of initial velocity
pub const CONFETTI_LIFT: f32 = 2.0; // initial upward bias
pub const CONFETTI_MIN_SIZE: f32 = 2.0;
pub const CONFETTI_SIZE_SPAN: f32 = 6.0;
pub const CONFETTI_COLORS: [&str; 5] = ["#00ff9c", "#88f5c8", "#5ee8c4", "#ffd93d", "#ff5a5a"];

// Matrix rain
pub const RAIN_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()";
pub const RAIN_FONT_PX: u32 = 16; // also the column width
pub const RAIN_TICK_MS: u32 = 50;
pub const RAIN_RESET_CHANCE: f64 = 0.025; // per tick, once below the bottom edge
pub const RAIN_TRAIL_FILL: &str = "rgba(0, 0, 0, 0.05)";
pub const RAIN_COLOR_DARK: &str = "#0F0";
pub const RAIN_COLOR_LIGHT: &str = "#006b47";

// Tips carousel
pub const TIP_INTERVAL_MS: u32 = 4500;
pub const TIP_FADE_CLASS: &str = "fade";

// Audio cue
pub const BEEP_ASSET: &str = "assets/audio/success-beep.mp3";
pub const BEEP_ASSET_VOLUME: f64 = 0.5;
pub const BEEP_FREQ_HZ: f32 = 880.0;
pub const BEEP_START_GAIN: f32 = 0.15;
pub const BEEP_END_GAIN: f32 = 0.01; // exponential ramps cannot reach zero
pub const BEEP_SECONDS: f64 = 0.2;

// Profile image candidates, tried in order
pub const PROFILE_IMAGES: [&str; 5] = [
    "assets/images/profile.jpg",
    "assets/images/ishiel.HEIC",
    "assets/images/elie.jpeg",
    "assets/images/123.jpg",
    "assets/images/123.HEIC",
];

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "cyber-firewall-theme";

// Element ids
pub const ID_TERMINAL_OUTPUT: &str = "terminalOutput";
pub const ID_ACCESS_BUTTON: &str = "btnAccess";
pub const ID_PROFILE_SECTION: &str = "profileSection";
pub const ID_FOOTER_OUTPUT: &str = "footerOutput";
pub const ID_TERMINAL: &str = "terminal";
pub const ID_MUTE_BUTTON: &str = "btnMute";
pub const ID_THEME_BUTTON: &str = "btnTheme";
pub const ID_TIP_TEXT: &str = "tipText";
pub const ID_CYBER_TIPS: &str = "cyberTips";
pub const ID_ABOUT_DEMO: &str = "aboutDemo";
pub const ID_ETHICAL_BADGE: &str = "ethicalBadge";
pub const ID_YOUR_INFO: &str = "yourInfo";
pub const ID_YOUR_INFO_CONTENT: &str = "yourInfoContent";
pub const ID_THEME_COLOR_META: &str = "themeColor";
pub const ID_CONFETTI_CANVAS: &str = "confettiCanvas";
pub const ID_MATRIX_CANVAS: &str = "matrix";
pub const ID_PROFILE_IMAGE: &str = "profileImage";
pub const ID_APP_NAME: &str = "appName";
pub const ID_APP_TAGLINE: &str = "appTagline";

pub const SEL_TERMINAL_TITLE: &str = ".terminal-title";
pub const SEL_THEME_ICON: &str = ".theme-icon";
pub const SEL_MUTE_ICON: &str = ".mute-icon";

pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_MUTED: &str = "muted";
