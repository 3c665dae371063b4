//! Every line the terminal types, grouped by phase and mode.

use super::mode::Mode;
use crate::constants::LINE_DELAY_MS;

/// A typed line and the pause that follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: &'static str,
    pub pause_ms: u32,
}

const fn line(text: &'static str) -> Line {
    Line {
        text,
        pause_ms: LINE_DELAY_MS,
    }
}

const fn held(text: &'static str, pause_ms: u32) -> Line {
    Line { text, pause_ms }
}

const LANDING_BIRTHDAY: &[Line] = &[
    line("> 🔐 Booting secure system..."),
    line("> Verifying access channel..."),
    line("> Status: LOCKED"),
    held("> Date: 9/Feb", 450),
];

const LANDING_PROFESSIONAL: &[Line] = &[
    line("> 🔐 Booting secure system..."),
    line("> Verifying access channel..."),
    line("> Status: LOCKED"),
    held("> Environment: Demo", 450),
];

const SCAN_BIRTHDAY: &[Line] = &[
    line("> Initializing birthday firewall..."),
    line("> Checking good vibes..."),
    line("> Detecting cake packets 🎂..."),
    held("> Threat level: LOW 😎", 550),
];

const SCAN_PROFESSIONAL: &[Line] = &[
    line("> Initializing security scan..."),
    line("> Verifying human presence..."),
    line("> Assessing risk level..."),
    held("> Threat level: LOW ✓", 550),
];

/// Typed before the burst and beep fire.
pub const ACCESS_BANNER: Line = held("> ✅ ACCESS GRANTED", 200);

pub const ACCESS_WELCOME: &[Line] = &[
    line("> Welcome, human 🎉"),
    line("\n> Your info visible to this page:"),
];

pub const ACCESS_DISCLAIMER: Line = line("> (No personal data collected – ethical demo 👀)");

const REVEAL_BIRTHDAY: &[Line] = &[
    line("\n> 🎂 HAPPY BIRTHDAY TO ELIE ISHIMWE!"),
    line("> You accessed the Cyber Birthday Firewall."),
    line("> Built something cyber instead of cutting cake 🎉"),
    held("> Stay curious. Stay secure 🔐", 400),
];

const REVEAL_PROFESSIONAL: &[Line] = &[
    line("\n> You experienced a simulated access flow."),
    line("> Curiosity is the most exploited human vulnerability."),
    held("> Stay curious. Stay secure. 🔐", 400),
];

const FOOTER_BIRTHDAY: &[Line] = &[
    line("Built by Elie Ishimwe"),
    line("Cybersecurity Enthusiast | Blue Team 🛡️"),
    line("Educational demo · No data collected"),
];

const FOOTER_PROFESSIONAL: &[Line] = &[
    line("Built by Elie Ishimwe | Lead Cybersecurity Consultant"),
    line("Educational demo | No data collected"),
];

pub fn landing(mode: Mode) -> &'static [Line] {
    match mode {
        Mode::Birthday => LANDING_BIRTHDAY,
        Mode::Professional => LANDING_PROFESSIONAL,
    }
}

pub fn scan(mode: Mode) -> &'static [Line] {
    match mode {
        Mode::Birthday => SCAN_BIRTHDAY,
        Mode::Professional => SCAN_PROFESSIONAL,
    }
}

pub fn reveal(mode: Mode) -> &'static [Line] {
    match mode {
        Mode::Birthday => REVEAL_BIRTHDAY,
        Mode::Professional => REVEAL_PROFESSIONAL,
    }
}

pub fn footer(mode: Mode) -> &'static [Line] {
    match mode {
        Mode::Birthday => FOOTER_BIRTHDAY,
        Mode::Professional => FOOTER_PROFESSIONAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_use_the_default_delay() {
        assert_eq!(line("x").pause_ms, LINE_DELAY_MS);
        assert_eq!(held("x", 450).pause_ms, 450);
    }

    #[test]
    fn variants_differ_only_where_they_should() {
        let b = landing(Mode::Birthday);
        let p = landing(Mode::Professional);
        assert_eq!(b.len(), p.len());
        assert_eq!(b[..3], p[..3]);
        assert_ne!(b[3], p[3]);
        for mode in [Mode::Birthday, Mode::Professional] {
            assert_eq!(scan(mode).last().map(|l| l.pause_ms), Some(550));
            assert_eq!(reveal(mode).last().map(|l| l.pause_ms), Some(400));
            assert!(reveal(mode)[0].text.starts_with('\n'));
        }
    }
}
