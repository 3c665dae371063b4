/// Narrative variant, fixed for the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Birthday,
    Professional,
}

impl Mode {
    pub const QUERY_KEY: &'static str = "mode";

    /// Map the raw `mode` query value; only an exact `professional` selects
    /// the alternate script.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("professional") => Mode::Professional,
            _ => Mode::Birthday,
        }
    }

    #[inline]
    pub fn is_professional(self) -> bool {
        self == Mode::Professional
    }

    pub fn terminal_title(self) -> &'static str {
        match self {
            Mode::Birthday => "birthday_firewall.exe",
            Mode::Professional => "security_awareness_demo.exe",
        }
    }

    /// Document title, app name and tagline overrides. The birthday page keeps
    /// whatever the markup ships with.
    pub fn branding(self) -> Option<(&'static str, &'static str, &'static str)> {
        match self {
            Mode::Birthday => None,
            Mode::Professional => Some((
                "Security Awareness Demo | Elie Ishimwe",
                "Security Awareness",
                "Educational Demo",
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Anything unrecognised (including nothing stored yet) falls back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The toggle button advertises the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// Value for `<meta name="theme-color">`.
    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Dark => "#060a0c",
            Theme::Light => "#e8f4f0",
        }
    }

    pub fn rain_color(self) -> &'static str {
        match self {
            Theme::Dark => crate::constants::RAIN_COLOR_DARK,
            Theme::Light => crate::constants::RAIN_COLOR_LIGHT,
        }
    }
}
