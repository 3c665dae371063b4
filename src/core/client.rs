/// What any page can read about its visitor without asking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientInfo {
    pub device: &'static str,
    pub browser: &'static str,
    pub screen: String,
    pub time: String,
}

impl ClientInfo {
    pub fn new(user_agent: &str, screen_w: i32, screen_h: i32, time: String) -> Self {
        Self {
            device: os_from_user_agent(user_agent),
            browser: browser_from_user_agent(user_agent),
            screen: format!("{}×{}", screen_w, screen_h),
            time,
        }
    }

    pub fn lines(&self) -> [String; 4] {
        [
            format!("Device: {}", self.device),
            format!("Browser: {}", self.browser),
            format!("Screen: {}", self.screen),
            format!("Time: {}", self.time),
        ]
    }
}

pub fn os_from_user_agent(ua: &str) -> &'static str {
    if ua.contains("Win") {
        "Windows"
    } else if ua.contains("Mac") {
        "macOS"
    } else if ua.contains("Linux") {
        "Linux"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("iOS") || ua.contains("iPad") {
        "iOS"
    } else {
        "Unknown"
    }
}

pub fn browser_from_user_agent(ua: &str) -> &'static str {
    if ua.contains("Edg") {
        "Edge"
    } else if ua.contains("Chrome") {
        "Chrome"
    } else if ua.contains("Firefox") {
        "Firefox"
    } else if ua.contains("Safari") {
        "Safari"
    } else {
        "Browser"
    }
}
