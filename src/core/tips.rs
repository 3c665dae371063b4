pub const CYBER_TIPS: [&str; 4] = [
    "💡 Use strong, unique passwords for each account",
    "💡 Enable multi-factor authentication (MFA)",
    "💡 Think before clicking unknown links",
    "💡 Your curiosity is a superpower—stay secure 🛡️",
];

/// Cyclic cursor over a fixed tip list.
#[derive(Clone, Debug)]
pub struct TipRotation {
    tips: &'static [&'static str],
    index: usize,
}

impl Default for TipRotation {
    fn default() -> Self {
        Self::new(&CYBER_TIPS)
    }
}

impl TipRotation {
    pub fn new(tips: &'static [&'static str]) -> Self {
        Self { tips, index: 0 }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Tip to display now; the cursor moves on for the next tick.
    pub fn advance(&mut self) -> Option<&'static str> {
        let tip = self.tips.get(self.index).copied()?;
        self.index = (self.index + 1) % self.tips.len();
        Some(tip)
    }
}
