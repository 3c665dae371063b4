/// Ordered list of candidate sources for one element. Each load failure moves
/// to the next candidate; once the list is spent the element gets hidden.
#[derive(Clone, Debug)]
pub struct FallbackChain {
    candidates: &'static [&'static str],
    index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Try(&'static str),
    Exhausted,
}

impl FallbackChain {
    pub fn new(candidates: &'static [&'static str]) -> Self {
        Self {
            candidates,
            index: 0,
        }
    }

    /// The source currently expected to be loading.
    pub fn current(&self) -> Option<&'static str> {
        self.candidates.get(self.index).copied()
    }

    /// Record a failure of the current candidate.
    pub fn on_error(&mut self) -> Fallback {
        if self.index < self.candidates.len() {
            self.index += 1;
        }
        match self.current() {
            Some(src) => Fallback::Try(src),
            None => Fallback::Exhausted,
        }
    }
}
