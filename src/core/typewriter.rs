/// Character source for one typed append.
///
/// The region's current text decides whether a `\n` separator is emitted
/// first; after that the characters of `text` come out in order. Callers
/// append each yielded char and wait one interval before pulling the next.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    cursor: usize,
}

impl Typewriter {
    pub fn new(existing: &str, text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len() + 1);
        if !existing.is_empty() {
            chars.push('\n');
        }
        chars.extend(text.chars());
        Self { chars, cursor: 0 }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.cursor
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

/// What the region holds once a typewriter over `text` has fully drained.
pub fn drained(existing: &str, text: &str) -> String {
    let mut out = String::from(existing);
    out.extend(Typewriter::new(existing, text));
    out
}
