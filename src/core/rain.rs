use crate::constants::{RAIN_FONT_PX, RAIN_GLYPHS, RAIN_RESET_CHANCE};
use rand::Rng;

/// Column state for the falling-glyph background.
///
/// `drops[i]` is the row (in glyph cells) where column `i` paints next.
#[derive(Clone, Debug)]
pub struct Rain {
    drops: Vec<u32>,
    height: f64,
    glyphs: Vec<char>,
}

/// One glyph to paint at pixel coordinates `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

impl Rain {
    pub fn new(width: f64, height: f64) -> Self {
        let mut rain = Self {
            drops: Vec::new(),
            height,
            glyphs: RAIN_GLYPHS.chars().collect(),
        };
        rain.resize(width, height);
        rain
    }

    /// Re-derive the column count for a new viewport. Every column restarts
    /// one row down from the top.
    pub fn resize(&mut self, width: f64, height: f64) {
        let columns = (width.max(0.0) / RAIN_FONT_PX as f64).floor() as usize;
        self.drops = vec![1; columns];
        self.height = height;
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    #[inline]
    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Pick a glyph for every column, then move each column down a row. A
    /// column that has fallen past the bottom edge jumps back to the top with
    /// a small probability so the streams stay staggered.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Glyph> {
        let cell = RAIN_FONT_PX as f64;
        let mut out = Vec::with_capacity(self.drops.len());
        for (i, row) in self.drops.iter_mut().enumerate() {
            let ch = self.glyphs[rng.gen_range(0..self.glyphs.len())];
            let y = *row as f64 * cell;
            out.push(Glyph {
                ch,
                x: i as f64 * cell,
                y,
            });
            if y > self.height && rng.gen_bool(RAIN_RESET_CHANCE) {
                *row = 0;
            }
            *row += 1;
        }
        out
    }
}
