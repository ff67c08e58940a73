//! Typewriter reveal of the hero title
//!
//! The title's markup is rebuilt one character per tick. The number of ticks
//! comes from the visible text length while the slices are taken from the
//! markup, so a title containing tags finishes before all of its markup is
//! back (and may show half-written tags along the way). Pages keep their hero
//! title plain to avoid that.

/// Delay before the first character and between characters (ms)
pub const TYPING_INTERVAL_MS: u32 = 100;

/// Character-by-character reveal of a heading
#[derive(Debug, Clone, PartialEq)]
pub struct TypingReveal {
    markup: Vec<char>,
    text_len: usize,
    revealed: usize,
}

impl TypingReveal {
    /// Capture the heading's original markup and its plain text.
    ///
    /// Lengths are counted in `char`s, so text outside the Basic Multilingual
    /// Plane (emoji) counts one per character rather than per UTF-16 unit.
    pub fn new(markup: &str, text: &str) -> Self {
        Self {
            markup: markup.chars().collect(),
            text_len: text.chars().count(),
            revealed: 0,
        }
    }

    /// Produce the markup for the next tick, or `None` once finished
    pub fn next_frame(&mut self) -> Option<String> {
        if self.revealed >= self.text_len {
            return None;
        }
        self.revealed += 1;
        let end = self.revealed.min(self.markup.len());
        Some(self.markup[..end].iter().collect())
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.text_len
    }

    /// Number of ticks the reveal takes in total
    pub fn total_frames(&self) -> usize {
        self.text_len
    }
}
