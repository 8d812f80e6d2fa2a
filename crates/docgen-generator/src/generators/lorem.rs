//! Lorem-ipsum text source.
//!
//! Sentence and paragraph lengths vary between 60% and 140% of their
//! nominal size, which keeps generated text from looking templated.

use super::words::{FIRST_NAMES, LAST_NAMES, LOREM_WORDS};
use super::TextSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

/// Nominal number of words in a sentence.
pub const SENTENCE_WORDS: usize = 6;

/// Nominal number of sentences in a paragraph.
pub const PARAGRAPH_SENTENCES: usize = 3;

/// Text source drawing lorem-ipsum words and names from a seeded RNG.
pub struct LoremSource {
    rng: StdRng,
}

impl LoremSource {
    /// Create a source with a fixed seed (same seed = same text).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    fn word(&mut self) -> &'static str {
        LOREM_WORDS[self.rng.random_range(0..LOREM_WORDS.len())]
    }

    /// Pick a count between 60% and 140% of `nominal`, never below one.
    fn vary(&mut self, nominal: usize) -> usize {
        let low = (nominal * 60 / 100).max(1);
        let high = (nominal * 140 / 100).max(low);
        self.rng.random_range(low..=high)
    }
}

impl TextSource for LoremSource {
    fn paragraph(&mut self) -> String {
        let count = self.vary(PARAGRAPH_SENTENCES);
        let sentences: Vec<String> = (0..count).map(|_| self.sentence()).collect();
        sentences.join(" ")
    }

    fn sentence(&mut self) -> String {
        let count = self.vary(SENTENCE_WORDS);
        let mut sentence = capitalize(self.word());
        for _ in 1..count {
            sentence.push(' ');
            sentence.push_str(self.word());
        }
        sentence.push('.');
        sentence
    }

    fn name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())];
        format!("{first} {last}")
    }

    fn text(&mut self, max_chars: usize) -> String {
        let mut text = String::new();
        loop {
            let sentence = self.sentence();
            let separator = usize::from(!text.is_empty());
            if text.len() + separator + sentence.len() > max_chars {
                break;
            }
            if separator == 1 {
                text.push(' ');
            }
            text.push_str(&sentence);
        }

        // Limits shorter than any sentence still get some text.
        if text.is_empty() {
            text = capitalize(self.word());
            text.truncate(max_chars);
        }
        text
    }

    fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
