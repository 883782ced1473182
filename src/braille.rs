//! Braille transcoding.
//!
//! Encoding is a single forward pass over whitespace-delimited tokens: a token
//! whose lowercase form is a contraction key is replaced by its glyph sequence,
//! every other token is rewritten character by character. Decoding mirrors it,
//! with the digit and capital escapes resolved by a small state machine so
//! nothing that was already emitted is ever scanned again.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::braille_table::{
    contractions, digits, letters, punctuation, CAPITAL_MARKER, NUMBER_MARKER,
};

/// What to do with an escape marker that is not followed by a glyph it can
/// apply to (end of input, whitespace, or a glyph from the wrong table).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingMarker {
    /// Emit the marker glyph unchanged.
    #[default]
    Literal,
    /// Discard the marker.
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Number,
    Capital,
}

/// Encode text into braille glyphs.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for token in tokens(text) {
        if let Some(glyphs) = contractions().get(token.to_lowercase().as_str()) {
            trace!(word = token, "contracted");
            out.push_str(glyphs);
            continue;
        }
        for c in token.chars() {
            encode_char(c, &mut out);
        }
    }
    out
}

fn encode_char(c: char, out: &mut String) {
    if let Some(glyph) = digits().get(&c) {
        out.push(NUMBER_MARKER);
        out.push(glyph);
    } else if let Some(glyph) = letters().get(&c) {
        out.push(glyph);
    } else if let Some(glyph) = letters().get(&c.to_ascii_lowercase()) {
        // Only A-Z reach this arm.
        out.push(CAPITAL_MARKER);
        out.push(glyph);
    } else if let Some(glyph) = punctuation().get(&c) {
        out.push(glyph);
    } else {
        out.push(c);
    }
}

/// Decode braille glyphs back into text, emitting dangling markers literally.
pub fn decode(glyphs: &str) -> String {
    decode_with(glyphs, DanglingMarker::default())
}

/// Decode braille glyphs with an explicit dangling-marker policy.
pub fn decode_with(glyphs: &str, policy: DanglingMarker) -> String {
    let mut scanner = MarkerScanner::new(policy, glyphs.len());
    for token in tokens(glyphs) {
        if let Some(word) = contractions().key_of(token) {
            scanner.flush();
            scanner.out.push_str(word);
            continue;
        }
        for c in token.chars() {
            scanner.feed(c);
        }
    }
    scanner.finish()
}

struct MarkerScanner {
    state: Pending,
    policy: DanglingMarker,
    out: String,
    unresolved: usize,
}

impl MarkerScanner {
    fn new(policy: DanglingMarker, capacity: usize) -> Self {
        Self {
            state: Pending::None,
            policy,
            out: String::with_capacity(capacity),
            unresolved: 0,
        }
    }

    fn feed(&mut self, c: char) {
        match self.state {
            Pending::None => match c {
                NUMBER_MARKER => self.state = Pending::Number,
                CAPITAL_MARKER => self.state = Pending::Capital,
                _ => self.emit_plain(c),
            },
            Pending::Number => match digits().key_of(&c) {
                Some(digit) => {
                    self.out.push(digit);
                    self.state = Pending::None;
                }
                None => {
                    self.flush();
                    self.feed(c);
                }
            },
            Pending::Capital => match letters().key_of(&c) {
                Some(letter) => {
                    self.out.push(letter.to_ascii_uppercase());
                    self.state = Pending::None;
                }
                None => {
                    self.flush();
                    self.feed(c);
                }
            },
        }
    }

    fn emit_plain(&mut self, c: char) {
        let plain = punctuation()
            .key_of(&c)
            .or_else(|| letters().key_of(&c))
            .unwrap_or(c);
        self.out.push(plain);
    }

    /// Resolve a pending marker that has nothing to apply to.
    fn flush(&mut self) {
        let marker = match self.state {
            Pending::None => return,
            Pending::Number => NUMBER_MARKER,
            Pending::Capital => CAPITAL_MARKER,
        };
        self.state = Pending::None;
        self.unresolved += 1;
        if self.policy == DanglingMarker::Literal {
            self.out.push(marker);
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        if self.unresolved > 0 {
            debug!(count = self.unresolved, policy = ?self.policy, "unresolved braille markers");
        }
        self.out
    }
}

/// Split text into alternating runs of whitespace and non-whitespace,
/// preserving every character.
fn tokens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut last: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let ws = c.is_whitespace();
        if last.is_some_and(|prev| prev != ws) {
            out.push(&text[start..i]);
            start = i;
        }
        last = Some(ws);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_has_no_markers() {
        let enc = encode("hello");
        assert_eq!(enc, "\u{2813}\u{2811}\u{2807}\u{2807}\u{2815}");
        assert!(!enc.contains(NUMBER_MARKER));
        assert!(!enc.contains(CAPITAL_MARKER));
        assert_eq!(decode(&enc), "hello");
    }

    #[test]
    fn digits_and_capitals_are_escaped() {
        let enc = encode("A1");
        assert_eq!(enc, "\u{2820}\u{2801}\u{283C}\u{2802}");
        assert_eq!(decode(&enc), "A1");
    }

    #[test]
    fn every_digit_needs_its_own_marker() {
        let enc = encode("2024");
        assert_eq!(enc.chars().filter(|&c| c == NUMBER_MARKER).count(), 4);
        assert_eq!(decode(&enc), "2024");
    }

    #[test]
    fn contractions_round_trip() {
        let enc = encode("the cat and the dog");
        assert!(enc.starts_with('\u{282E}'));
        assert!(enc.contains(" \u{282F} "));
        assert_eq!(decode(&enc), "the cat and the dog");
    }

    #[test]
    fn contraction_matching_ignores_case_but_not_punctuation() {
        assert_eq!(encode("The"), "\u{282E}");
        // "the," is not a whole contraction token.
        assert_eq!(decode(&encode("the,")), "the,");
    }

    #[test]
    fn contraction_inside_a_word_is_not_substituted() {
        let enc = encode("other");
        assert_eq!(enc.chars().count(), 5);
        assert_eq!(decode(&enc), "other");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(encode("a+b"), "\u{2801}+\u{2803}");
        assert_eq!(decode("\u{2801}+\u{2803}"), "a+b");
        assert_eq!(encode("é"), "é");
    }

    #[test]
    fn whitespace_is_preserved_exactly() {
        let text = "go  to\tbed\n";
        assert_eq!(decode(&encode(text)), text);
    }

    #[test]
    fn dangling_marker_at_end() {
        let glyphs = format!("\u{2801}{NUMBER_MARKER}");
        assert_eq!(decode(&glyphs), format!("a{NUMBER_MARKER}"));
        assert_eq!(decode_with(&glyphs, DanglingMarker::Drop), "a");
    }

    #[test]
    fn marker_before_wrong_table_glyph_is_flushed() {
        // A number marker in front of a letter glyph resolves nothing.
        let glyphs = format!("{NUMBER_MARKER}\u{2801}");
        assert_eq!(decode(&glyphs), format!("{NUMBER_MARKER}a"));
        let glyphs = format!("{CAPITAL_MARKER} \u{2801}");
        assert_eq!(decode_with(&glyphs, DanglingMarker::Drop), " a");
    }

    #[test]
    fn repeated_marker_replaces_the_pending_one() {
        let glyphs = format!("{CAPITAL_MARKER}{CAPITAL_MARKER}\u{2803}");
        assert_eq!(decode(&glyphs), format!("{CAPITAL_MARKER}B"));
    }

    #[test]
    fn punctuation_round_trips() {
        let text = "wait, what?! (yes/no) - it's \"fine\"; ok: done.";
        assert_eq!(decode(&encode(text)), text);
    }

    #[test]
    fn tokens_keep_everything() {
        assert_eq!(tokens(" a bc  "), vec![" ", "a", " ", "bc", "  "]);
        assert!(tokens("").is_empty());
    }
}
