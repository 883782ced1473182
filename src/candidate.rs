//! Numbered decode candidates.

use serde::Serialize;

/// One reading produced by an ambiguous decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// 1-based label shown to the user.
    pub index: usize,
    /// Frame row this reading was produced from.
    pub row: usize,
    /// Decoded text, possibly empty.
    pub text: String,
    /// Whether the text is mostly printable ASCII; see [`looks_like_text`].
    pub plausible: bool,
}

impl Candidate {
    pub fn new(row: usize, text: String) -> Self {
        let plausible = looks_like_text(&text);
        Self {
            index: row + 1,
            row,
            text,
            plausible,
        }
    }
}

/// At least three quarters of the characters fall in `'/'..='y'`.
pub fn looks_like_text(text: &str) -> bool {
    let mut total = 0usize;
    let mut hits = 0usize;
    for c in text.chars() {
        total += 1;
        if ('/'..='y').contains(&c) {
            hits += 1;
        }
    }
    total > 0 && hits * 4 >= total * 3
}
