//! Static braille symbol tables.
//!
//! Letters use the standard six-dot cells. Digits use the lower-cell forms so
//! that no glyph is shared between the letter, digit and punctuation maps and
//! a single reverse lookup is never ambiguous. Whole-word contractions are
//! glyph *sequences*: either one cell reserved for contractions or the dot-5
//! prefix `⠐` followed by a letter cell.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::OnceLock;

/// Marks the next glyph as a digit.
pub const NUMBER_MARKER: char = '\u{283C}';
/// Marks the next glyph as an uppercase letter.
pub const CAPITAL_MARKER: char = '\u{2820}';

pub const LETTERS: [(char, char); 26] = [
    ('a', '\u{2801}'),
    ('b', '\u{2803}'),
    ('c', '\u{2809}'),
    ('d', '\u{2819}'),
    ('e', '\u{2811}'),
    ('f', '\u{280B}'),
    ('g', '\u{281B}'),
    ('h', '\u{2813}'),
    ('i', '\u{280A}'),
    ('j', '\u{281A}'),
    ('k', '\u{2805}'),
    ('l', '\u{2807}'),
    ('m', '\u{280D}'),
    ('n', '\u{281D}'),
    ('o', '\u{2815}'),
    ('p', '\u{280F}'),
    ('q', '\u{281F}'),
    ('r', '\u{2817}'),
    ('s', '\u{280E}'),
    ('t', '\u{281E}'),
    ('u', '\u{2825}'),
    ('v', '\u{2827}'),
    ('w', '\u{283A}'),
    ('x', '\u{282D}'),
    ('y', '\u{283D}'),
    ('z', '\u{2835}'),
];

pub const DIGITS: [(char, char); 10] = [
    ('0', '\u{2834}'),
    ('1', '\u{2802}'),
    ('2', '\u{2806}'),
    ('3', '\u{2812}'),
    ('4', '\u{2832}'),
    ('5', '\u{2822}'),
    ('6', '\u{2816}'),
    ('7', '\u{2836}'),
    ('8', '\u{2826}'),
    ('9', '\u{2814}'),
];

pub const PUNCTUATION: [(char, char); 12] = [
    ('.', '\u{2828}'),
    (',', '\u{2830}'),
    ('?', '\u{283B}'),
    ('!', '\u{2818}'),
    (';', '\u{282A}'),
    (':', '\u{2838}'),
    ('\'', '\u{2804}'),
    ('"', '\u{2808}'),
    ('-', '\u{2824}'),
    ('(', '\u{2823}'),
    (')', '\u{281C}'),
    ('/', '\u{280C}'),
];

pub const CONTRACTIONS: [(&str, &str); 32] = [
    ("and", "\u{282F}"),
    ("for", "\u{283F}"),
    ("of", "\u{2837}"),
    ("the", "\u{282E}"),
    ("with", "\u{283E}"),
    ("child", "\u{2821}"),
    ("shall", "\u{2829}"),
    ("this", "\u{2839}"),
    ("which", "\u{2831}"),
    ("out", "\u{2833}"),
    ("day", "\u{2810}\u{2819}"),
    ("ever", "\u{2810}\u{2811}"),
    ("father", "\u{2810}\u{280B}"),
    ("here", "\u{2810}\u{2813}"),
    ("know", "\u{2810}\u{2805}"),
    ("lord", "\u{2810}\u{2807}"),
    ("mother", "\u{2810}\u{280D}"),
    ("name", "\u{2810}\u{281D}"),
    ("one", "\u{2810}\u{2815}"),
    ("part", "\u{2810}\u{280F}"),
    ("question", "\u{2810}\u{281F}"),
    ("right", "\u{2810}\u{2817}"),
    ("some", "\u{2810}\u{280E}"),
    ("time", "\u{2810}\u{281E}"),
    ("under", "\u{2810}\u{2825}"),
    ("work", "\u{2810}\u{283A}"),
    ("young", "\u{2810}\u{283D}"),
    ("there", "\u{2810}\u{282E}"),
    ("character", "\u{2810}\u{2821}"),
    ("through", "\u{2810}\u{2839}"),
    ("where", "\u{2810}\u{2831}"),
    ("ought", "\u{2810}\u{2833}"),
];

/// A forward map together with its exact inverse.
#[derive(Debug)]
pub struct Bijection<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, K>,
}

impl<K, V> Bijection<K, V>
where
    K: Copy + Eq + Hash,
    V: Copy + Eq + Hash,
{
    fn from_pairs(pairs: &[(K, V)]) -> Self {
        let forward: HashMap<K, V> = pairs.iter().copied().collect();
        let reverse: HashMap<V, K> = pairs.iter().map(|&(k, v)| (v, k)).collect();
        debug_assert_eq!(forward.len(), pairs.len(), "duplicate key");
        debug_assert_eq!(reverse.len(), pairs.len(), "duplicate value");
        Self { forward, reverse }
    }

    /// Forward lookup.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key).copied()
    }

    /// Reverse lookup.
    pub fn key_of<Q>(&self, value: &Q) -> Option<K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.get(value).copied()
    }

    pub fn values(&self) -> impl Iterator<Item = V> + '_ {
        self.forward.values().copied()
    }
}

pub fn letters() -> &'static Bijection<char, char> {
    static TABLE: OnceLock<Bijection<char, char>> = OnceLock::new();
    TABLE.get_or_init(|| Bijection::from_pairs(&LETTERS))
}

pub fn digits() -> &'static Bijection<char, char> {
    static TABLE: OnceLock<Bijection<char, char>> = OnceLock::new();
    TABLE.get_or_init(|| Bijection::from_pairs(&DIGITS))
}

pub fn punctuation() -> &'static Bijection<char, char> {
    static TABLE: OnceLock<Bijection<char, char>> = OnceLock::new();
    TABLE.get_or_init(|| Bijection::from_pairs(&PUNCTUATION))
}

pub fn contractions() -> &'static Bijection<&'static str, &'static str> {
    static TABLE: OnceLock<Bijection<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| Bijection::from_pairs(&CONTRACTIONS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn glyphs_are_unique_across_maps() {
        let mut seen = HashSet::new();
        for glyph in letters()
            .values()
            .chain(digits().values())
            .chain(punctuation().values())
            .chain([NUMBER_MARKER, CAPITAL_MARKER])
        {
            assert!(seen.insert(glyph), "glyph {glyph} used twice");
        }
        assert_eq!(seen.len(), 26 + 10 + 12 + 2);
    }

    #[test]
    fn glyphs_are_braille_cells() {
        for glyph in letters().values().chain(digits().values()) {
            assert!(!glyph.is_ascii());
            assert!(('\u{2801}'..='\u{283F}').contains(&glyph));
        }
    }

    #[test]
    fn contraction_sequences_never_spell_plain_text() {
        let single: HashSet<char> = letters()
            .values()
            .chain(digits().values())
            .chain(punctuation().values())
            .collect();
        for (word, glyphs) in CONTRACTIONS {
            let first = glyphs.chars().next().unwrap();
            assert!(!single.contains(&first), "{word} starts with a plain glyph");
            assert_eq!(contractions().key_of(glyphs), Some(word));
        }
    }

    #[test]
    fn lookups_miss_without_panicking() {
        assert_eq!(letters().get(&'A'), None);
        assert_eq!(letters().key_of(&'x'), None);
        assert_eq!(digits().get(&'a'), None);
        assert_eq!(contractions().get("hello"), None);
        assert_eq!(punctuation().key_of(&NUMBER_MARKER), None);
    }
}
