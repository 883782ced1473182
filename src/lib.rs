//! Reversible text transforms: braille transliteration with whole-word
//! contractions, a nucleotide codec with a brute-force multi-codebook
//! decoder, and the simple byte encodings and digests that sit beside them.

pub mod bits;
pub mod braille;
pub mod braille_table;
pub mod candidate;
pub mod config;
pub mod digest;
pub mod dna;
mod error;
pub mod format;
pub mod io_utils;
pub mod scheme;
pub mod simple;

pub use braille::DanglingMarker;
pub use candidate::{looks_like_text, Candidate};
pub use config::Config;
pub use digest::{hex_digest, Algorithm};
pub use error::GlyphError;
pub use format::{pagify, render_candidates, truncate_chars};
pub use scheme::{Decoded, Scheme};

/// Encode text into braille glyphs.
pub fn encode_braille(text: &str) -> String {
    braille::encode(text)
}

/// Decode braille glyphs, emitting unresolved markers literally.
pub fn decode_braille(glyphs: &str) -> String {
    braille::decode(glyphs)
}

/// Encode bytes as space-separated groups of four nucleotides.
pub fn encode_dna(data: &[u8]) -> String {
    dna::encode(data)
}

/// Every candidate reading of a nucleotide string, labelled 1 to 16.
pub fn decode_dna(symbols: &str) -> Vec<Candidate> {
    dna::decode(symbols)
}
