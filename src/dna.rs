//! Nucleotide codec.
//!
//! Encoding maps every 2-bit group of the input, most significant first,
//! through the canonical codebook `00→A 01→T 10→G 11→C` and groups the output
//! four symbols (one byte) at a time.
//!
//! Decoding does not assume the canonical codebook. It replays the symbol
//! stream under each of the sixteen rows of the frame table, where every row
//! hypothesizes a different codebook, and returns one [`Candidate`] per row.
//! Row [`CANONICAL_ROW`] hypothesizes the canonical codebook, so the reading
//! labelled `CANONICAL_ROW + 1` reproduces the encoder's input.
//!
//! Each row reads the whole bit stream as one big-endian integer, so leading
//! zero bytes vanish and a stream that is not byte aligned is padded at the
//! front. Invalid UTF-8 in a row's bytes is dropped.

use std::fmt;

use tracing::{debug, trace};

use crate::bits::{BitReader, BitWriter};
use crate::candidate::Candidate;

/// Number of hypothesized codebooks tried by [`decode`].
pub const FRAME_ROWS: usize = 16;

/// The frame row whose codebook equals [`Codebook::CANONICAL`].
pub const CANONICAL_ROW: usize = 5;

/// A nucleotide symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Parse an uppercase symbol. Anything else is not a nucleotide.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Bijection from 2-bit values to nucleotides, indexed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codebook([Nucleotide; 4]);

impl Codebook {
    /// `00→A 01→T 10→G 11→C`.
    pub const CANONICAL: Codebook = Codebook([
        Nucleotide::A,
        Nucleotide::T,
        Nucleotide::G,
        Nucleotide::C,
    ]);

    /// Symbol for the low two bits of `value`.
    pub fn symbol(&self, value: u8) -> Nucleotide {
        self.0[(value & 0b11) as usize]
    }

    /// 2-bit value this codebook assigns to `symbol`.
    pub fn value_of(&self, symbol: Nucleotide) -> u8 {
        self.0
            .iter()
            .position(|&n| n == symbol)
            .map_or(0, |v| v as u8)
    }
}

/// Per-symbol 2-bit values for every frame row, indexed `[symbol][row]`.
const FRAMES: [[u8; FRAME_ROWS]; 4] = [
    // A
    [0, 1, 2, 3, 0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3],
    // C
    [2, 3, 0, 1, 2, 3, 2, 2, 3, 0, 1, 3, 0, 1, 0, 1],
    // G
    [1, 2, 3, 0, 3, 2, 1, 3, 0, 2, 3, 0, 1, 0, 1, 2],
    // T
    [3, 0, 1, 2, 1, 1, 3, 0, 2, 3, 0, 1, 3, 2, 2, 0],
];

/// Value that `symbol` contributes under frame row `row`.
pub fn frame_value(symbol: Nucleotide, row: usize) -> u8 {
    FRAMES[symbol as usize][row % FRAME_ROWS]
}

/// The codebook hypothesized by frame row `row`.
pub fn frame_codebook(row: usize) -> Codebook {
    let mut book = [Nucleotide::A; 4];
    for symbol in Nucleotide::ALL {
        book[frame_value(symbol, row) as usize] = symbol;
    }
    Codebook(book)
}

/// Encode bytes as nucleotide groups of four separated by single spaces.
pub fn encode(data: &[u8]) -> String {
    let mut reader = BitReader::from_slice(data);
    let mut out = String::with_capacity(data.len() * 5);
    let mut in_group = 0;
    while let Some(pair) = reader.read_bits(2) {
        if in_group == 4 {
            out.push(' ');
            in_group = 0;
        }
        out.push(Codebook::CANONICAL.symbol(pair).to_char());
        in_group += 1;
    }
    out
}

/// Encode the UTF-8 bytes of `text` after trimming surrounding spaces.
pub fn encode_text(text: &str) -> String {
    encode(text.trim_matches(' ').as_bytes())
}

/// Decode under every frame row. Characters other than `A C G T` are skipped;
/// input without any symbol yields no candidates.
pub fn decode(text: &str) -> Vec<Candidate> {
    let symbols = symbols(text);
    if symbols.is_empty() {
        debug!("no nucleotide symbols in input");
        return Vec::new();
    }
    let candidates: Vec<Candidate> = (0..FRAME_ROWS)
        .map(|row| {
            let bytes = row_bits(&symbols, |s| frame_value(s, row)).into_minimal_be_bytes();
            trace!(row, bytes = bytes.len(), "frame row decoded");
            Candidate::new(row, utf8_ignoring_invalid(&bytes))
        })
        .collect();
    debug!(
        symbols = symbols.len(),
        candidates = candidates.len(),
        plausible = candidates.iter().filter(|c| c.plausible).count(),
        "nucleotide decode"
    );
    candidates
}

/// Decode with the canonical codebook only, keeping byte alignment. Symbols
/// past the last complete group of four are ignored.
pub fn decode_canonical(text: &str) -> Vec<u8> {
    let symbols = symbols(text);
    row_bits(&symbols, |s| Codebook::CANONICAL.value_of(s)).into_bytes()
}

fn symbols(text: &str) -> Vec<Nucleotide> {
    text.chars().filter_map(Nucleotide::from_char).collect()
}

fn row_bits(symbols: &[Nucleotide], value: impl Fn(Nucleotide) -> u8) -> BitWriter {
    let mut bits = BitWriter::with_capacity(symbols.len() * 2);
    for &symbol in symbols {
        bits.push_bits(value(symbol), 2);
    }
    bits
}

fn utf8_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
