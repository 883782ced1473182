//! Named encode/decode schemes as exposed to users.

use tracing::debug;

use crate::candidate::Candidate;
use crate::config::Config;
use crate::error::GlyphError;
use crate::format::truncate_chars;
use crate::{braille, dna, simple};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scheme {
    Binary,
    Hex,
    #[value(alias = "base64")]
    B64,
    #[value(alias = "character")]
    Chr,
    Braille,
    #[value(aliases = ["caesar", "caeser"])]
    Rot,
    Dna,
}

/// Result of decoding: one text, or every candidate reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(String),
    Candidates(Vec<Candidate>),
}

/// Encode `text`. `key` is only used by [`Scheme::Rot`].
pub fn encode(scheme: Scheme, text: &str, key: Option<i32>, config: &Config) -> String {
    debug!(?scheme, len = text.len(), "encode");
    match scheme {
        Scheme::Binary => simple::binary_encode(text),
        Scheme::Hex => simple::hex_encode(text),
        Scheme::B64 => simple::base64_encode(text),
        Scheme::Chr => simple::char_encode(text),
        Scheme::Braille => braille::encode(text),
        Scheme::Rot => simple::rot(text, simple::rot_key(key, config.default_rot_key)),
        Scheme::Dna => dna::encode_text(text),
    }
}

/// Decode `text`. Braille output is cut to one transport unit.
pub fn decode(
    scheme: Scheme,
    text: &str,
    key: Option<i32>,
    config: &Config,
) -> Result<Decoded, GlyphError> {
    debug!(?scheme, len = text.len(), "decode");
    let text = match scheme {
        Scheme::Binary => simple::binary_decode(text)?,
        Scheme::Hex => simple::hex_decode(text)?,
        Scheme::B64 => simple::base64_decode(text)?,
        Scheme::Chr => simple::char_decode(text)?,
        Scheme::Braille => {
            let decoded = braille::decode_with(text, config.dangling_marker);
            truncate_chars(&decoded, config.max_message_len).to_string()
        }
        Scheme::Rot => simple::rot_decode(text, simple::rot_key(key, config.default_rot_key)),
        Scheme::Dna => return Ok(Decoded::Candidates(dna::decode(text))),
    };
    Ok(Decoded::Text(text))
}
