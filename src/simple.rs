//! Byte-level encodings and the Caesar cipher.
//!
//! Encoders are infallible. Decoders reject malformed input with
//! [`GlyphError::InvalidInput`] and never return partial output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::GlyphError;

/// Each UTF-8 byte as eight bits, space separated.
pub fn binary_encode(text: &str) -> String {
    text.bytes()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`binary_encode`]. Whitespace is ignored.
pub fn binary_decode(text: &str) -> Result<String, GlyphError> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if let Some(bad) = digits.iter().find(|&&b| b != b'0' && b != b'1') {
        return Err(GlyphError::invalid(
            "binary",
            format!("unexpected character `{}`", char::from(*bad)),
        ));
    }
    if digits.len() % 8 != 0 {
        return Err(GlyphError::invalid(
            "binary",
            format!("{} bits is not a whole number of bytes", digits.len()),
        ));
    }
    let bytes = digits
        .chunks_exact(8)
        .map(|bits| bits.iter().fold(0u8, |acc, &b| (acc << 1) | (b - b'0')))
        .collect();
    utf8("binary", bytes)
}

/// Each UTF-8 byte as unpadded lowercase hex, space separated.
pub fn hex_encode(text: &str) -> String {
    text.bytes()
        .map(|b| format!("{b:x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`hex_encode`]; tokens are whitespace separated bytes.
pub fn hex_decode(text: &str) -> Result<String, GlyphError> {
    let bytes = text
        .split_whitespace()
        .map(|token| {
            u8::from_str_radix(token, 16)
                .map_err(|_| GlyphError::invalid("hex", format!("`{token}` is not a hex byte")))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    utf8("hex", bytes)
}

pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text)
}

pub fn base64_decode(text: &str) -> Result<String, GlyphError> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|e| GlyphError::invalid("base64", e.to_string()))?;
    utf8("base64", bytes)
}

/// Each character as its decimal code point, space separated.
pub fn char_encode(text: &str) -> String {
    text.chars()
        .map(|c| u32::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`char_encode`]; the characters are concatenated.
pub fn char_decode(text: &str) -> Result<String, GlyphError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    GlyphError::invalid("character", format!("`{token}` is not a code point"))
                })
        })
        .collect()
}

/// Use `default` when no key, or a zero key, is given.
pub fn rot_key(key: Option<i32>, default: i32) -> i32 {
    match key {
        None | Some(0) => default,
        Some(k) => k,
    }
}

/// Rotate ASCII letters forward by `key` places, preserving case.
pub fn rot(text: &str, key: i32) -> String {
    let shift = key.rem_euclid(26) as u8;
    text.chars()
        .map(|c| match c {
            'a'..='z' => (b'a' + (c as u8 - b'a' + shift) % 26) as char,
            'A'..='Z' => (b'A' + (c as u8 - b'A' + shift) % 26) as char,
            _ => c,
        })
        .collect()
}

pub fn rot_decode(text: &str, key: i32) -> String {
    rot(text, key.wrapping_neg())
}

fn utf8(scheme: &'static str, bytes: Vec<u8>) -> Result<String, GlyphError> {
    String::from_utf8(bytes).map_err(|source| GlyphError::Utf8 { scheme, source })
}
