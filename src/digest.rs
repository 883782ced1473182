//! Hex digests of text.

use std::fmt;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase hex digest of the UTF-8 bytes of `text`.
pub fn hex_digest(algorithm: Algorithm, text: &str) -> String {
    match algorithm {
        Algorithm::Md5 => digest_hex::<Md5>(text.as_bytes()),
        Algorithm::Sha1 => digest_hex::<Sha1>(text.as_bytes()),
        Algorithm::Sha256 => digest_hex::<Sha256>(text.as_bytes()),
        Algorithm::Sha512 => digest_hex::<Sha512>(text.as_bytes()),
    }
}

/// Digest formatted for chat: a bold label line, then the hex digest.
pub fn labelled_digest(algorithm: Algorithm, text: &str) -> String {
    format!("**{}**\n{}", algorithm.label(), hex_digest(algorithm, text))
}

fn digest_hex<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}
