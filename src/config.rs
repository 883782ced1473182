use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::braille::DanglingMarker;
use crate::error::GlyphError;

/// Runtime configuration for the codecs and the output formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum characters per transport unit.
    pub max_message_len: usize,
    /// Characters held back from every page for fences and labels.
    pub shorten_by: usize,
    /// Rotation used by the Caesar cipher when no key is given.
    pub default_rot_key: i32,
    /// How braille decoding treats an escape marker with nothing to apply to.
    pub dangling_marker: DanglingMarker,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_message_len: 2000,
            shorten_by: 20,
            default_rot_key: 13,
            dangling_marker: DanglingMarker::Literal,
        }
    }
}

impl Config {
    /// Parse a JSON document; absent keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GlyphError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GlyphError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), GlyphError> {
        if self.max_message_len == 0 {
            return Err(GlyphError::Config("max_message_len must be positive".into()));
        }
        if self.shorten_by >= self.max_message_len {
            return Err(GlyphError::Config(format!(
                "shorten_by ({}) must be smaller than max_message_len ({})",
                self.shorten_by, self.max_message_len
            )));
        }
        Ok(())
    }

    /// Usable characters per page.
    pub fn page_length(&self) -> usize {
        self.max_message_len.saturating_sub(self.shorten_by).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chat_limits() {
        let config = Config::default();
        assert_eq!(config.max_message_len, 2000);
        assert_eq!(config.page_length(), 1980);
        assert_eq!(config.default_rot_key, 13);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{"max_message_len": 500, "dangling_marker": "drop"}"#)
            .unwrap();
        assert_eq!(config.max_message_len, 500);
        assert_eq!(config.shorten_by, 20);
        assert_eq!(config.dangling_marker, DanglingMarker::Drop);
    }

    #[test]
    fn rejects_unusable_page_sizes() {
        assert!(matches!(
            Config::from_json_str(r#"{"max_message_len": 10, "shorten_by": 10}"#),
            Err(GlyphError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"max_message_len": 0}"#),
            Err(GlyphError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str("{not json"),
            Err(GlyphError::Json(_))
        ));
    }
}
