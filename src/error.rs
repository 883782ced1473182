use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    /// Input that does not parse under the requested scheme.
    #[error("invalid {scheme} input: {reason}")]
    InvalidInput {
        scheme: &'static str,
        reason: String,
    },

    /// Decoded bytes are not valid UTF-8 text.
    #[error("decoded {scheme} bytes are not valid UTF-8")]
    Utf8 {
        scheme: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GlyphError {
    pub(crate) fn invalid(scheme: &'static str, reason: impl Into<String>) -> Self {
        GlyphError::InvalidInput {
            scheme,
            reason: reason.into(),
        }
    }
}
