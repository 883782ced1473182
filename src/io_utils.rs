use std::error::Error as StdError;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::GlyphError;

/// Error reported by the binary: a one-line message for stderr, keeping the
/// library error underneath.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct CliError {
    pub msg: String,
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

fn io_suggestion(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check the file permissions.",
        io::ErrorKind::InvalidData => "The file is not valid UTF-8 text.",
        _ => "Check the path and try again.",
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn glyph_cli_error(context: &str, err: GlyphError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Convert a configuration load failure into a CLI error naming the file.
pub fn config_cli_error(path: &Path, err: GlyphError) -> CliError {
    let msg = match &err {
        GlyphError::Io(io) => format!(
            "Cannot read config '{}': {io}. {}",
            path.display(),
            io_suggestion(io.kind())
        ),
        other => format!("Error in config '{}': {}", path.display(), cli_hint(other)),
    };
    CliError {
        msg,
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &GlyphError) -> String {
    use GlyphError::*;
    match err {
        InvalidInput { scheme, reason } => {
            format!("{reason}. Check that the message really is {scheme}-encoded.")
        }
        Utf8 { scheme, .. } => {
            format!("the {scheme} input decodes to bytes that are not text")
        }
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
        Json(e) => format!("{e}. The config must be a JSON object."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_name_the_scheme() {
        let err = GlyphError::InvalidInput {
            scheme: "hex",
            reason: "`zz` is not a hex byte".into(),
        };
        let cli = glyph_cli_error("decode failed", err);
        assert!(cli.msg.starts_with("decode failed: `zz` is not a hex byte."));
        assert!(cli.msg.contains("hex-encoded"));
        assert!(std::error::Error::source(&cli).is_some());
    }

    #[test]
    fn missing_config_mentions_path() {
        let path = Path::new("/nonexistent/glyphcode.json");
        let err = GlyphError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let cli = config_cli_error(path, err);
        assert!(cli.msg.contains("/nonexistent/glyphcode.json"));
        assert!(cli.msg.contains("Check that the file exists"));
    }
}
