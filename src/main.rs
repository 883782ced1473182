use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glyphcode::{
    digest::labelled_digest,
    format::render_candidates,
    io_utils::{config_cli_error, glyph_cli_error, simple_cli_error},
    scheme, Algorithm, Config, Decoded, GlyphError, Scheme,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Convert messages into fun encodings.
#[derive(Parser)]
#[command(name = "glyphcode", version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Transport unit size: candidate page length and braille decode limit
    #[arg(long, global = true)]
    max_len: Option<usize>,
    /// Log codec decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a message
    Encode {
        scheme: Scheme,
        /// Rotation for the rot scheme
        #[arg(long, allow_negative_numbers = true)]
        key: Option<i32>,
        /// Message words; read from stdin when absent
        message: Vec<String>,
    },
    /// Decode a message
    Decode {
        scheme: Scheme,
        /// Rotation for the rot scheme
        #[arg(long, allow_negative_numbers = true)]
        key: Option<i32>,
        /// Print nucleotide candidates as JSON
        #[arg(long)]
        json: bool,
        /// Message words; read from stdin when absent
        message: Vec<String>,
    },
    /// Hash a message
    Hash {
        algorithm: Algorithm,
        /// Message words; read from stdin when absent
        message: Vec<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(&cli)?;

    match cli.command {
        Command::Encode {
            scheme,
            key,
            message,
        } => {
            let text = message_text(message)?;
            println!("{}", scheme::encode(scheme, &text, key, &config));
        }
        Command::Decode {
            scheme,
            key,
            json,
            message,
        } => {
            let text = message_text(message)?;
            let decoded = scheme::decode(scheme, &text, key, &config)
                .map_err(|e| glyph_cli_error("decode failed", e))?;
            match decoded {
                Decoded::Text(text) => println!("{text}"),
                Decoded::Candidates(candidates) => {
                    if candidates.is_empty() {
                        warn!("input contains no nucleotide symbols");
                    }
                    if json {
                        let out = serde_json::to_string_pretty(&candidates)
                            .map_err(|e| glyph_cli_error("rendering JSON", GlyphError::from(e)))?;
                        println!("{out}");
                    } else {
                        print_pages(&render_candidates(&candidates, &config));
                    }
                }
            }
        }
        Command::Hash { algorithm, message } => {
            let text = message_text(message)?;
            println!("{}", labelled_digest(algorithm, &text));
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path).map_err(|e| config_cli_error(path, e))?,
        None => Config::default(),
    };
    if let Some(max_len) = cli.max_len {
        config.max_message_len = max_len;
    }
    config
        .validate()
        .map_err(|e| glyph_cli_error("invalid options", e))?;
    Ok(config)
}

/// Join the message words, or read the whole of stdin when none were given.
fn message_text(words: Vec<String>) -> Result<String, Box<dyn std::error::Error>> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| simple_cli_error(&format!("reading stdin: {e}")))?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn print_pages(pages: &[String]) {
    for page in pages {
        println!("{page}");
    }
}
