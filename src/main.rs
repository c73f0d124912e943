//! CaesarCrypt command line.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt / decrypt with a known key
//! caesarcrypt encode --key 3 "charline1337"
//! caesarcrypt decode --key 3 "FKDUOLQH4660"
//!
//! # Recover the key with the system word list
//! caesarcrypt auto "KROG WKH OLQH"
//!
//! # Read the message from stdin, emit JSON
//! echo "KROG WKH OLQH" | caesarcrypt --json auto --dict ./words.txt
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use caesarcrypt::dictionary::DEFAULT_WORD_LIST_PATH;
use caesarcrypt::key::{parse_key, FALLBACK_KEY};
use caesarcrypt::search::DEFAULT_REQUIREMENT;
use caesarcrypt::{CaesarCrypt, Direction, WordList};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Caesar shift cipher over letters and digits
#[derive(Parser, Debug)]
#[command(name = "caesarcrypt")]
#[command(about = "Caesar shift cipher with automatic key recovery")]
#[command(version)]
struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "CAESARCRYPT_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a message with a known key
    Encode {
        /// Shift key; non-numeric input falls back to 3
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,
        /// Message to encrypt (read from stdin if omitted)
        message: Option<String>,
    },
    /// Decrypt a message with a known key
    Decode {
        /// Shift key; non-numeric input falls back to 3
        #[arg(short, long, allow_hyphen_values = true)]
        key: String,
        /// Message to decrypt (read from stdin if omitted)
        message: Option<String>,
    },
    /// Recover the key of a message by dictionary search
    Auto {
        /// Starting requirement level (1.0 demands every word be recognised)
        #[arg(short, long, default_value_t = DEFAULT_REQUIREMENT)]
        require: f64,
        /// Word list, one word per line
        #[arg(short, long, env = "CAESARCRYPT_DICT", default_value = DEFAULT_WORD_LIST_PATH)]
        dict: PathBuf,
        /// Message to decrypt (read from stdin if omitted)
        message: Option<String>,
    },
}

#[derive(Serialize)]
struct Transformed<'a> {
    direction: Direction,
    key: i64,
    input: &'a str,
    output: String,
}

#[derive(Serialize)]
struct NotFound {
    found: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Command::Encode { key, message } => {
            transform(Direction::Encode, &key, message, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Decode { key, message } => {
            transform(Direction::Decode, &key, message, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Auto {
            require,
            dict,
            message,
        } => auto(require, &dict, message, cli.json),
    }
}

fn transform(
    direction: Direction,
    key: &str,
    message: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let key = resolve_key(key);
    let input = read_message(message)?;
    let output = caesarcrypt::shift(direction, key, &input);

    if json {
        let out = Transformed {
            direction,
            key,
            input: &input,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn auto(
    require: f64,
    dict: &Path,
    message: Option<String>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let words = WordList::from_path(dict)
        .with_context(|| format!("loading dictionary {}", dict.display()))?;
    let cc = CaesarCrypt::new(&words).with_requirement(require)?;
    let input = read_message(message)?;

    match cc.auto_decrypt(&input)? {
        Some(found) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                println!("{}", found.plaintext);
                println!("Key: {}", found.key);
                println!("Consistent words found: {}", found.valid_words);
                println!("Reliability: {}% ({})", found.percent, found.reliability);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(&NotFound { found: false })?);
            } else {
                println!("No decryption found");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Parses `input` as a key, falling back to [`FALLBACK_KEY`] with a warning.
fn resolve_key(input: &str) -> i64 {
    parse_key(input).unwrap_or_else(|err| {
        tracing::warn!(%err, fallback = FALLBACK_KEY, "using default key");
        FALLBACK_KEY
    })
}

fn read_message(message: Option<String>) -> anyhow::Result<String> {
    match message {
        Some(m) => Ok(m),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading message from stdin")?;
            // a trailing newline from echo/pipes is not part of the message
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}
