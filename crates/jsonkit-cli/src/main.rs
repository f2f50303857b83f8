//! `jsonkit` CLI — validate, minify, and quote JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate JSON (stdin → "ok" or a positioned error)
//! echo '{"a":1}' | jsonkit check
//!
//! # Reject documents nested deeper than 16 levels
//! jsonkit check -i payload.json --max-depth 16
//!
//! # Re-emit a document without insignificant whitespace
//! jsonkit fmt -i pretty.json -o compact.json
//!
//! # Turn raw text into a JSON string literal
//! printf 'line one\nline two' | jsonkit quote
//! ```
//!
//! Set `RUST_LOG=debug` to see decoder diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonkit_core::{DecodeOptions, DEFAULT_MAX_DEPTH};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jsonkit", version, about = "Self-contained JSON codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the input is a single valid JSON document
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum container nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Decode the input and re-encode it as minimal JSON
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Maximum container nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Encode the raw input text as one JSON string literal
    Quote {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, max_depth } => {
            let text = read_input(input.as_deref())?;
            let options = DecodeOptions::default().with_max_depth(max_depth);
            jsonkit_core::decode_with(&text, &options)
                .with_context(|| format!("Invalid JSON in {}", describe(input.as_deref())))?;
            println!("ok");
        }
        Commands::Fmt {
            input,
            output,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let options = DecodeOptions::default().with_max_depth(max_depth);
            let value = jsonkit_core::decode_with(&text, &options)
                .with_context(|| format!("Invalid JSON in {}", describe(input.as_deref())))?;
            write_output(output.as_deref(), &jsonkit_core::encode(&value))?;
        }
        Commands::Quote { input, output } => {
            let text = read_input(input.as_deref())?;
            write_output(output.as_deref(), &jsonkit_core::encode_str(&text))?;
        }
    }

    Ok(())
}

fn describe(path: Option<&str>) -> &str {
    path.unwrap_or("<stdin>")
}

fn read_input(path: Option<&str>) -> Result<String> {
    let text = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    log::debug!("read {} bytes from {}", text.len(), describe(path));
    Ok(text)
}

/// Write `content` followed by a newline.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
