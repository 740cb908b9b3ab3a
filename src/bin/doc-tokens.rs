//! Command-line interface for doc-tokens
//! This binary tokenizes a doc comment body and prints the tokens in a chosen format.
//!
//! Usage:
//!   doc-tokens tokenize [`<text>`] [--format `<format>`]  - Tokenize text (or stdin when omitted)
//!   doc-tokens list-formats                             - List all available formats
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default: warn).

use clap::{Arg, Command};
use doc_tokens::doc::formats::FormatRegistry;
use doc_tokens::doc::processor::{process, ProcessingError};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("doc-tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize documentation comment text into text, line breaks and inline tags")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a doc comment body")
                .arg(
                    Arg::new("text")
                        .help("Comment text to tokenize; read from stdin when omitted")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'simple', 'json', 'raw')")
                        .default_value("simple"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => {
            let text = tokenize_matches.get_one::<String>("text");
            let format = tokenize_matches.get_one::<String>("format").unwrap();
            if let Err(e) = handle_tokenize_command(text, format) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the tokenize command
fn handle_tokenize_command(text: Option<&String>, format: &str) -> Result<(), ProcessingError> {
    let source = match text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let output = process(&source, format)?;
    print!("{}", output);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
