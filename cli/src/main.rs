//! sigscaffold CLI — turn contract signatures into manifest/artifact documents.
//!
//! # Commands
//! ```
//! sigscaffold parse    --signature <sig> [--json]
//! sigscaffold import   [--function <sig>]... [--event <sig>]... [--file <path.json>]
//! sigscaffold resolve  --entries <path.json>
//! sigscaffold selector --signature <sig>
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sigscaffold_observability::init_tracing;

mod cmd_import;
mod cmd_parse;
mod cmd_resolve;
mod config;

#[derive(Parser)]
#[command(
    name = "sigscaffold",
    about = "Contract signature importer — sigscaffold CLI",
    long_about = "
sigscaffold: parse human-readable function/event signatures (including nested
tuples and arrays) into a decorator manifest and an ABI artifact.

ENVIRONMENT VARIABLES:
  SIGSCAFFOLD_FOURBYTE_URL   4byte.directory-compatible API base URL
  RUST_LOG                   Log filter (overrides config)
",
    version
)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single signature and show its parameter tree
    Parse {
        /// Signature, e.g. 'swap((uint256,uint256)[],address)'
        #[arg(short, long)]
        signature: String,
        /// Output both projections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build manifest + artifact documents from signatures
    Import {
        /// Function signature (repeatable)
        #[arg(long = "function")]
        functions: Vec<String>,
        /// Event signature (repeatable)
        #[arg(long = "event")]
        events: Vec<String>,
        /// JSON file with { "functions": [...], "events": [...] }
        #[arg(long)]
        file: Option<String>,
        /// Write output to this file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Resolve decompiled selectors/topics via 4byte.directory, then import
    Resolve {
        /// JSON file with decompiled entries
        #[arg(long)]
        entries: String,
        /// Write output to this file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the function selector and event topic of a signature
    Selector {
        #[arg(short, long)]
        signature: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.verbose {
        config.log.level = "debug".into();
    }
    if cli.log_json {
        config.log.json = true;
    }
    init_tracing(&config.log).context("initialise logging")?;

    match cli.command {
        Commands::Parse { signature, json } => cmd_parse::run(&signature, json),

        Commands::Import { functions, events, file, output } => {
            cmd_import::run(&functions, &events, file.as_deref(), output.as_deref())
        }

        Commands::Resolve { entries, output } => {
            cmd_resolve::run(&entries, config, output.as_deref()).await
        }

        Commands::Selector { signature } => cmd_selector(&signature),
    }
}

// ─── Shared helpers ──────────────────────────────────────────────────────────

/// Pretty-print `value` as JSON to `output`, or stdout when `None`.
pub(crate) fn emit<T: Serialize>(value: &T, output: Option<&str>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n").with_context(|| format!("write '{}'", path))?;
            eprintln!("✓ Written to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_selector(signature: &str) -> Result<()> {
    use sigscaffold_core::{fingerprint, ParsedSignature};

    let canonical = ParsedSignature::parse(signature)?.canonical();
    println!("Signature: {}", canonical);
    println!("Selector:  {}", fingerprint::selector(&canonical));
    println!("Topic:     {}", fingerprint::topic(&canonical));
    Ok(())
}
