//! `sigscaffold resolve` — resolve decompiled entries via 4byte.directory.
//!
//! Entries file format (JSON), as produced by a bytecode decompiler:
//! ```json
//! [
//!   { "type": "function", "selector": "0xa9059cbb" },
//!   { "type": "event", "topic": "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef" }
//! ]
//! ```

use crate::config::CliConfig;
use anyhow::{Context, Result};
use sigscaffold_import::{DecompiledEntry, FourByteLookup, Importer};
use std::sync::Arc;
use tracing::info;

pub async fn run(entries_path: &str, config: CliConfig, output: Option<&str>) -> Result<()> {
    let content = std::fs::read_to_string(entries_path)
        .with_context(|| format!("read entries file '{}'", entries_path))?;
    let entries: Vec<DecompiledEntry> = serde_json::from_str(&content)
        .with_context(|| format!("parse entries file '{}'", entries_path))?;

    let lookup = FourByteLookup::new(&config.import.lookup)?;
    let importer = Importer::new(Arc::new(lookup)).with_config(config.import);

    let contract = importer.import_entries(&entries).await?;
    info!(
        entries = entries.len(),
        functions = contract.artifact.functions().count(),
        events = contract.artifact.events().count(),
        "resolved entries"
    );
    crate::emit(&contract, output)
}
