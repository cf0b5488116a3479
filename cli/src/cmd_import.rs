//! `sigscaffold import` — build manifest + artifact from literal signatures.
//!
//! Signatures file format (JSON):
//! ```json
//! {
//!   "functions": ["transfer(address,uint256)", "swap((uint256,uint256)[],address)"],
//!   "events":    ["Transfer(address,address,uint256)"]
//! }
//! ```

use anyhow::{Context, Result};
use sigscaffold_core::{assemble, ResolvedSignatures};
use tracing::info;

pub fn run(
    functions: &[String],
    events: &[String],
    file: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let mut resolved = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read signatures file '{}'", path))?;
            serde_json::from_str::<ResolvedSignatures>(&content)
                .with_context(|| format!("parse signatures file '{}'", path))?
        }
        None => ResolvedSignatures::default(),
    };
    resolved.functions.extend_from_slice(functions);
    resolved.events.extend_from_slice(events);

    if resolved.is_empty() {
        anyhow::bail!("no signatures given (use --function, --event or --file)");
    }

    let contract = assemble(&resolved)?;
    info!(
        functions = contract.artifact.functions().count(),
        events = contract.artifact.events().count(),
        "assembled documents"
    );
    crate::emit(&contract, output)
}
