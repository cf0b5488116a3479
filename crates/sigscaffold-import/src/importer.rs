//! `Importer` — bytecode → decompiled entries → signatures → documents.

use crate::config::ImportConfig;
use crate::error::{ImportError, LookupError};
use crate::source::{BytecodeDecompiler, DecompiledEntry, SignatureLookup};
use futures::future::join_all;
use sigscaffold_core::{assemble, ImportedContract, ResolvedSignatures};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of resolving one decompiled entry.
enum Resolved {
    Function(String),
    Event(String),
    Dropped,
}

/// Drives the collaborators and assembles both output documents.
pub struct Importer {
    lookup: Arc<dyn SignatureLookup>,
    decompiler: Option<Arc<dyn BytecodeDecompiler>>,
    config: ImportConfig,
}

impl Importer {
    pub fn new(lookup: Arc<dyn SignatureLookup>) -> Self {
        Self {
            lookup,
            decompiler: None,
            config: ImportConfig::default(),
        }
    }

    pub fn with_decompiler(mut self, decompiler: Arc<dyn BytecodeDecompiler>) -> Self {
        self.decompiler = Some(decompiler);
        self
    }

    pub fn with_config(mut self, config: ImportConfig) -> Self {
        self.config = config;
        self
    }

    /// Decompile `bytecode`, resolve its entries and assemble the documents.
    pub async fn import_bytecode(&self, bytecode: &str) -> Result<ImportedContract, ImportError> {
        let bytecode = bytecode.trim();
        if bytecode.is_empty() || bytecode == "0x" {
            return Err(ImportError::EmptyBytecode);
        }
        let decompiler = self.decompiler.as_ref().ok_or(ImportError::NoDecompiler)?;
        let entries = decompiler.abi_from_bytecode(bytecode)?;
        debug!(entries = entries.len(), "decompiled bytecode");
        self.import_entries(&entries).await
    }

    /// Resolve already-decompiled entries and assemble the documents.
    pub async fn import_entries(
        &self,
        entries: &[DecompiledEntry],
    ) -> Result<ImportedContract, ImportError> {
        let resolved = self.resolve(entries).await?;
        Ok(assemble(&resolved)?)
    }

    /// Look every entry up concurrently and keep the first candidate of each.
    ///
    /// Output order follows entry order; entries with no candidate (and no
    /// decompiler-supplied signature) are dropped.
    pub async fn resolve(
        &self,
        entries: &[DecompiledEntry],
    ) -> Result<ResolvedSignatures, ImportError> {
        let outcomes = join_all(entries.iter().map(|e| self.resolve_entry(e))).await;

        let mut resolved = ResolvedSignatures::default();
        let mut dropped = 0usize;
        for outcome in outcomes {
            match outcome? {
                Resolved::Function(sig) => resolved.functions.push(sig),
                Resolved::Event(sig) => resolved.events.push(sig),
                Resolved::Dropped => dropped += 1,
            }
        }

        info!(
            functions = resolved.functions.len(),
            events = resolved.events.len(),
            dropped,
            "resolved decompiled entries"
        );
        Ok(resolved)
    }

    async fn resolve_entry(&self, entry: &DecompiledEntry) -> Result<Resolved, ImportError> {
        match entry {
            DecompiledEntry::Function {
                selector,
                signature,
            } => {
                let candidates = self
                    .candidates(selector, self.lookup.load_functions(selector).await)?;
                Ok(pick(selector, candidates, signature.as_deref())
                    .map_or(Resolved::Dropped, Resolved::Function))
            }
            DecompiledEntry::Event { topic, signature } => {
                let candidates = self.candidates(topic, self.lookup.load_events(topic).await)?;
                Ok(pick(topic, candidates, signature.as_deref())
                    .map_or(Resolved::Dropped, Resolved::Event))
            }
            DecompiledEntry::Other => Ok(Resolved::Dropped),
        }
    }

    fn candidates(
        &self,
        hash: &str,
        result: Result<Vec<String>, LookupError>,
    ) -> Result<Vec<String>, ImportError> {
        match result {
            Ok(candidates) => Ok(candidates),
            Err(e) if self.config.skip_failed_lookups => {
                warn!(hash, error = %e, "signature lookup failed, skipping entry");
                Ok(Vec::new())
            }
            Err(source) => Err(ImportError::Lookup {
                hash: hash.to_string(),
                source,
            }),
        }
    }
}

/// First lookup candidate, else the decompiler's own reconstruction.
fn pick(hash: &str, candidates: Vec<String>, fallback: Option<&str>) -> Option<String> {
    let chosen = candidates
        .into_iter()
        .next()
        .or_else(|| fallback.map(str::to_string));
    match &chosen {
        Some(sig) => debug!(hash, signature = %sig, "resolved"),
        None => debug!(hash, "no candidate signature, dropping"),
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryLookup;
    use async_trait::async_trait;

    const TRANSFER_SELECTOR: &str = "0xa9059cbb";
    const TRANSFER_TOPIC: &str =
        "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

    fn erc20_lookup() -> Arc<MemoryLookup> {
        Arc::new(
            MemoryLookup::from_signatures(
                ["transfer(address,uint256)", "approve(address,uint256)"],
                ["Transfer(address,address,uint256)"],
            )
            .unwrap(),
        )
    }

    struct FixedDecompiler(Vec<DecompiledEntry>);

    impl BytecodeDecompiler for FixedDecompiler {
        fn abi_from_bytecode(&self, _: &str) -> Result<Vec<DecompiledEntry>, ImportError> {
            Ok(self.0.clone())
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl SignatureLookup for FailingLookup {
        async fn load_functions(&self, _: &str) -> Result<Vec<String>, LookupError> {
            Err(LookupError::RateLimited {
                service: "test".into(),
            })
        }

        async fn load_events(&self, _: &str) -> Result<Vec<String>, LookupError> {
            Ok(vec![])
        }
    }

    /// Returns several candidates; the first must win.
    struct AmbiguousLookup;

    #[async_trait]
    impl SignatureLookup for AmbiguousLookup {
        async fn load_functions(&self, _: &str) -> Result<Vec<String>, LookupError> {
            Ok(vec!["first(uint256)".into(), "second(bytes)".into()])
        }

        async fn load_events(&self, _: &str) -> Result<Vec<String>, LookupError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn resolves_in_entry_order_and_drops_unknown() {
        let importer = Importer::new(erc20_lookup());
        let entries = vec![
            DecompiledEntry::function(TRANSFER_SELECTOR),
            DecompiledEntry::event(TRANSFER_TOPIC),
            DecompiledEntry::function("0xdeadbeef"),
            DecompiledEntry::Other,
            DecompiledEntry::function("0x095ea7b3"),
        ];
        let resolved = importer.resolve(&entries).await.unwrap();
        assert_eq!(
            resolved.functions,
            vec!["transfer(address,uint256)", "approve(address,uint256)"]
        );
        assert_eq!(resolved.events, vec!["Transfer(address,address,uint256)"]);
    }

    #[tokio::test]
    async fn first_candidate_wins() {
        let importer = Importer::new(Arc::new(AmbiguousLookup));
        let resolved = importer
            .resolve(&[DecompiledEntry::function("0x12345678")])
            .await
            .unwrap();
        assert_eq!(resolved.functions, vec!["first(uint256)"]);
    }

    #[tokio::test]
    async fn decompiler_signature_is_the_fallback() {
        let importer = Importer::new(Arc::new(MemoryLookup::new()));
        let entries = vec![DecompiledEntry::Function {
            selector: "0x12345678".into(),
            signature: Some("mystery(bytes32)".into()),
        }];
        let resolved = importer.resolve(&entries).await.unwrap();
        assert_eq!(resolved.functions, vec!["mystery(bytes32)"]);
    }

    #[tokio::test]
    async fn empty_bytecode_is_rejected() {
        let importer = Importer::new(erc20_lookup())
            .with_decompiler(Arc::new(FixedDecompiler(vec![])));
        assert!(matches!(
            importer.import_bytecode("0x").await,
            Err(ImportError::EmptyBytecode)
        ));
        assert!(matches!(
            importer.import_bytecode("  ").await,
            Err(ImportError::EmptyBytecode)
        ));
    }

    #[tokio::test]
    async fn bytecode_without_decompiler_fails() {
        let importer = Importer::new(erc20_lookup());
        assert!(matches!(
            importer.import_bytecode("0x6080").await,
            Err(ImportError::NoDecompiler)
        ));
    }

    #[tokio::test]
    async fn full_bytecode_import() {
        let decompiler = FixedDecompiler(vec![
            DecompiledEntry::event(TRANSFER_TOPIC),
            DecompiledEntry::function(TRANSFER_SELECTOR),
        ]);
        let importer = Importer::new(erc20_lookup()).with_decompiler(Arc::new(decompiler));
        let out = importer.import_bytecode("0x6080604052").await.unwrap();

        // Functions come first in the ABI regardless of discovery order
        assert_eq!(out.artifact.abi.len(), 2);
        assert_eq!(out.artifact.abi[0].name, "transfer");
        assert_eq!(out.artifact.abi[1].name, "Transfer");
        assert_eq!(out.manifest.function_decorators.len(), 1);
        assert_eq!(out.manifest.event_decorators.len(), 1);
        assert_eq!(
            out.manifest.event_decorators[0].signature,
            "Transfertuple(address,address,uint256)"
        );
    }

    #[tokio::test]
    async fn failed_lookup_aborts_by_default() {
        let importer = Importer::new(Arc::new(FailingLookup));
        let err = importer
            .resolve(&[DecompiledEntry::function(TRANSFER_SELECTOR)])
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Lookup { ref hash, .. } if hash == TRANSFER_SELECTOR));
    }

    #[tokio::test]
    async fn failed_lookup_is_skipped_when_configured() {
        let config = ImportConfig {
            skip_failed_lookups: true,
            ..ImportConfig::default()
        };
        let importer = Importer::new(Arc::new(FailingLookup)).with_config(config);
        let resolved = importer
            .resolve(&[DecompiledEntry::function(TRANSFER_SELECTOR)])
            .await
            .unwrap();
        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn malformed_candidate_surfaces_as_parse_error() {
        let importer = Importer::new(Arc::new(MemoryLookup::new()));
        let entries = vec![DecompiledEntry::Function {
            selector: "0x12345678".into(),
            signature: Some("broken(uint256".into()),
        }];
        assert!(matches!(
            importer.import_entries(&entries).await,
            Err(ImportError::Parse(_))
        ));
    }
}
