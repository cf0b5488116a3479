//! Collaborator traits: the decompiler that finds selectors/topics in
//! bytecode, and the lookup service that maps them to candidate signatures.
//!
//! Neither is implemented by the core; callers plug in their own backends.

use crate::error::{ImportError, LookupError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One entry recovered from contract bytecode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DecompiledEntry {
    Function {
        /// 4-byte selector, `0x`-prefixed.
        selector: String,
        /// Signature reconstructed by the decompiler, if it managed one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        signature: Option<String>,
    },
    Event {
        /// 32-byte topic hash, `0x`-prefixed.
        #[serde(alias = "hash")]
        topic: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        signature: Option<String>,
    },
    /// Anything else the decompiler reports (fallback, receive, …). Always dropped.
    #[serde(other)]
    Other,
}

impl DecompiledEntry {
    pub fn function(selector: impl Into<String>) -> Self {
        DecompiledEntry::Function {
            selector: selector.into(),
            signature: None,
        }
    }

    pub fn event(topic: impl Into<String>) -> Self {
        DecompiledEntry::Event {
            topic: topic.into(),
            signature: None,
        }
    }
}

/// Best-effort bytecode decompilation.
pub trait BytecodeDecompiler: Send + Sync {
    /// Recover function and event entries from hex bytecode.
    /// May legitimately return entries without signatures.
    fn abi_from_bytecode(&self, bytecode: &str) -> Result<Vec<DecompiledEntry>, ImportError>;
}

/// Resolves selectors and topics to candidate signature strings.
///
/// Candidates are returned in the backend's preference order; the importer
/// only ever uses the first one.
#[async_trait]
pub trait SignatureLookup: Send + Sync {
    async fn load_functions(&self, selector: &str) -> Result<Vec<String>, LookupError>;

    async fn load_events(&self, topic: &str) -> Result<Vec<String>, LookupError>;
}
