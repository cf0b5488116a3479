//! Artifact document: a compiler-style artifact whose ABI is rebuilt from signatures.

use crate::projector::{ArtifactObject, ArtifactProjector, Projector};
use crate::signature::ParsedSignature;
use serde::{Deserialize, Serialize};

pub const CONTRACT_NAME: &str = "ImportedContract";
pub const SOURCE_NAME: &str = "ImportedContract.sol";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiEntryKind {
    Function,
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    pub inputs: Vec<ArtifactObject>,
    pub outputs: Vec<ArtifactObject>,
    /// Not recoverable from a signature string.
    pub state_mutability: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AbiEntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDocument {
    pub contract_name: String,
    pub source_name: String,
    pub bytecode: String,
    pub deployed_bytecode: String,
    pub link_references: Option<serde_json::Value>,
    pub deployed_link_references: Option<serde_json::Value>,
    /// Functions first, then events, each in input order.
    pub abi: Vec<AbiEntry>,
}

impl ArtifactDocument {
    pub fn functions(&self) -> impl Iterator<Item = &AbiEntry> {
        self.abi.iter().filter(|e| e.kind == AbiEntryKind::Function)
    }

    pub fn events(&self) -> impl Iterator<Item = &AbiEntry> {
        self.abi.iter().filter(|e| e.kind == AbiEntryKind::Event)
    }
}

pub struct ArtifactAssembler;

impl ArtifactAssembler {
    pub fn assemble(functions: &[ParsedSignature], events: &[ParsedSignature]) -> ArtifactDocument {
        let abi = functions
            .iter()
            .map(|f| Self::abi_entry(f, AbiEntryKind::Function))
            .chain(events.iter().map(|e| Self::abi_entry(e, AbiEntryKind::Event)))
            .collect();

        ArtifactDocument {
            contract_name: CONTRACT_NAME.to_string(),
            source_name: SOURCE_NAME.to_string(),
            bytecode: String::new(),
            deployed_bytecode: String::new(),
            link_references: None,
            deployed_link_references: None,
            abi,
        }
    }

    pub fn abi_entry(sig: &ParsedSignature, kind: AbiEntryKind) -> AbiEntry {
        AbiEntry {
            inputs: ArtifactProjector.project(&sig.params),
            outputs: Vec::new(),
            state_mutability: None,
            name: sig.name.clone(),
            kind,
        }
    }
}
