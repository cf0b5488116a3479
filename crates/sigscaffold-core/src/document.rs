//! Top-level import result: both documents built from one signature set.

use crate::artifact::{ArtifactAssembler, ArtifactDocument};
use crate::error::ParseError;
use crate::manifest::{ManifestAssembler, ManifestDocument};
use crate::signature::ParsedSignature;
use serde::{Deserialize, Serialize};

/// Resolved function and event signatures, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSignatures {
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
}

impl ResolvedSignatures {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.events.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedContract {
    pub manifest: ManifestDocument,
    pub artifact: ArtifactDocument,
}

/// Parse every signature once and project it into both documents.
///
/// Fails on the first malformed signature.
pub fn assemble(resolved: &ResolvedSignatures) -> Result<ImportedContract, ParseError> {
    let functions = parse_all(&resolved.functions)?;
    let events = parse_all(&resolved.events)?;

    Ok(ImportedContract {
        manifest: ManifestAssembler::assemble(&functions, &events),
        artifact: ArtifactAssembler::assemble(&functions, &events),
    })
}

fn parse_all(signatures: &[String]) -> Result<Vec<ParsedSignature>, ParseError> {
    signatures.iter().map(|s| ParsedSignature::parse(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_bad_signature_aborts() {
        let resolved = ResolvedSignatures {
            functions: vec!["ok(uint256)".into(), "broken(".into()],
            events: vec![],
        };
        assert!(matches!(
            assemble(&resolved),
            Err(ParseError::UnbalancedParentheses { position: 6, .. })
        ));
    }

    #[test]
    fn missing_lists_deserialise_as_empty() {
        let resolved: ResolvedSignatures =
            serde_json::from_str(r#"{"functions":["f()"]}"#).unwrap();
        assert_eq!(resolved.functions, vec!["f()"]);
        assert!(resolved.events.is_empty());
        assert!(!resolved.is_empty());
    }

    #[test]
    fn empty_input_gives_empty_documents() {
        let out = assemble(&ResolvedSignatures::default()).unwrap();
        assert!(out.artifact.abi.is_empty());
        assert!(out.manifest.function_decorators.is_empty());
        assert!(out.manifest.event_decorators.is_empty());
    }
}
