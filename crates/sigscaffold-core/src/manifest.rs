//! Manifest document: decorator scaffolding for imported functions and events.

use crate::projector::{DecoratorProjector, ParamDecorator, Projector};
use crate::signature::ParsedSignature;
use serde::{Deserialize, Serialize};

pub const MANIFEST_NAME: &str = "Imported Contract";
pub const MANIFEST_DESCRIPTION: &str = "Imported smart contract.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDecorator {
    pub signature: String,
    pub name: String,
    pub description: String,
    pub parameter_decorators: Vec<ParamDecorator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecorator {
    pub signature: String,
    pub name: String,
    pub description: String,
    pub parameter_decorators: Vec<ParamDecorator>,
    pub return_decorators: Vec<ParamDecorator>,
    pub emittable_events: Vec<String>,
}

/// Never populated from a signature; present so the document shape is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDecorator {
    pub description: String,
    pub parameter_decorators: Vec<ParamDecorator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub implements: Vec<String>,
    pub event_decorators: Vec<EventDecorator>,
    pub constructor_decorators: Vec<ConstructorDecorator>,
    pub function_decorators: Vec<FunctionDecorator>,
}

/// The `signature` value written into a decorator.
///
/// Every `(` in the original string is replaced with `tuple(`, the outer
/// call parenthesis included, so `transfer(address,uint256)` becomes
/// `transfertuple(address,uint256)`. Downstream consumers depend on this
/// exact text; do not "fix" it here.
pub fn decorator_signature(signature: &str) -> String {
    signature.replace('(', "tuple(")
}

pub struct ManifestAssembler;

impl ManifestAssembler {
    pub fn assemble(functions: &[ParsedSignature], events: &[ParsedSignature]) -> ManifestDocument {
        ManifestDocument {
            name: MANIFEST_NAME.to_string(),
            description: MANIFEST_DESCRIPTION.to_string(),
            tags: Vec::new(),
            implements: Vec::new(),
            event_decorators: events.iter().map(Self::event_decorator).collect(),
            constructor_decorators: Vec::new(),
            function_decorators: functions.iter().map(Self::function_decorator).collect(),
        }
    }

    pub fn event_decorator(sig: &ParsedSignature) -> EventDecorator {
        EventDecorator {
            signature: decorator_signature(&sig.signature),
            name: sig.name.clone(),
            description: String::new(),
            parameter_decorators: DecoratorProjector.project(&sig.params),
        }
    }

    pub fn function_decorator(sig: &ParsedSignature) -> FunctionDecorator {
        FunctionDecorator {
            signature: decorator_signature(&sig.signature),
            name: sig.name.clone(),
            description: String::new(),
            parameter_decorators: DecoratorProjector.project(&sig.params),
            return_decorators: Vec::new(),
            emittable_events: Vec::new(),
        }
    }
}
