//! Projection of flattened parameter units into the two output schemas.
//!
//! Names are synthetic: `param1`, `param2`, … by position within a sibling
//! list. Numbering restarts at 1 inside every tuple.

use crate::flatten::ParseNode;
use serde::{Deserialize, Serialize};

/// Decorator-schema parameter node. Scaffolding for manual annotation;
/// type information is intentionally not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDecorator {
    pub name: String,
    pub description: String,
    pub recommended_types: Vec<String>,
    /// `None` for a leaf, the projected children for a tuple.
    pub parameters: Option<Vec<ParamDecorator>>,
}

/// Artifact-schema (ABI) parameter node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactObject {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub internal_type: String,
    /// `None` for a leaf, never `None` for a tuple.
    pub components: Option<Vec<ArtifactObject>>,
    /// Indexing cannot be inferred from a signature string; always `None`.
    pub indexed: Option<bool>,
}

/// Maps one sibling list of units to output nodes.
pub trait Projector {
    type Output;

    /// Project a single unit sitting at zero-based `index` in its list.
    fn project_unit(&self, unit: &ParseNode, index: usize) -> Self::Output;

    fn project(&self, units: &[ParseNode]) -> Vec<Self::Output> {
        units
            .iter()
            .enumerate()
            .map(|(i, unit)| self.project_unit(unit, i))
            .collect()
    }
}

/// Synthetic 1-based parameter name.
pub fn param_name(index: usize) -> String {
    format!("param{}", index + 1)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratorProjector;

impl Projector for DecoratorProjector {
    type Output = ParamDecorator;

    fn project_unit(&self, unit: &ParseNode, index: usize) -> ParamDecorator {
        let parameters = match unit {
            ParseNode::Leaf(_) => None,
            ParseNode::Group { children, .. } => Some(self.project(children)),
        };
        ParamDecorator {
            name: param_name(index),
            description: String::new(),
            recommended_types: Vec::new(),
            parameters,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactProjector;

impl Projector for ArtifactProjector {
    type Output = ArtifactObject;

    fn project_unit(&self, unit: &ParseNode, index: usize) -> ArtifactObject {
        let (ty, components) = match unit {
            ParseNode::Leaf(token) => (token.clone(), None),
            ParseNode::Group {
                children,
                array_suffix,
            } => (format!("tuple{array_suffix}"), Some(self.project(children))),
        };
        ArtifactObject {
            name: param_name(index),
            internal_type: ty.clone(),
            ty,
            components,
            indexed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::parse_signature;

    fn params(sig: &str) -> Vec<ParseNode> {
        parse_signature(sig).unwrap().params
    }

    fn check_artifact(obj: &ArtifactObject, unit: &ParseNode) {
        assert_eq!(obj.ty, obj.internal_type);
        assert!(obj.indexed.is_none());
        assert_eq!(obj.components.is_some(), unit.is_group());
        if let (Some(components), ParseNode::Group { children, .. }) = (&obj.components, unit) {
            assert_eq!(components.len(), children.len());
            for (c, u) in components.iter().zip(children) {
                check_artifact(c, u);
            }
        }
    }

    fn check_decorator(dec: &ParamDecorator, unit: &ParseNode) {
        assert_eq!(dec.parameters.is_some(), unit.is_group());
        assert!(dec.description.is_empty());
        assert!(dec.recommended_types.is_empty());
        if let (Some(children_dec), ParseNode::Group { children, .. }) = (&dec.parameters, unit) {
            assert_eq!(children_dec.len(), unit.child_count());
            for (d, u) in children_dec.iter().zip(children) {
                check_decorator(d, u);
            }
        }
    }

    #[test]
    fn numbering_is_positional_and_one_based() {
        let out = DecoratorProjector.project(&params("f(a,b,c)"));
        let names: Vec<&str> = out.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["param1", "param2", "param3"]);
    }

    #[test]
    fn numbering_restarts_inside_tuples() {
        let out = ArtifactProjector.project(&params("foo((uint256,address)[],bool)"));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "param1");
        assert_eq!(out[0].ty, "tuple[]");
        let components = out[0].components.as_ref().unwrap();
        assert_eq!(components[0].name, "param1");
        assert_eq!(components[0].ty, "uint256");
        assert_eq!(components[1].name, "param2");
        assert_eq!(components[1].ty, "address");
        assert_eq!(out[1].name, "param2");
        assert_eq!(out[1].ty, "bool");
    }

    #[test]
    fn artifact_invariants_hold_on_deep_nesting() {
        let units = params("deep(uint8,((bool,bytes32[2])[3],string)[],())");
        let out = ArtifactProjector.project(&units);
        for (obj, unit) in out.iter().zip(&units) {
            check_artifact(obj, unit);
        }
        assert_eq!(out[2].ty, "tuple");
        assert_eq!(out[2].components, Some(vec![]));
    }

    #[test]
    fn decorator_invariants_hold_on_deep_nesting() {
        let units = params("deep(uint8,((bool,bytes32[2])[3],string)[],())");
        let out = DecoratorProjector.project(&units);
        for (dec, unit) in out.iter().zip(&units) {
            check_decorator(dec, unit);
        }
    }

    #[test]
    fn serialises_with_explicit_nulls() {
        let out = ArtifactProjector.project(&params("f(address)"));
        let v = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "name": "param1",
                "type": "address",
                "internalType": "address",
                "components": null,
                "indexed": null
            })
        );

        let out = DecoratorProjector.project(&params("f(address)"));
        let v = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "name": "param1",
                "description": "",
                "recommendedTypes": [],
                "parameters": null
            })
        );
    }
}
