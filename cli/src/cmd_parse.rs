//! `sigscaffold parse` — show how a single signature is decomposed.

use anyhow::Result;
use sigscaffold_core::{
    fingerprint::{selector, topic},
    projector::param_name,
    ArtifactProjector, DecoratorProjector, ParseNode, ParsedSignature, Projector,
};

pub fn run(signature: &str, as_json: bool) -> Result<()> {
    let parsed = ParsedSignature::parse(signature)?;
    let canonical = parsed.canonical();

    if as_json {
        let out = serde_json::json!({
            "name": parsed.name,
            "canonical": canonical,
            "selector": selector(&canonical),
            "topic": topic(&canonical),
            "parameterDecorators": DecoratorProjector.project(&parsed.params),
            "inputs": ArtifactProjector.project(&parsed.params),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Name:      {}", parsed.name);
    println!("Canonical: {}", canonical);
    println!("Selector:  {}", selector(&canonical));
    println!("Topic:     {}", topic(&canonical));
    println!("Params:    {}", parsed.params.len());
    print_units(&parsed.params, 1);
    Ok(())
}

fn print_units(units: &[ParseNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for (i, unit) in units.iter().enumerate() {
        match unit {
            ParseNode::Leaf(token) => println!("{indent}- {}: {}", param_name(i), token),
            ParseNode::Group {
                children,
                array_suffix,
            } => {
                println!("{indent}- {}: tuple{}", param_name(i), array_suffix);
                print_units(children, depth + 1);
            }
        }
    }
}
