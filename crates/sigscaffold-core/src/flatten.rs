//! Second pass over the raw scan: split text runs into leaf tokens.
//!
//! The scanner cannot know whether a parenthesis will show up later inside
//! what looks like a single comma-joined run, so splitting is deferred to
//! this pass over the finished tree.

use crate::parser::{RawGroup, RawNode};
use std::fmt;

/// A flattened parameter unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    /// A single type token, e.g. `uint256` or `address[3]`. Never split further.
    Leaf(String),
    /// A tuple with its own flattened children.
    Group {
        children: Vec<ParseNode>,
        array_suffix: String,
    },
}

impl ParseNode {
    pub fn is_group(&self) -> bool {
        matches!(self, ParseNode::Group { .. })
    }

    /// Number of direct children (0 for a leaf).
    pub fn child_count(&self) -> usize {
        match self {
            ParseNode::Leaf(_) => 0,
            ParseNode::Group { children, .. } => children.len(),
        }
    }
}

/// Renders the canonical type string: `uint256`, `(uint256,address)[]`.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNode::Leaf(token) => f.write_str(token),
            ParseNode::Group {
                children,
                array_suffix,
            } => {
                f.write_str("(")?;
                write_list(f, children)?;
                write!(f, "){array_suffix}")
            }
        }
    }
}

/// Write `units` comma-separated, without surrounding parentheses.
pub(crate) fn write_list(f: &mut fmt::Formatter<'_>, units: &[ParseNode]) -> fmt::Result {
    for (i, unit) in units.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{unit}")?;
    }
    Ok(())
}

/// Flatten the items of a scanned group into an ordered unit list.
pub fn flatten(group: &RawGroup) -> Vec<ParseNode> {
    let mut units = Vec::new();
    for item in &group.items {
        flatten_into(item, &mut units);
    }
    units
}

fn flatten_into(node: &RawNode, out: &mut Vec<ParseNode>) {
    match node {
        RawNode::Text(run) => out.extend(
            run.split(',')
                .filter(|token| !token.is_empty())
                .map(|token| ParseNode::Leaf(token.to_string())),
        ),
        RawNode::Group(group) => out.push(ParseNode::Group {
            children: flatten(group),
            array_suffix: group.array_suffix.clone(),
        }),
    }
}
