//! Whole-signature parsing: `name(paramList)` → name + flattened units.

use crate::error::ParseError;
use crate::flatten::{flatten, write_list, ParseNode};
use crate::parser::scan_group;
use std::fmt;

/// A parsed call or event signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    /// The signature exactly as supplied.
    pub signature: String,
    /// Everything before the first `(`.
    pub name: String,
    /// Top-level parameter units in input order.
    pub params: Vec<ParseNode>,
}

impl ParsedSignature {
    /// Parse a signature such as `swap((uint256,uint256)[],address)`.
    ///
    /// Parenthesis balance is checked before scanning; the parameter list is
    /// the text between the first `(` and its matching `)`, which must end
    /// the signature.
    pub fn parse(signature: &str) -> Result<Self, ParseError> {
        let open = signature
            .find('(')
            .ok_or_else(|| ParseError::MissingParameterList {
                signature: signature.to_string(),
            })?;
        check_balance(signature)?;
        let close = matching_close(signature, open).ok_or_else(|| {
            ParseError::UnbalancedParentheses {
                signature: signature.to_string(),
                position: open,
            }
        })?;
        if close + 1 < signature.len() {
            return Err(ParseError::TrailingCharacters {
                signature: signature.to_string(),
                position: close + 1,
            });
        }

        let list = &signature[open + 1..close];
        let (group, consumed) = scan_group(list);
        if consumed < list.len() {
            return Err(ParseError::TrailingCharacters {
                signature: signature.to_string(),
                position: open + 1 + consumed,
            });
        }
        Ok(Self {
            signature: signature.to_string(),
            name: signature[..open].to_string(),
            params: flatten(&group),
        })
    }

    /// Canonical form rebuilt from the parsed units (empty fields removed).
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParsedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.params)?;
        f.write_str(")")
    }
}

/// Convenience wrapper around [`ParsedSignature::parse`].
pub fn parse_signature(signature: &str) -> Result<ParsedSignature, ParseError> {
    ParsedSignature::parse(signature)
}

/// Byte offset of the `)` closing the `(` at `open`.
fn matching_close(signature: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (pos, b) in signature.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
    }
    None
}

fn check_balance(signature: &str) -> Result<(), ParseError> {
    let mut open: Vec<usize> = Vec::new();
    for (pos, b) in signature.bytes().enumerate() {
        match b {
            b'(' => open.push(pos),
            b')' => {
                if open.pop().is_none() {
                    return Err(ParseError::UnbalancedParentheses {
                        signature: signature.to_string(),
                        position: pos,
                    });
                }
            }
            _ => {}
        }
    }
    match open.first() {
        Some(&position) => Err(ParseError::UnbalancedParentheses {
            signature: signature.to_string(),
            position,
        }),
        None => Ok(()),
    }
}
