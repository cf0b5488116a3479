//! Error types for the signature parsing pipeline.

use thiserror::Error;

/// Errors raised while splitting a signature into its name and parameter list.
///
/// Flattening and projection are total over a well-formed tree, so these are
/// the only failures the core can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Signature '{signature}' has no parameter list")]
    MissingParameterList { signature: String },

    #[error("Unbalanced parentheses in '{signature}' at byte {position}")]
    UnbalancedParentheses { signature: String, position: usize },

    #[error("Unexpected characters in '{signature}' after the parameter list at byte {position}")]
    TrailingCharacters { signature: String, position: usize },
}
