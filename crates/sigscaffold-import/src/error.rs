//! Error types for the import pipeline.

use sigscaffold_core::ParseError;
use thiserror::Error;

/// Errors from a signature lookup backend.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{service} request failed: {reason}")]
    Unavailable { service: String, reason: String },

    #[error("Rate limited by {service}")]
    RateLimited { service: String },

    #[error("Invalid response from {service}: {reason}")]
    InvalidResponse { service: String, reason: String },
}

/// Errors from a full import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Empty contract bytecode provided!")]
    EmptyBytecode,

    #[error("No bytecode decompiler configured")]
    NoDecompiler,

    #[error("Decompilation failed: {0}")]
    Decompile(String),

    #[error("Signature lookup failed for {hash}: {source}")]
    Lookup {
        hash: String,
        #[source]
        source: LookupError,
    },

    #[error("Invalid signature: {0}")]
    Parse(#[from] ParseError),
}
