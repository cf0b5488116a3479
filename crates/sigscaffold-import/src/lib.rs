//! # sigscaffold-import
//!
//! Import pipeline around `sigscaffold-core`.
//!
//! A `BytecodeDecompiler` recovers selectors and topics from contract
//! bytecode, a `SignatureLookup` maps each to candidate signatures, and the
//! `Importer` keeps the first candidate per entry before assembling the
//! manifest and artifact documents.
//!
//! ## Lookups
//! - `MemoryLookup` — in-process table keyed by computed selector/topic
//! - `FourByteLookup` — 4byte.directory client (feature `remote`)

pub mod config;
pub mod error;
pub mod importer;
pub mod memory;
#[cfg(feature = "remote")]
pub mod remote;
pub mod source;

pub use config::{ImportConfig, LookupConfig};
pub use error::{ImportError, LookupError};
pub use importer::Importer;
pub use memory::MemoryLookup;
pub use source::{BytecodeDecompiler, DecompiledEntry, SignatureLookup};

#[cfg(feature = "remote")]
pub use remote::FourByteLookup;
