//! # sigscaffold-core
//!
//! Turns human-readable call/event signatures such as
//! `swap((uint256,uint256)[],address)` into two JSON documents:
//! a decorator manifest for manual annotation and an artifact with a
//! reconstructed ABI.
//!
//! Pipeline: signature string → raw scan ([`parser`]) → flattened units
//! ([`flatten`]) → projected parameter trees ([`projector`]) → assembled
//! documents ([`manifest`], [`artifact`], [`document`]).
//!
//! Everything here is pure and synchronous; no state survives a call.

pub mod artifact;
pub mod document;
pub mod error;
pub mod fingerprint;
pub mod flatten;
pub mod manifest;
pub mod parser;
pub mod projector;
pub mod signature;

pub use artifact::{AbiEntry, AbiEntryKind, ArtifactAssembler, ArtifactDocument};
pub use document::{assemble, ImportedContract, ResolvedSignatures};
pub use error::ParseError;
pub use flatten::ParseNode;
pub use manifest::{EventDecorator, FunctionDecorator, ManifestAssembler, ManifestDocument};
pub use projector::{ArtifactObject, ArtifactProjector, DecoratorProjector, ParamDecorator, Projector};
pub use signature::{parse_signature, ParsedSignature};
