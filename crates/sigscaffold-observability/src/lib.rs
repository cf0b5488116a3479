//! # sigscaffold-observability
//!
//! Structured logging for sigscaffold binaries: a serde-configurable
//! `LogConfig` (global level, per-crate overrides, JSON output) and a
//! one-shot `init_tracing` that installs the `tracing-subscriber` stack.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
