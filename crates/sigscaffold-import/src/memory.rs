//! In-memory `SignatureLookup` implementation.
//!
//! Suitable for testing, offline use, and seeding with known signatures.
//! Thread-safe via `Arc<RwLock<Inner>>`.

use crate::error::LookupError;
use crate::source::SignatureLookup;
use async_trait::async_trait;
use sigscaffold_core::{
    fingerprint::{normalize_hash, selector, topic},
    ParseError, ParsedSignature,
};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

#[derive(Default)]
struct Inner {
    /// selector → candidate signatures, in insertion order
    functions: HashMap<String, Vec<String>>,
    /// topic → candidate signatures, in insertion order
    events: HashMap<String, Vec<String>>,
}

fn push_unique(table: &mut HashMap<String, Vec<String>>, key: String, signature: String) {
    let candidates = table.entry(key).or_default();
    if !candidates.contains(&signature) {
        candidates.push(signature);
    }
}

/// Thread-safe in-memory signature table keyed by computed selector/topic.
#[derive(Clone, Default)]
pub struct MemoryLookup {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lookup from function and event signature lists.
    pub fn from_signatures<F, E>(functions: F, events: E) -> Result<Self, ParseError>
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let lookup = Self::new();
        for f in functions {
            lookup.insert_function(f.as_ref())?;
        }
        for e in events {
            lookup.insert_event(e.as_ref())?;
        }
        Ok(lookup)
    }

    /// Register a function signature under its selector. Returns the selector.
    ///
    /// The selector is computed over the canonical form; the stored candidate
    /// is the signature as given.
    pub fn insert_function(&self, signature: &str) -> Result<String, ParseError> {
        let key = selector(&ParsedSignature::parse(signature)?.canonical());
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        push_unique(&mut inner.functions, key.clone(), signature.to_string());
        Ok(key)
    }

    /// Register an event signature under its topic. Returns the topic.
    pub fn insert_event(&self, signature: &str) -> Result<String, ParseError> {
        let key = topic(&ParsedSignature::parse(signature)?.canonical());
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        push_unique(&mut inner.events, key.clone(), signature.to_string());
        Ok(key)
    }

    /// Total number of stored candidates.
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.functions.values().map(Vec::len).sum::<usize>()
            + inner.events.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn candidates(&self, events: bool, hash: &str) -> Vec<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let table = if events { &inner.events } else { &inner.functions };
        table.get(&normalize_hash(hash)).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl SignatureLookup for MemoryLookup {
    async fn load_functions(&self, selector: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.candidates(false, selector))
    }

    async fn load_events(&self, topic: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.candidates(true, topic))
    }
}
