//! Signature lookup against 4byte.directory.
//!
//! # Feature Flag
//! This module requires the `remote` feature flag (enables `reqwest`).
//!
//! ```toml
//! sigscaffold-import = { version = "0.1", features = ["remote"] }
//! ```
//!
//! # Usage
//! ```ignore
//! let lookup = FourByteLookup::new(&LookupConfig::default())?;
//! let candidates = lookup.load_functions("0xa9059cbb").await?;
//! ```

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::source::SignatureLookup;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use sigscaffold_core::fingerprint::normalize_hash;
use std::time::Duration;

const SERVICE: &str = "4byte.directory";

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FourByteResponse {
    results: Vec<FourByteResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourByteResult {
    pub id: u64,
    pub text_signature: String,
    pub hex_signature: String,
}

// ─── Lookup ───────────────────────────────────────────────────────────────────

/// Remote signature lookup.
///
/// Candidates are returned in the order the service lists them.
pub struct FourByteLookup {
    client: Client,
    base: String,
}

impl FourByteLookup {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base: config.four_byte_base.trim_end_matches('/').to_string(),
        })
    }

    /// Look up candidates on one of the service's signature endpoints.
    async fn query(&self, endpoint: &str, hash: &str) -> Result<Vec<FourByteResult>, LookupError> {
        let url = format!("{}/api/v1/{endpoint}/", self.base);
        let resp = self
            .client
            .get(&url)
            .query(&[("hex_signature", normalize_hash(hash))])
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited {
                service: SERVICE.into(),
            });
        }
        if !status.is_success() {
            return Err(unavailable(format!("HTTP {status}")));
        }

        let body: FourByteResponse =
            resp.json().await.map_err(|e| LookupError::InvalidResponse {
                service: SERVICE.into(),
                reason: e.to_string(),
            })?;
        Ok(body.results)
    }

    /// Full results for a 4-byte function selector.
    pub async fn lookup_selector(&self, selector: &str) -> Result<Vec<FourByteResult>, LookupError> {
        self.query("signatures", selector).await
    }

    /// Full results for an event topic0 hash.
    pub async fn lookup_event_signature(
        &self,
        topic: &str,
    ) -> Result<Vec<FourByteResult>, LookupError> {
        self.query("event-signatures", topic).await
    }
}

fn unavailable(reason: String) -> LookupError {
    LookupError::Unavailable {
        service: SERVICE.into(),
        reason,
    }
}

fn signatures(results: Vec<FourByteResult>) -> Vec<String> {
    results.into_iter().map(|r| r.text_signature).collect()
}

#[async_trait]
impl SignatureLookup for FourByteLookup {
    async fn load_functions(&self, selector: &str) -> Result<Vec<String>, LookupError> {
        self.lookup_selector(selector).await.map(signatures)
    }

    async fn load_events(&self, topic: &str) -> Result<Vec<String>, LookupError> {
        self.lookup_event_signature(topic).await.map(signatures)
    }
}
