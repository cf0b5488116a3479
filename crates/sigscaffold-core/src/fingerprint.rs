//! Selector and topic computation.
//!
//! A function selector is the first 4 bytes of keccak256 over the canonical
//! signature; an event topic is the full 32-byte hash:
//!   keccak256("transfer(address,uint256)")[..4] → 0xa9059cbb
//!
//! The input must already be canonical (no spaces, no parameter names).

use tiny_keccak::{Hasher, Keccak};

fn keccak256(input: &str) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(input.as_bytes());
    hasher.finalize(&mut output);
    output
}

/// 4-byte function selector, `0x`-prefixed lowercase hex.
pub fn selector(signature: &str) -> String {
    format!("0x{}", hex::encode(&keccak256(signature)[..4]))
}

/// 32-byte event topic, `0x`-prefixed lowercase hex.
pub fn topic(signature: &str) -> String {
    format!("0x{}", hex::encode(keccak256(signature)))
}

/// Lowercase a selector/topic and ensure a `0x` prefix.
pub fn normalize_hash(hash: &str) -> String {
    let hex = hash.strip_prefix("0x").unwrap_or(hash);
    format!("0x{}", hex.to_ascii_lowercase())
}
