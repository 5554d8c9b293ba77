//! Domain-separated SHA-256 content hashes.

use sha2::{Digest, Sha256};

use crate::grid::Grid;
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash_domain::HashDomain;

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: exactly one `:` separator with non-empty text on both sides
/// (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 over `domain || data`, rendered as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex_digest}");
    ContentHash { colon: 6, full }
}

/// Hash a JSON value through the canonical writer.
///
/// # Errors
///
/// Returns [`CanonError`] if the value contains a non-integer number.
pub fn canonical_json_hash(
    domain: HashDomain,
    value: &serde_json::Value,
) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(value)?;
    Ok(canonical_hash(domain, &bytes))
}

/// Fingerprint of a grid layout: dimensions and obstacle set.
///
/// Two grids with the same fingerprint produce identical traversals for the
/// same start, target and policy.
///
/// # Errors
///
/// Propagates [`CanonError`] from canonicalization.
pub fn grid_fingerprint(grid: &Grid) -> Result<ContentHash, CanonError> {
    canonical_json_hash(HashDomain::GridLayout, &grid.to_json_value())
}
