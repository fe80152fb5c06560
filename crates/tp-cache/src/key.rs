//! Cache key derivation.

use std::fmt;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest naming one cache entry.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key derived from the UTF-8 bytes of `query` and nothing else.
    ///
    /// Builder parameters are not part of this key: two runs with
    /// the same query but a different split threshold or depth limit share an
    /// entry, and the second run reads whatever the first one stored.
    pub fn for_query(query: &str) -> Self {
        Self(hex::encode(Sha256::digest(query.as_bytes())))
    }

    /// Key derived from `query` plus named parameters, for callers that want
    /// parameter changes to miss the cache.
    ///
    /// Parameters are appended one per line as `name=value` after the query,
    /// in the order given.
    pub fn for_query_with(query: &str, params: &[(&str, String)]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(query.as_bytes());
        for (name, value) in params {
            hasher.update(b"\n");
            hasher.update(name.as_bytes());
            hasher.update(b"=");
            hasher.update(value.as_bytes());
        }
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
