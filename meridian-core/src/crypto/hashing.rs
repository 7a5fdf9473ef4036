//! SHA-256 hashing utilities.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
