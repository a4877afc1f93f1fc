//! # Hashing Utilities
//!
//! SHA-256 over canonical transaction bytes. The ledger identifies a
//! transaction by the SHA-256 of its serialized content, so that is what we
//! compute; nothing else in the crate needs a hash.

use sha2::{Digest, Sha256};

use crate::config::HASH_OUTPUT_LENGTH;

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// # Example
///
/// ```
/// use bumo_protocol::crypto::sha256_array;
///
/// let hash = sha256_array(b"BUMO");
/// assert_eq!(hash.len(), bumo_protocol::config::HASH_OUTPUT_LENGTH);
/// ```
pub fn sha256_array(data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; HASH_OUTPUT_LENGTH];
    output.copy_from_slice(&result);
    output
}

/// Hex-encoded SHA-256, lower case.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256_array(data))
}
