//! # Cryptographic Primitives
//!
//! Only hashing lives here. Signing is done by whoever receives the encoded
//! transaction, not by this crate.

pub mod hash;

pub use hash::{sha256_array, sha256_hex};
