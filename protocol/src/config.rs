//! # Protocol Configuration & Constants
//!
//! Every magic number in the transaction codec lives here. If you're
//! hardcoding a limit somewhere else, move it here.
//!
//! The field limits mirror what BUMO validators enforce when a transaction
//! reaches the ledger. Enforcing them on the client side means a transaction
//! that passes construction here will not bounce on size rules later.

// ---------------------------------------------------------------------------
// Wire Format
// ---------------------------------------------------------------------------

/// Version of the canonical byte layout produced by [`crate::codec::encode`].
///
/// The layout itself carries no version tag. This constant is for humans
/// and tooling: bump it whenever an existing encoding would change, which
/// should be never. Adding an operation kind does not change it.
pub const WIRE_FORMAT_VERSION: u16 = 1;

/// Longest LEB128 encoding of a `u64`: ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_LEN: usize = 10;

/// Length of a transaction hash in bytes (SHA-256).
pub const HASH_OUTPUT_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Exclusive upper bound on the encoded transaction size: 1 MiB, the same
/// ceiling the ledger applies. Construction and decoding both reject an
/// encoding of this many bytes or more.
pub const TRANSACTION_LIMIT_SIZE: usize = 1024 * 1024;

/// Maximum number of operations in a single transaction.
pub const MAX_OPERATIONS_PER_TRANSACTION: usize = 100;

// ---------------------------------------------------------------------------
// Operation Field Limits
// ---------------------------------------------------------------------------

/// Asset codes are 1..=64 bytes.
pub const ASSET_CODE_MAX_SIZE: usize = 64;

/// Metadata keys are 1..=1024 bytes.
pub const METADATA_KEY_MAX_SIZE: usize = 1024;

/// Metadata values may be empty but no longer than 256 KiB.
pub const METADATA_VALUE_MAX_SIZE: usize = 256 * 1024;

/// Log topics are 1..=128 bytes.
pub const LOG_TOPIC_MAX_SIZE: usize = 128;

/// Each log data entry is 1..=1024 bytes.
pub const LOG_DATA_MAX_SIZE: usize = 1024;
