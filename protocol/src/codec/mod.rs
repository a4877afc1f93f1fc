//! # Canonical Codec
//!
//! Turns a [`Transaction`] into bytes and back. The encoding is canonical:
//! equal transactions always produce identical bytes, on every platform,
//! and the decoder accepts exactly one byte form per value.
//!
//! ## Wire Format
//!
//! ```text
//! transaction := string source_address
//!                sint   nonce
//!                sint   fee_limit
//!                sint   gas_price
//!                uint   operation_count
//!                operation * operation_count
//!
//! operation   := uint   discriminant          (see OperationKind)
//!                uint   payload_len
//!                byte * payload_len           (kind-specific payload)
//!
//! uint        := LEB128, at most 10 bytes, minimal form
//! sint        := ZigZag(i64) as uint
//! string      := uint byte_len, UTF-8 bytes
//! bool        := 0x00 | 0x01
//! ```
//!
//! Payload layouts live next to their codecs in [`registry`].
//!
//! ## Errors
//!
//! Decoding stops at the first problem and returns a [`DecodeError`]; no
//! partially decoded transaction ever escapes.

pub mod registry;
pub mod wire;

use thiserror::Error;

use crate::config::{MAX_OPERATIONS_PER_TRANSACTION, TRANSACTION_LIMIT_SIZE};
use crate::transaction::{ConstructionError, Transaction};

pub use registry::{OperationCodec, OperationPayload, OPERATION_CODECS};
pub use wire::{Decoder, Encoder};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while decoding a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An operation discriminant has no registered decoder.
    #[error("unknown operation kind: discriminant {discriminant} is not registered")]
    UnknownOperationKind {
        /// The tag found on the wire.
        discriminant: u64,
    },

    /// A field declared more bytes than the input has left.
    #[error("truncated input: field needs {needed} bytes, only {remaining} remain")]
    TruncatedInput {
        /// Bytes the field declared (or the next read required).
        needed: usize,
        /// Bytes actually left.
        remaining: usize,
    },

    /// The bytes are internally inconsistent: bad varint, bad UTF-8,
    /// payload length mismatch, trailing bytes, limits exceeded.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What was wrong.
        reason: String,
    },

    /// The bytes parsed, but a value fails model validation (for instance a
    /// negative amount).
    #[error("invalid field value: {0}")]
    InvalidField(#[from] ConstructionError),
}

impl DecodeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Encode / Decode
// ---------------------------------------------------------------------------

/// Encodes `tx` into its canonical byte form.
///
/// Pure: borrows `tx`, allocates a fresh buffer, touches nothing else.
pub fn encode(tx: &Transaction) -> Vec<u8> {
    let enc = write_transaction(tx);
    tracing::trace!(
        source = tx.source_address(),
        operations = tx.operations().len(),
        bytes = enc.len(),
        "transaction encoded"
    );
    enc.into_bytes()
}

/// Byte length of the canonical encoding of `tx`.
pub(crate) fn encoded_len(tx: &Transaction) -> usize {
    write_transaction(tx).len()
}

fn write_transaction(tx: &Transaction) -> Encoder {
    let mut enc = Encoder::with_capacity(64 + 64 * tx.operations().len());
    enc.write_str(tx.source_address());
    enc.write_i64(tx.nonce());
    enc.write_i64(tx.fee_limit());
    enc.write_i64(tx.gas_price());
    enc.write_varint(tx.operations().len() as u64);
    for operation in tx.operations() {
        registry::encode_operation(operation, &mut enc);
    }
    enc
}

/// Decodes a transaction from its canonical byte form.
///
/// # Errors
///
/// - [`DecodeError::UnknownOperationKind`] for an unregistered discriminant.
/// - [`DecodeError::TruncatedInput`] when a field runs past the end.
/// - [`DecodeError::MalformedInput`] for inconsistent bytes, trailing data,
///   input of [`TRANSACTION_LIMIT_SIZE`] bytes or more, or more than
///   [`MAX_OPERATIONS_PER_TRANSACTION`] operations.
/// - [`DecodeError::InvalidField`] when a decoded value fails validation.
pub fn decode(bytes: &[u8]) -> Result<Transaction, DecodeError> {
    if bytes.len() >= TRANSACTION_LIMIT_SIZE {
        return Err(DecodeError::malformed(format!(
            "transaction is {} bytes, it must stay below {TRANSACTION_LIMIT_SIZE}",
            bytes.len()
        )));
    }

    let mut dec = Decoder::new(bytes);
    let source_address = dec.read_string()?;
    let nonce = dec.read_i64()?;
    let fee_limit = dec.read_i64()?;
    let gas_price = dec.read_i64()?;

    let count = dec.read_varint()?;
    if count > MAX_OPERATIONS_PER_TRANSACTION as u64 {
        return Err(DecodeError::malformed(format!(
            "operation count {count} exceeds the limit of {MAX_OPERATIONS_PER_TRANSACTION}"
        )));
    }
    let mut operations = Vec::with_capacity(count as usize);
    for _ in 0..count {
        operations.push(registry::decode_operation(&mut dec)?);
    }
    dec.finish()?;

    let tx = Transaction::new(source_address, nonce, fee_limit, gas_price, operations)?;
    tracing::debug!(
        source = tx.source_address(),
        nonce = tx.nonce(),
        operations = tx.operations().len(),
        "transaction decoded"
    );
    Ok(tx)
}
