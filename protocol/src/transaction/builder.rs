//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] enforces a disciplined construction flow:
//! set the source account and fee terms, push operations in execution
//! order, call `.build()`, and get back a validated [`Transaction`].
//!
//! Nothing here signs or submits. The finished transaction goes to
//! [`crate::codec::encode`] and the bytes go to whoever signs them.

use serde::{Deserialize, Serialize};

use super::error::{require_non_empty, require_non_negative, ConstructionError};
use super::operation::Operation;
use crate::codec::{self, DecodeError};
use crate::config::{HASH_OUTPUT_LENGTH, MAX_OPERATIONS_PER_TRANSACTION, TRANSACTION_LIMIT_SIZE};
use crate::crypto::hash;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A BUMO transaction envelope.
///
/// Fields are private and only reachable through accessors, so a
/// `Transaction` that exists has passed validation and cannot be changed
/// afterwards. To "modify" one, build a new one.
///
/// # Canonical Byte Format
///
/// [`Transaction::encode`] writes, in this order: source address, nonce,
/// fee limit, gas price, operation count, then each operation. See
/// [`crate::codec`] for the exact layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    /// Account originating the transaction.
    source_address: String,

    /// Per-account sequence number. The ledger requires it to be exactly
    /// one above the account's last accepted nonce; this library passes it
    /// through untouched.
    nonce: i64,

    /// Maximum fee the sender authorises, in the native coin's smallest unit.
    fee_limit: i64,

    /// Price per unit of gas.
    gas_price: i64,

    /// Operations, executed by the ledger in this order.
    operations: Vec<Operation>,
}

impl Transaction {
    /// Builds a validated transaction.
    ///
    /// # Errors
    ///
    /// - `source_address` empty.
    /// - `fee_limit` or `gas_price` negative.
    /// - more than [`MAX_OPERATIONS_PER_TRANSACTION`] operations.
    /// - canonical encoding of [`TRANSACTION_LIMIT_SIZE`] bytes or more, so
    ///   every transaction that exists can also be decoded.
    ///
    /// An empty operation list is accepted.
    pub fn new(
        source_address: impl Into<String>,
        nonce: i64,
        fee_limit: i64,
        gas_price: i64,
        operations: Vec<Operation>,
    ) -> Result<Self, ConstructionError> {
        let source_address = source_address.into();
        require_non_empty("source_address", &source_address)?;
        require_non_negative("fee_limit", fee_limit)?;
        require_non_negative("gas_price", gas_price)?;
        if operations.len() > MAX_OPERATIONS_PER_TRANSACTION {
            return Err(ConstructionError::TooManyOperations {
                count: operations.len(),
                max: MAX_OPERATIONS_PER_TRANSACTION,
            });
        }

        let tx = Self {
            source_address,
            nonce,
            fee_limit,
            gas_price,
            operations,
        };
        let size = codec::encoded_len(&tx);
        if size >= TRANSACTION_LIMIT_SIZE {
            return Err(ConstructionError::TooLarge {
                size,
                max: TRANSACTION_LIMIT_SIZE,
            });
        }
        Ok(tx)
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn nonce(&self) -> i64 {
        self.nonce
    }

    pub fn fee_limit(&self) -> i64 {
        self.fee_limit
    }

    pub fn gas_price(&self) -> i64 {
        self.gas_price
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the canonical byte encoding. Shorthand for [`codec::encode`].
    pub fn encode(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Parses a transaction from its canonical encoding. Shorthand for
    /// [`codec::decode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        codec::decode(bytes)
    }

    /// SHA-256 of the canonical encoding.
    ///
    /// Two transactions have the same hash exactly when they encode to the
    /// same bytes, which (since the encoding is canonical) is exactly when
    /// they are equal.
    pub fn hash(&self) -> [u8; HASH_OUTPUT_LENGTH] {
        hash::sha256_array(&self.encode())
    }

    /// Hex-encoded [`Transaction::hash`].
    pub fn hash_hex(&self) -> String {
        hash::sha256_hex(&self.encode())
    }
}

#[derive(Deserialize)]
struct RawTransaction {
    source_address: String,
    nonce: i64,
    fee_limit: i64,
    gas_price: i64,
    #[serde(default)]
    operations: Vec<Operation>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = ConstructionError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        Self::new(
            raw.source_address,
            raw.nonce,
            raw.fee_limit,
            raw.gas_price,
            raw.operations,
        )
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Transaction`] instances.
///
/// # Usage
///
/// ```
/// use bumo_protocol::transaction::{Operation, TransactionBuilder};
///
/// let tx = TransactionBuilder::new("buQmWJrdYJP5CPKTbkQUqscwvTGaU44dord8")
///     .nonce(1)
///     .gas_price(1000)
///     .fee_limit(1_000_000)
///     .operation(Operation::pay_coin("buQVkUUBKpDKRmHYWw1MU8U7ngoQehno165i", 1000)?)
///     .build()?;
///
/// assert_eq!(tx.operations().len(), 1);
/// # Ok::<(), bumo_protocol::transaction::ConstructionError>(())
/// ```
///
/// Validation happens once, in `build()`. Unset numeric fields default to 0.
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    source_address: String,
    nonce: i64,
    fee_limit: i64,
    gas_price: i64,
    operations: Vec<Operation>,
}

impl TransactionBuilder {
    /// Creates a new builder for transactions originating at `source_address`.
    pub fn new(source_address: impl Into<String>) -> Self {
        Self {
            source_address: source_address.into(),
            ..Self::default()
        }
    }

    /// Sets the sender's nonce (sequence number).
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the maximum fee the sender authorises.
    pub fn fee_limit(mut self, fee_limit: i64) -> Self {
        self.fee_limit = fee_limit;
        self
    }

    /// Sets the gas price.
    pub fn gas_price(mut self, gas_price: i64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Appends an operation. Operations execute in the order they are added.
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends several operations, preserving their order.
    pub fn operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    /// Consumes the builder and produces a validated [`Transaction`].
    pub fn build(self) -> Result<Transaction, ConstructionError> {
        Transaction::new(
            self.source_address,
            self.nonce,
            self.fee_limit,
            self.gas_price,
            self.operations,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
