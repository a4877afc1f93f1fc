// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # BUMO Protocol — Transaction Core
//!
//! Client-side model and canonical binary encoding for BUMO transactions.
//! Build a transaction, encode it, hand the bytes to whoever signs and
//! broadcasts. That's the whole job.
//!
//! ```
//! use bumo_protocol::transaction::{Operation, TransactionBuilder};
//!
//! let tx = TransactionBuilder::new("buQmWJrdYJP5CPKTbkQUqscwvTGaU44dord8")
//!     .nonce(1)
//!     .gas_price(1000)
//!     .fee_limit(1_000_000)
//!     .operation(Operation::pay_coin("buQVkUUBKpDKRmHYWw1MU8U7ngoQehno165i", 1000)?)
//!     .build()?;
//!
//! let bytes = tx.encode();
//! assert_eq!(bumo_protocol::codec::decode(&bytes)?, tx);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **transaction** — The transaction envelope and the operation sum type.
//!   Validated on construction, immutable afterwards.
//! - **codec** — Canonical encoder/decoder and the operation registry.
//! - **crypto** — SHA-256 transaction hash.
//! - **config** — Wire constants and field limits.
//!
//! ## Design Philosophy
//!
//! 1. Invalid states are unrepresentable. An operation's tag is its enum
//!    variant, not a field that can disagree with the payload.
//! 2. Same input, same bytes. No maps, no platform-width integers.
//! 3. Errors go back to the caller. Nothing is retried, nothing is
//!    swallowed.
//! 4. No signing, no networking, no address parsing. Those belong to
//!    whoever consumes the bytes.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod transaction;

pub use codec::{decode, encode, DecodeError};
pub use transaction::{ConstructionError, Operation, OperationKind, Transaction, TransactionBuilder};
