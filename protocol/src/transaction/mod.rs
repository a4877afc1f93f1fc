//! # Transaction Module
//!
//! The in-memory model of a BUMO transaction. Every transfer, account
//! creation, asset action and metadata write is an [`Operation`] inside a
//! [`Transaction`].
//!
//! ## Architecture
//!
//! ```text
//! types.rs     — OperationKind discriminants and the Asset value type
//! operation.rs — Per-kind payload structs and the Operation sum type
//! builder.rs   — Transaction envelope and the fluent TransactionBuilder
//! error.rs     — ConstructionError
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — Create operations with [`Operation::pay_coin`] and friends,
//!    then assemble them with [`TransactionBuilder`].
//! 2. **Encode** — [`Transaction::encode`] produces the canonical bytes.
//! 3. **Hand off** — The bytes (and [`Transaction::hash`]) go to a signer and
//!    then to the network. Neither lives in this crate.
//!
//! ## Design Decisions
//!
//! - Validation happens at construction. A value of any type in this module
//!   is valid by the time you hold it, and the codec never re-checks.
//! - All monetary fields are `i64`, matching the ledger. Sign rules are
//!   enforced per field; overflow is the caller's business.
//! - No interior mutability and no setters. Encoding borrows immutably.

pub mod builder;
pub mod error;
pub mod operation;
pub mod types;

pub use builder::{Transaction, TransactionBuilder};
pub use error::ConstructionError;
pub use operation::{CreateAccount, IssueAsset, LogRecord, Operation, PayAsset, PayCoin, SetMetadata};
pub use types::{Asset, OperationKind};
