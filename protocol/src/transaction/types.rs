//! Core type definitions shared by every operation payload.
//!
//! [`OperationKind`] is the discriminant space of the wire format. The
//! numeric values are fixed forever: a kind may be added with a fresh
//! number, but an existing number is never reused or renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{require_max_len, require_non_empty, require_positive, ConstructionError};
use crate::config::ASSET_CODE_MAX_SIZE;

// ---------------------------------------------------------------------------
// OperationKind
// ---------------------------------------------------------------------------

/// Discriminant selecting which payload an operation carries.
///
/// The numbering follows the ledger's operation type table. Gaps (0, 5, 6,
/// 9) belong to kinds this library does not build; decoding one of them is
/// an [`crate::codec::DecodeError::UnknownOperationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    /// Create a new account and fund it with native coin.
    CreateAccount,
    /// Issue a new asset from the source account.
    IssueAsset,
    /// Transfer an issued asset.
    PayAsset,
    /// Write or delete a key in the source account's metadata.
    SetMetadata,
    /// Transfer native coin.
    PayCoin,
    /// Emit a log entry.
    Log,
}

impl OperationKind {
    /// Every kind this library knows, in discriminant order.
    pub const ALL: [OperationKind; 6] = [
        Self::CreateAccount,
        Self::IssueAsset,
        Self::PayAsset,
        Self::SetMetadata,
        Self::PayCoin,
        Self::Log,
    ];

    /// The numeric tag written on the wire.
    pub const fn discriminant(self) -> u64 {
        match self {
            Self::CreateAccount => 1,
            Self::IssueAsset => 2,
            Self::PayAsset => 3,
            Self::SetMetadata => 4,
            Self::PayCoin => 7,
            Self::Log => 8,
        }
    }

    /// Reverse of [`Self::discriminant`]. `None` for unregistered tags.
    pub fn from_discriminant(discriminant: u64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminant() == discriminant)
    }

    /// Upper-case name used by the ledger and in JSON.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateAccount => "CREATE_ACCOUNT",
            Self::IssueAsset => "ISSUE_ASSET",
            Self::PayAsset => "PAY_ASSET",
            Self::SetMetadata => "SET_METADATA",
            Self::PayCoin => "PAY_COIN",
            Self::Log => "LOG",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// An amount of an issued asset, identified by issuer and code.
///
/// Assets are always moved in positive quantities; a zero-amount asset
/// transfer is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAsset")]
pub struct Asset {
    issuer: String,
    code: String,
    amount: i64,
}

impl Asset {
    /// Builds a validated asset amount.
    ///
    /// # Errors
    ///
    /// - `issuer` or `code` empty.
    /// - `code` longer than [`ASSET_CODE_MAX_SIZE`] bytes.
    /// - `amount <= 0`.
    pub fn new(
        issuer: impl Into<String>,
        code: impl Into<String>,
        amount: i64,
    ) -> Result<Self, ConstructionError> {
        let issuer = issuer.into();
        let code = code.into();
        require_non_empty("issuer", &issuer)?;
        require_non_empty("code", &code)?;
        require_max_len("code", &code, ASSET_CODE_MAX_SIZE)?;
        require_positive("amount", amount)?;
        Ok(Self {
            issuer,
            code,
            amount,
        })
    }

    /// Address of the issuing account.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Asset code, unique per issuer.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Quantity in the asset's smallest unit.
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[derive(Deserialize)]
struct RawAsset {
    issuer: String,
    code: String,
    amount: i64,
}

impl TryFrom<RawAsset> for Asset {
    type Error = ConstructionError;

    fn try_from(raw: RawAsset) -> Result<Self, Self::Error> {
        Self::new(raw.issuer, raw.code, raw.amount)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
