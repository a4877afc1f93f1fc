//! Operation payloads and the [`Operation`] sum type.
//!
//! An operation is one unit of work inside a transaction. Each kind has its
//! own payload struct with private fields and a validating constructor, and
//! [`Operation`] is a closed enum over them. There is no way to build an
//! operation whose tag disagrees with its payload: the variant *is* the tag.

use serde::{Deserialize, Serialize};

use super::error::{
    require_max_len, require_non_empty, require_non_negative, require_positive, ConstructionError,
};
use super::types::{Asset, OperationKind};
use crate::config::{
    ASSET_CODE_MAX_SIZE, LOG_DATA_MAX_SIZE, LOG_TOPIC_MAX_SIZE, METADATA_KEY_MAX_SIZE,
    METADATA_VALUE_MAX_SIZE,
};

// ---------------------------------------------------------------------------
// PayCoin
// ---------------------------------------------------------------------------

/// Transfer of native coin to `dest_address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPayCoin")]
pub struct PayCoin {
    dest_address: String,
    amount: i64,
}

impl PayCoin {
    /// # Errors
    ///
    /// Empty `dest_address` or negative `amount`. A zero amount is allowed;
    /// the ledger treats it as a plain account touch.
    pub fn new(dest_address: impl Into<String>, amount: i64) -> Result<Self, ConstructionError> {
        let dest_address = dest_address.into();
        require_non_empty("dest_address", &dest_address)?;
        require_non_negative("amount", amount)?;
        Ok(Self {
            dest_address,
            amount,
        })
    }

    pub fn dest_address(&self) -> &str {
        &self.dest_address
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[derive(Deserialize)]
struct RawPayCoin {
    dest_address: String,
    amount: i64,
}

impl TryFrom<RawPayCoin> for PayCoin {
    type Error = ConstructionError;

    fn try_from(raw: RawPayCoin) -> Result<Self, Self::Error> {
        Self::new(raw.dest_address, raw.amount)
    }
}

// ---------------------------------------------------------------------------
// CreateAccount
// ---------------------------------------------------------------------------

/// Creation of `dest_address` with an initial native balance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCreateAccount")]
pub struct CreateAccount {
    dest_address: String,
    init_balance: i64,
}

impl CreateAccount {
    /// # Errors
    ///
    /// Empty `dest_address` or negative `init_balance`.
    pub fn new(
        dest_address: impl Into<String>,
        init_balance: i64,
    ) -> Result<Self, ConstructionError> {
        let dest_address = dest_address.into();
        require_non_empty("dest_address", &dest_address)?;
        require_non_negative("init_balance", init_balance)?;
        Ok(Self {
            dest_address,
            init_balance,
        })
    }

    pub fn dest_address(&self) -> &str {
        &self.dest_address
    }

    pub fn init_balance(&self) -> i64 {
        self.init_balance
    }
}

#[derive(Deserialize)]
struct RawCreateAccount {
    dest_address: String,
    init_balance: i64,
}

impl TryFrom<RawCreateAccount> for CreateAccount {
    type Error = ConstructionError;

    fn try_from(raw: RawCreateAccount) -> Result<Self, Self::Error> {
        Self::new(raw.dest_address, raw.init_balance)
    }
}

// ---------------------------------------------------------------------------
// IssueAsset
// ---------------------------------------------------------------------------

/// Issuance of `amount` units of asset `code` by the source account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIssueAsset")]
pub struct IssueAsset {
    code: String,
    amount: i64,
}

impl IssueAsset {
    /// # Errors
    ///
    /// `code` empty or longer than [`ASSET_CODE_MAX_SIZE`] bytes, or
    /// `amount <= 0`.
    pub fn new(code: impl Into<String>, amount: i64) -> Result<Self, ConstructionError> {
        let code = code.into();
        require_non_empty("code", &code)?;
        require_max_len("code", &code, ASSET_CODE_MAX_SIZE)?;
        require_positive("amount", amount)?;
        Ok(Self { code, amount })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[derive(Deserialize)]
struct RawIssueAsset {
    code: String,
    amount: i64,
}

impl TryFrom<RawIssueAsset> for IssueAsset {
    type Error = ConstructionError;

    fn try_from(raw: RawIssueAsset) -> Result<Self, Self::Error> {
        Self::new(raw.code, raw.amount)
    }
}

// ---------------------------------------------------------------------------
// PayAsset
// ---------------------------------------------------------------------------

/// Transfer of an issued [`Asset`] to `dest_address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPayAsset")]
pub struct PayAsset {
    dest_address: String,
    asset: Asset,
}

impl PayAsset {
    /// # Errors
    ///
    /// Empty `dest_address`. The asset is already validated by its own
    /// constructor.
    pub fn new(dest_address: impl Into<String>, asset: Asset) -> Result<Self, ConstructionError> {
        let dest_address = dest_address.into();
        require_non_empty("dest_address", &dest_address)?;
        Ok(Self {
            dest_address,
            asset,
        })
    }

    pub fn dest_address(&self) -> &str {
        &self.dest_address
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }
}

#[derive(Deserialize)]
struct RawPayAsset {
    dest_address: String,
    asset: Asset,
}

impl TryFrom<RawPayAsset> for PayAsset {
    type Error = ConstructionError;

    fn try_from(raw: RawPayAsset) -> Result<Self, Self::Error> {
        Self::new(raw.dest_address, raw.asset)
    }
}

// ---------------------------------------------------------------------------
// SetMetadata
// ---------------------------------------------------------------------------

/// Write (or delete, when `delete_flag` is set) a metadata entry on the
/// source account.
///
/// `version` is the optimistic-concurrency guard the ledger compares
/// against the stored entry; `0` means "don't check".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSetMetadata")]
pub struct SetMetadata {
    key: String,
    value: String,
    version: i64,
    delete_flag: bool,
}

impl SetMetadata {
    /// # Errors
    ///
    /// - `key` empty or longer than [`METADATA_KEY_MAX_SIZE`] bytes.
    /// - `value` longer than [`METADATA_VALUE_MAX_SIZE`] bytes.
    /// - negative `version`.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        version: i64,
        delete_flag: bool,
    ) -> Result<Self, ConstructionError> {
        let key = key.into();
        let value = value.into();
        require_non_empty("key", &key)?;
        require_max_len("key", &key, METADATA_KEY_MAX_SIZE)?;
        require_max_len("value", &value, METADATA_VALUE_MAX_SIZE)?;
        require_non_negative("version", version)?;
        Ok(Self {
            key,
            value,
            version,
            delete_flag,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn delete_flag(&self) -> bool {
        self.delete_flag
    }
}

#[derive(Deserialize)]
struct RawSetMetadata {
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    version: i64,
    #[serde(default)]
    delete_flag: bool,
}

impl TryFrom<RawSetMetadata> for SetMetadata {
    type Error = ConstructionError;

    fn try_from(raw: RawSetMetadata) -> Result<Self, Self::Error> {
        Self::new(raw.key, raw.value, raw.version, raw.delete_flag)
    }
}

// ---------------------------------------------------------------------------
// LogRecord
// ---------------------------------------------------------------------------

/// A log entry: a topic and zero or more data strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLogRecord")]
pub struct LogRecord {
    topic: String,
    datas: Vec<String>,
}

impl LogRecord {
    /// # Errors
    ///
    /// `topic` empty or longer than [`LOG_TOPIC_MAX_SIZE`] bytes, or any data
    /// entry empty or longer than [`LOG_DATA_MAX_SIZE`] bytes.
    pub fn new(topic: impl Into<String>, datas: Vec<String>) -> Result<Self, ConstructionError> {
        let topic = topic.into();
        require_non_empty("topic", &topic)?;
        require_max_len("topic", &topic, LOG_TOPIC_MAX_SIZE)?;
        for data in &datas {
            require_non_empty("datas", data)?;
            require_max_len("datas", data, LOG_DATA_MAX_SIZE)?;
        }
        Ok(Self { topic, datas })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn datas(&self) -> &[String] {
        &self.datas
    }
}

#[derive(Deserialize)]
struct RawLogRecord {
    topic: String,
    #[serde(default)]
    datas: Vec<String>,
}

impl TryFrom<RawLogRecord> for LogRecord {
    type Error = ConstructionError;

    fn try_from(raw: RawLogRecord) -> Result<Self, Self::Error> {
        Self::new(raw.topic, raw.datas)
    }
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// One unit of work inside a transaction.
///
/// Build one with the per-kind constructors ([`Operation::pay_coin`] and
/// friends) or by converting an already validated payload with `From`.
///
/// In JSON an operation is an object tagged by `"type"`:
///
/// ```
/// use bumo_protocol::transaction::Operation;
///
/// let op = Operation::pay_coin("buQVkUUBKpDKRmHYWw1MU8U7ngoQehno165i", 1000).unwrap();
/// let json = serde_json::to_string(&op).unwrap();
/// assert_eq!(
///     json,
///     r#"{"type":"PAY_COIN","dest_address":"buQVkUUBKpDKRmHYWw1MU8U7ngoQehno165i","amount":1000}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    CreateAccount(CreateAccount),
    IssueAsset(IssueAsset),
    PayAsset(PayAsset),
    SetMetadata(SetMetadata),
    PayCoin(PayCoin),
    Log(LogRecord),
}

impl Operation {
    /// Builds a PAY_COIN operation.
    pub fn pay_coin(dest_address: impl Into<String>, amount: i64) -> Result<Self, ConstructionError> {
        PayCoin::new(dest_address, amount).map(Self::PayCoin)
    }

    /// Builds a CREATE_ACCOUNT operation.
    pub fn create_account(
        dest_address: impl Into<String>,
        init_balance: i64,
    ) -> Result<Self, ConstructionError> {
        CreateAccount::new(dest_address, init_balance).map(Self::CreateAccount)
    }

    /// Builds an ISSUE_ASSET operation.
    pub fn issue_asset(code: impl Into<String>, amount: i64) -> Result<Self, ConstructionError> {
        IssueAsset::new(code, amount).map(Self::IssueAsset)
    }

    /// Builds a PAY_ASSET operation.
    pub fn pay_asset(dest_address: impl Into<String>, asset: Asset) -> Result<Self, ConstructionError> {
        PayAsset::new(dest_address, asset).map(Self::PayAsset)
    }

    /// Builds a SET_METADATA operation.
    pub fn set_metadata(
        key: impl Into<String>,
        value: impl Into<String>,
        version: i64,
        delete_flag: bool,
    ) -> Result<Self, ConstructionError> {
        SetMetadata::new(key, value, version, delete_flag).map(Self::SetMetadata)
    }

    /// Builds a LOG operation.
    pub fn log(topic: impl Into<String>, datas: Vec<String>) -> Result<Self, ConstructionError> {
        LogRecord::new(topic, datas).map(Self::Log)
    }

    /// The kind of payload this operation carries.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::CreateAccount(_) => OperationKind::CreateAccount,
            Self::IssueAsset(_) => OperationKind::IssueAsset,
            Self::PayAsset(_) => OperationKind::PayAsset,
            Self::SetMetadata(_) => OperationKind::SetMetadata,
            Self::PayCoin(_) => OperationKind::PayCoin,
            Self::Log(_) => OperationKind::Log,
        }
    }
}

impl From<PayCoin> for Operation {
    fn from(payload: PayCoin) -> Self {
        Self::PayCoin(payload)
    }
}

impl From<CreateAccount> for Operation {
    fn from(payload: CreateAccount) -> Self {
        Self::CreateAccount(payload)
    }
}

impl From<IssueAsset> for Operation {
    fn from(payload: IssueAsset) -> Self {
        Self::IssueAsset(payload)
    }
}

impl From<PayAsset> for Operation {
    fn from(payload: PayAsset) -> Self {
        Self::PayAsset(payload)
    }
}

impl From<SetMetadata> for Operation {
    fn from(payload: SetMetadata) -> Self {
        Self::SetMetadata(payload)
    }
}

impl From<LogRecord> for Operation {
    fn from(payload: LogRecord) -> Self {
        Self::Log(payload)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
