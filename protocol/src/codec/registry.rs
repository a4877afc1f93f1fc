//! Operation registry: discriminant → payload codec.
//!
//! Each payload type implements [`OperationPayload`], which pairs its
//! encoder with its decoder and names its [`OperationKind`]. The static
//! [`OPERATION_CODECS`] table holds one encoder/decoder row per kind, and
//! both directions dispatch through it. Adding a kind means one enum
//! variant, one trait impl and one table row; nothing already on the wire
//! changes.

use super::wire::{Decoder, Encoder};
use super::DecodeError;
use crate::transaction::{
    Asset, CreateAccount, IssueAsset, LogRecord, Operation, OperationKind, PayAsset, PayCoin,
    SetMetadata,
};

/// Encode/decode pair for one operation payload kind.
pub trait OperationPayload: Sized + Into<Operation> {
    /// The kind, and so the discriminant, this payload is registered under.
    const KIND: OperationKind;

    /// Borrows the payload out of `operation` if it carries this kind.
    fn project(operation: &Operation) -> Option<&Self>;

    /// Writes the payload fields in wire order. The caller handles the
    /// discriminant and the length prefix.
    fn encode_payload(&self, enc: &mut Encoder);

    /// Reads the payload fields in wire order and validates them.
    fn decode_payload(dec: &mut Decoder<'_>) -> Result<Self, DecodeError>;
}

/// Encoder signature stored in the registry. Writes the payload only.
pub type EncodeFn = fn(&Operation, &mut Encoder);

/// Decoder signature stored in the registry.
pub type DecodeFn = fn(&mut Decoder<'_>) -> Result<Operation, DecodeError>;

/// One row of the dispatch table.
#[derive(Clone, Copy)]
pub struct OperationCodec {
    pub kind: OperationKind,
    pub encode: EncodeFn,
    pub decode: DecodeFn,
}

impl OperationCodec {
    const fn of<P: OperationPayload>() -> Self {
        Self {
            kind: P::KIND,
            encode: encode_as::<P>,
            decode: decode_as::<P>,
        }
    }

    pub fn discriminant(&self) -> u64 {
        self.kind.discriminant()
    }
}

impl std::fmt::Debug for OperationCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationCodec")
            .field("kind", &self.kind)
            .field("discriminant", &self.discriminant())
            .finish()
    }
}

// Rows are only ever reached through `codec_for(operation.kind())`, so the
// projection always matches.
fn encode_as<P: OperationPayload>(operation: &Operation, enc: &mut Encoder) {
    if let Some(payload) = P::project(operation) {
        payload.encode_payload(enc);
    }
}

fn decode_as<P: OperationPayload>(dec: &mut Decoder<'_>) -> Result<Operation, DecodeError> {
    P::decode_payload(dec).map(Into::into)
}

/// Every registered payload codec, in [`OperationKind`] declaration order
/// (which is also discriminant order).
///
/// Built at compile time and never mutated, so it is safe to read from any
/// number of threads.
pub static OPERATION_CODECS: [OperationCodec; 6] = [
    OperationCodec::of::<CreateAccount>(),
    OperationCodec::of::<IssueAsset>(),
    OperationCodec::of::<PayAsset>(),
    OperationCodec::of::<SetMetadata>(),
    OperationCodec::of::<PayCoin>(),
    OperationCodec::of::<LogRecord>(),
];

/// The codec row for `kind`.
pub fn codec_for(kind: OperationKind) -> &'static OperationCodec {
    &OPERATION_CODECS[kind as usize]
}

/// Finds the codec registered for `discriminant`.
pub fn lookup(discriminant: u64) -> Option<&'static OperationCodec> {
    OperationKind::from_discriminant(discriminant).map(codec_for)
}

/// Writes the discriminant, then the length-prefixed payload.
pub fn encode_operation(operation: &Operation, enc: &mut Encoder) {
    let codec = codec_for(operation.kind());
    enc.write_varint(codec.discriminant());
    enc.write_nested(|payload| (codec.encode)(operation, payload));
}

/// Reads a discriminant and dispatches to the registered decoder.
///
/// The discriminant is resolved before the payload length is even read, so
/// an unregistered kind is reported as such regardless of what follows it.
pub fn decode_operation(dec: &mut Decoder<'_>) -> Result<Operation, DecodeError> {
    let discriminant = dec.read_varint()?;
    let codec =
        lookup(discriminant).ok_or(DecodeError::UnknownOperationKind { discriminant })?;
    dec.read_nested(codec.decode)
}

// ---------------------------------------------------------------------------
// Payload codecs
// ---------------------------------------------------------------------------

impl OperationPayload for PayCoin {
    const KIND: OperationKind = OperationKind::PayCoin;

    fn project(operation: &Operation) -> Option<&Self> {
        match operation {
            Operation::PayCoin(payload) => Some(payload),
            _ => None,
        }
    }

    fn encode_payload(&self, enc: &mut Encoder) {
        enc.write_str(self.dest_address());
        enc.write_i64(self.amount());
    }

    fn decode_payload(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let dest_address = dec.read_string()?;
        let amount = dec.read_i64()?;
        Ok(Self::new(dest_address, amount)?)
    }
}

impl OperationPayload for CreateAccount {
    const KIND: OperationKind = OperationKind::CreateAccount;

    fn project(operation: &Operation) -> Option<&Self> {
        match operation {
            Operation::CreateAccount(payload) => Some(payload),
            _ => None,
        }
    }

    fn encode_payload(&self, enc: &mut Encoder) {
        enc.write_str(self.dest_address());
        enc.write_i64(self.init_balance());
    }

    fn decode_payload(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let dest_address = dec.read_string()?;
        let init_balance = dec.read_i64()?;
        Ok(Self::new(dest_address, init_balance)?)
    }
}

impl OperationPayload for IssueAsset {
    const KIND: OperationKind = OperationKind::IssueAsset;

    fn project(operation: &Operation) -> Option<&Self> {
        match operation {
            Operation::IssueAsset(payload) => Some(payload),
            _ => None,
        }
    }

    fn encode_payload(&self, enc: &mut Encoder) {
        enc.write_str(self.code());
        enc.write_i64(self.amount());
    }

    fn decode_payload(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let code = dec.read_string()?;
        let amount = dec.read_i64()?;
        Ok(Self::new(code, amount)?)
    }
}

impl OperationPayload for PayAsset {
    const KIND: OperationKind = OperationKind::PayAsset;

    fn project(operation: &Operation) -> Option<&Self> {
        match operation {
            Operation::PayAsset(payload) => Some(payload),
            _ => None,
        }
    }

    fn encode_payload(&self, enc: &mut Encoder) {
        enc.write_str(self.dest_address());
        let asset = self.asset();
        enc.write_nested(|nested| {
            nested.write_str(asset.issuer());
            nested.write_str(asset.code());
            nested.write_i64(asset.amount());
        });
    }

    fn decode_payload(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let dest_address = dec.read_string()?;
        let asset = dec.read_nested(|nested| {
            let issuer = nested.read_string()?;
            let code = nested.read_string()?;
            let amount = nested.read_i64()?;
            Ok(Asset::new(issuer, code, amount)?)
        })?;
        Ok(Self::new(dest_address, asset)?)
    }
}

impl OperationPayload for SetMetadata {
    const KIND: OperationKind = OperationKind::SetMetadata;

    fn project(operation: &Operation) -> Option<&Self> {
        match operation {
            Operation::SetMetadata(payload) => Some(payload),
            _ => None,
        }
    }

    fn encode_payload(&self, enc: &mut Encoder) {
        enc.write_str(self.key());
        enc.write_str(self.value());
        enc.write_i64(self.version());
        enc.write_bool(self.delete_flag());
    }

    fn decode_payload(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let key = dec.read_string()?;
        let value = dec.read_string()?;
        let version = dec.read_i64()?;
        let delete_flag = dec.read_bool()?;
        Ok(Self::new(key, value, version, delete_flag)?)
    }
}

impl OperationPayload for LogRecord {
    const KIND: OperationKind = OperationKind::Log;

    fn project(operation: &Operation) -> Option<&Self> {
        match operation {
            Operation::Log(payload) => Some(payload),
            _ => None,
        }
    }

    fn encode_payload(&self, enc: &mut Encoder) {
        enc.write_str(self.topic());
        enc.write_str_list(self.datas());
    }

    fn decode_payload(dec: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let topic = dec.read_string()?;
        let datas = dec.read_str_list()?;
        Ok(Self::new(topic, datas)?)
    }
}
