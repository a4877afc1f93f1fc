//! End-to-end tests for the BUMO transaction core.
//!
//! These tests go through the public API only: build a transaction, encode
//! it, decode it, hash it. They pin the reference encoding of the SDK
//! sample transfer so any accidental wire change fails loudly.

use std::sync::Arc;
use std::thread;

use bumo_protocol::codec::{self, DecodeError, Encoder};
use bumo_protocol::config::{
    MAX_OPERATIONS_PER_TRANSACTION, METADATA_VALUE_MAX_SIZE, TRANSACTION_LIMIT_SIZE,
};
use bumo_protocol::transaction::{
    Asset, ConstructionError, Operation, OperationKind, Transaction, TransactionBuilder,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const SOURCE: &str = "buQmWJrdYJP5CPKTbkQUqscwvTGaU44dord8";
const DEST: &str = "buQVkUUBKpDKRmHYWw1MU8U7ngoQehno165i";
const OTHER: &str = "buQpCTN3x6K4pAyboF4C1CoUYbr2ooqRyCjZ";

const TRANSFER_HEX: &str = "246275516d574a7264594a503543504b54626b51557173637776544761553434646f7264380280897ad00f01072724627551566b5555424b70444b526d48595777314d553855376e676f5165686e6f31363569d00f";
const TRANSFER_HASH: &str = "c407a2e676a47f2f256494ea29ec8cb1977282d39062c19cf2243fd71a290115";

/// The single-transfer transaction used in the BUMO SDK samples.
fn sample_transfer() -> Transaction {
    Transaction::new(
        SOURCE,
        1,
        1_000_000,
        1000,
        vec![Operation::pay_coin(DEST, 1000).expect("valid pay coin")],
    )
    .expect("valid transaction")
}

/// A transaction exercising every registered operation kind.
fn mixed_transaction() -> Transaction {
    TransactionBuilder::new(SOURCE)
        .nonce(i64::MAX)
        .fee_limit(i64::MAX)
        .gas_price(0)
        .operation(Operation::create_account(OTHER, 10_000_000).unwrap())
        .operation(Operation::issue_asset("CNY", 1_000_000_000).unwrap())
        .operation(
            Operation::pay_asset(OTHER, Asset::new(SOURCE, "CNY", 500).unwrap()).unwrap(),
        )
        .operation(Operation::set_metadata("profile", "{\"name\":\"alice\"}", 1, false).unwrap())
        .operation(Operation::pay_coin(DEST, 0).unwrap())
        .operation(Operation::log("audit", vec!["issued".into(), "paid".into()]).unwrap())
        .build()
        .expect("valid transaction")
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn sample_transfer_has_fixed_encoding() {
    let tx = sample_transfer();
    assert_eq!(hex::encode(tx.encode()), TRANSFER_HEX);
    assert_eq!(tx.hash_hex(), TRANSFER_HASH);
}

#[test]
fn sample_transfer_roundtrips() {
    let tx = sample_transfer();
    let decoded = codec::decode(&codec::encode(&tx)).expect("decode");
    assert_eq!(decoded, tx);
    assert_eq!(decoded.source_address(), SOURCE);
    assert_eq!(decoded.nonce(), 1);
    assert_eq!(decoded.fee_limit(), 1_000_000);
    assert_eq!(decoded.gas_price(), 1000);
    match decoded.operations() {
        [Operation::PayCoin(pay)] => {
            assert_eq!(pay.dest_address(), DEST);
            assert_eq!(pay.amount(), 1000);
        }
        other => panic!("expected a single PayCoin, got {other:?}"),
    }
}

#[test]
fn empty_transaction_roundtrips() {
    let tx = Transaction::new(SOURCE, 1, 1_000_000, 1000, vec![]).unwrap();
    let bytes = tx.encode();
    assert_eq!(*bytes.last().unwrap(), 0x00, "operation count must be 0");
    let decoded = Transaction::decode(&bytes).unwrap();
    assert!(decoded.operations().is_empty());
    assert_eq!(decoded, tx);
}

#[test]
fn mixed_transaction_roundtrips_in_order() {
    let tx = mixed_transaction();
    let decoded = Transaction::decode(&tx.encode()).unwrap();
    assert_eq!(decoded, tx);

    let kinds: Vec<OperationKind> = decoded.operations().iter().map(Operation::kind).collect();
    assert_eq!(
        kinds,
        vec![
            OperationKind::CreateAccount,
            OperationKind::IssueAsset,
            OperationKind::PayAsset,
            OperationKind::SetMetadata,
            OperationKind::PayCoin,
            OperationKind::Log,
        ]
    );
}

#[test]
fn negative_nonce_roundtrips() {
    // Nonce is opaque; even i64::MIN must survive.
    let tx = Transaction::new(SOURCE, i64::MIN, 0, 0, vec![]).unwrap();
    assert_eq!(Transaction::decode(&tx.encode()).unwrap(), tx);
}

#[test]
fn max_operations_roundtrip() {
    let ops = (0..MAX_OPERATIONS_PER_TRANSACTION as i64)
        .map(|i| Operation::pay_coin(DEST, i).unwrap())
        .collect();
    let tx = Transaction::new(SOURCE, 7, 1, 1, ops).unwrap();
    assert_eq!(Transaction::decode(&tx.encode()).unwrap(), tx);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn encoding_is_deterministic() {
    let tx = mixed_transaction();
    let first = tx.encode();
    let second = tx.encode();
    assert_eq!(first, second);

    // Two independently built but equal values encode identically as well.
    assert_eq!(mixed_transaction().encode(), first);
}

#[test]
fn concurrent_encoding_agrees() {
    let tx = Arc::new(mixed_transaction());
    let expected = tx.encode();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tx = Arc::clone(&tx);
            thread::spawn(move || tx.encode())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("encoder thread panicked"), expected);
    }
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn negative_pay_coin_amount_is_construction_error() {
    assert!(matches!(
        Operation::pay_coin(DEST, -1),
        Err(ConstructionError::Negative { .. })
    ));
}

#[test]
fn empty_source_address_is_construction_error() {
    assert!(matches!(
        Transaction::new("", 1, 0, 0, vec![]),
        Err(ConstructionError::EmptyField {
            field: "source_address"
        })
    ));
}

#[test]
fn oversized_transaction_is_construction_error() {
    // Every value is within its own limit, but five of them together are not.
    let big = "v".repeat(METADATA_VALUE_MAX_SIZE);
    let ops: Vec<Operation> = (0..5)
        .map(|i| Operation::set_metadata(format!("key{i}"), big.clone(), 0, false).unwrap())
        .collect();
    assert!(matches!(
        Transaction::new(SOURCE, 1, 0, 0, ops),
        Err(ConstructionError::TooLarge { max: TRANSACTION_LIMIT_SIZE, .. })
    ));

    let long_source = "b".repeat(2 * TRANSACTION_LIMIT_SIZE);
    assert!(matches!(
        Transaction::new(long_source, 1, 0, 0, vec![]),
        Err(ConstructionError::TooLarge { .. })
    ));
}

#[test]
fn largest_valid_transaction_roundtrips() {
    let big = "v".repeat(METADATA_VALUE_MAX_SIZE);
    let ops: Vec<Operation> = (0..3)
        .map(|i| Operation::set_metadata(format!("key{i}"), big.clone(), 0, false).unwrap())
        .collect();
    let tx = Transaction::new(SOURCE, 1, 0, 0, ops).expect("three values fit");

    let bytes = tx.encode();
    assert!(bytes.len() < TRANSACTION_LIMIT_SIZE);
    assert_eq!(codec::decode(&bytes).expect("decode"), tx);
}

#[test]
fn unregistered_discriminant_is_unknown_kind() {
    let mut enc = Encoder::new();
    enc.write_str(SOURCE);
    enc.write_i64(1);
    enc.write_i64(0);
    enc.write_i64(0);
    enc.write_varint(1);
    // SET_THRESHOLD (6) is a real ledger kind but not registered here.
    enc.write_varint(6);
    enc.write_nested(|payload| payload.write_i64(1));

    assert_eq!(
        codec::decode(&enc.into_bytes()),
        Err(DecodeError::UnknownOperationKind { discriminant: 6 })
    );
}

#[test]
fn oversized_length_prefix_is_truncated_input() {
    let mut bytes = hex::decode(TRANSFER_HEX).unwrap();
    // The source address length prefix claims 100 bytes.
    bytes[0] = 100;
    assert!(matches!(
        codec::decode(&bytes),
        Err(DecodeError::TruncatedInput { needed: 100, .. })
    ));
}

#[test]
fn corrupted_payload_amount_is_invalid_field() {
    let mut bytes = hex::decode(TRANSFER_HEX).unwrap();
    // Last two bytes are zigzag(1000); make them zigzag(-1000) = 1999.
    let len = bytes.len();
    bytes[len - 2] = 0xCF;
    bytes[len - 1] = 0x0F;
    assert!(matches!(
        codec::decode(&bytes),
        Err(DecodeError::InvalidField(ConstructionError::Negative { .. }))
    ));
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[test]
fn json_and_binary_agree() {
    let tx = mixed_transaction();
    let json = serde_json::to_string(&tx).unwrap();
    let from_json: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json.encode(), tx.encode());
}

#[test]
fn json_shape_is_stable() {
    let value = serde_json::to_value(sample_transfer()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "source_address": SOURCE,
            "nonce": 1,
            "fee_limit": 1_000_000,
            "gas_price": 1000,
            "operations": [
                { "type": "PAY_COIN", "dest_address": DEST, "amount": 1000 }
            ]
        })
    );
}
