// Codec benchmarks for the BUMO transaction core.
//
// Covers building, encoding, decoding and hashing a single transfer, plus
// encode/decode throughput as the operation count grows to the limit.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bumo_protocol::codec::{decode, encode};
use bumo_protocol::transaction::{Operation, Transaction, TransactionBuilder};

const SOURCE: &str = "buQmWJrdYJP5CPKTbkQUqscwvTGaU44dord8";
const DEST: &str = "buQVkUUBKpDKRmHYWw1MU8U7ngoQehno165i";

fn transfer_with(ops: usize) -> Transaction {
    TransactionBuilder::new(SOURCE)
        .nonce(42)
        .gas_price(1000)
        .fee_limit(1_000_000)
        .operations((0..ops).map(|i| Operation::pay_coin(DEST, 1000 + i as i64).unwrap()))
        .build()
        .unwrap()
}

fn bench_build_transfer(c: &mut Criterion) {
    c.bench_function("codec/build_transfer", |b| {
        b.iter(|| transfer_with(black_box(1)));
    });
}

fn bench_encode_transfer(c: &mut Criterion) {
    let tx = transfer_with(1);
    c.bench_function("codec/encode_transfer", |b| {
        b.iter(|| encode(black_box(&tx)));
    });
}

fn bench_decode_transfer(c: &mut Criterion) {
    let bytes = encode(&transfer_with(1));
    c.bench_function("codec/decode_transfer", |b| {
        b.iter(|| decode(black_box(&bytes)).unwrap());
    });
}

fn bench_hash_transfer(c: &mut Criterion) {
    let tx = transfer_with(1);
    c.bench_function("codec/hash_transfer", |b| {
        b.iter(|| black_box(&tx).hash());
    });
}

fn bench_operation_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/operations");

    for size in [1, 10, 50, 100] {
        let tx = transfer_with(size);
        let bytes = encode(&tx);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &tx, |b, tx| {
            b.iter(|| encode(tx));
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &bytes, |b, bytes| {
            b.iter(|| decode(bytes).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_transfer,
    bench_encode_transfer,
    bench_decode_transfer,
    bench_hash_transfer,
    bench_operation_count,
);
criterion_main!(benches);
