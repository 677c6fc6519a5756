use std::hint::black_box;

use broker_data::{compare, Data, Record, Table};
use criterion::{criterion_group, criterion_main, Criterion};

/// A log-row-like record with a nested table and vector.
fn sample_row(seed: u64) -> Data {
    let mut headers = Table::new();
    for i in 0..16u64 {
        headers.insert(Data::from(format!("header-{i}")), Data::from(seed + i));
    }
    Data::from(Record::new(vec![
        Some(Data::from(seed)),
        Some(Data::from("10.0.0.1")),
        None,
        Some(Data::from(headers)),
        Some(Data::from((0..32).map(Data::from).collect::<Vec<_>>())),
    ]))
}

fn deep_vector(depth: usize) -> Data {
    let mut d = Data::from(0u64);
    for _ in 0..depth {
        d = Data::from(vec![d]);
    }
    d
}

fn bench_compare(c: &mut Criterion) {
    let a = sample_row(1);
    let b = sample_row(1);
    c.bench_function("compare_equal_rows", |bench| {
        bench.iter(|| compare(black_box(&a), black_box(&b)))
    });

    let deep_a = deep_vector(10_000);
    let deep_b = deep_vector(10_000);
    c.bench_function("compare_deep_vectors", |bench| {
        bench.iter(|| compare(black_box(&deep_a), black_box(&deep_b)))
    });
}

fn bench_hash(c: &mut Criterion) {
    let row = sample_row(7);
    c.bench_function("hash_row", |bench| bench.iter(|| black_box(&row).hash_code()));
}

criterion_group!(benches, bench_compare, bench_hash);
criterion_main!(benches);
