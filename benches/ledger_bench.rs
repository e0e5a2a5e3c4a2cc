use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use skillchain::{CanonicalEncoding, CredentialLedger, LedgerConfig};

mod common;
use common::generate_claims;

fn ledger_with(count: usize) -> CredentialLedger {
    let mut ledger = CredentialLedger::open(LedgerConfig::in_memory()).unwrap();
    for claim in generate_claims(count) {
        ledger.issue(&claim).unwrap();
    }
    ledger
}

/// Issue cost grows with ledger size because every issue rewrites the document
fn bench_issue(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_issue");
    let next = generate_claims(1001).pop().unwrap();

    for size in [0usize, 100, 1000] {
        group.bench_function(BenchmarkId::new("in_memory", size), |b| {
            b.iter_batched(
                || ledger_with(size),
                |mut ledger| ledger.issue(black_box(&next)).unwrap(),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_verify");
    let claims = generate_claims(1000);
    let ledger = ledger_with(1000);

    group.bench_function("first_record", |b| {
        b.iter(|| ledger.verify(black_box(&claims[0])).unwrap());
    });
    group.bench_function("last_record", |b| {
        b.iter(|| ledger.verify(black_box(&claims[999])).unwrap());
    });

    group.finish();
}

fn bench_canonical_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_hash");
    let content = generate_claims(1)[0].resolve("SkillChain DX Platform");

    for encoding in [CanonicalEncoding::Compact, CanonicalEncoding::Spaced] {
        group.bench_function(format!("{encoding:?}"), |b| {
            b.iter(|| black_box(&content).canonical_hash(encoding).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_issue, bench_verify, bench_canonical_hash);
criterion_main!(benches);
