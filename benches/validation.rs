//! Benchmarks for the email syntax check strategies.
//!
//! Runs both strategies over the sample corpus and over single addresses.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use email_checker::benchmark::DEFAULT_CORPUS;
use email_checker::validation::{ValidationStrategy, is_email_from_domain};
use std::hint::black_box;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid_email");
    group.throughput(Throughput::Elements(DEFAULT_CORPUS.len() as u64));

    for strategy in ValidationStrategy::ALL {
        group.bench_with_input(BenchmarkId::new("corpus", strategy), &strategy, |b, strategy| {
            b.iter(|| {
                for email in DEFAULT_CORPUS {
                    black_box(strategy.validate(black_box(email)));
                }
            })
        });
    }

    group.finish();
}

fn bench_single_addresses(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    for strategy in ValidationStrategy::ALL {
        // Accepted after every check runs
        group.bench_with_input(BenchmarkId::new("valid", strategy), &strategy, |b, strategy| {
            b.iter(|| strategy.validate(black_box("first.last@subdomain.example.com")))
        });

        // Rejected on the first check
        group.bench_with_input(BenchmarkId::new("no_at", strategy), &strategy, |b, strategy| {
            b.iter(|| strategy.validate(black_box("plainaddress")))
        });
    }

    group.bench_function("is_email_from_domain", |b| {
        b.iter(|| is_email_from_domain(black_box("user@example.com"), black_box("example.com")))
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_single_addresses);
criterion_main!(benches);
