//! Benchmarks for repetition and record parsing
//!
//! Measures `many`/`some1` over long inputs and multi-line employee parsing.
//!
//! Run with: cargo bench --bench repetition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parsel::combinator::{digit, identifier, many, some1};
use parsel::records::{multi_employee_parser, parse_batch, BatchConfig};

fn bench_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_digit");
    for len in [1_000usize, 100_000, 1_000_000] {
        let input = "7".repeat(len);
        let parser = many(digit());
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| parser.parse(black_box(input)))
        });
    }
    group.finish();
}

fn bench_identifier(c: &mut Criterion) {
    let input = format!("x{} tail", "a1".repeat(50_000));
    let parser = identifier();
    c.bench_function("identifier_100k", |b| {
        b.iter(|| parser.parse(black_box(&input)))
    });

    let digits = "9".repeat(100_000);
    let parser = some1(digit());
    c.bench_function("some1_digit_100k", |b| {
        b.iter(|| parser.parse(black_box(&digits)))
    });
}

fn staff(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            if i % 10 == 9 {
                "malformed line\n".to_string()
            } else {
                format!("Employee{},{},Position{}\n", i, 20 + i % 40, i % 7)
            }
        })
        .collect()
}

fn bench_records(c: &mut Criterion) {
    let input = staff(10_000);
    let parser = multi_employee_parser();
    c.bench_function("multi_employee_10k", |b| {
        b.iter(|| parser.parse(black_box(&input)))
    });

    let blocks: Vec<String> = (0..32).map(|_| staff(1_000)).collect();
    let refs: Vec<&str> = blocks.iter().map(String::as_str).collect();
    let config = BatchConfig::new().with_min_chunk_size(4);
    c.bench_function("parse_batch_32x1k", |b| {
        b.iter(|| parse_batch(black_box(&refs), &config))
    });
}

criterion_group!(benches, bench_many, bench_identifier, bench_records);
criterion_main!(benches);
