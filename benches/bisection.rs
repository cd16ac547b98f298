// Benchmark suite for order key generation
//
// Workloads that mirror how reorderable lists actually behave:
// - append: every new item goes at the end (keys stay in the integer part)
// - prepend: every new item goes at the front
// - wedge: repeated insertion into the same gap (worst case for key growth)
// - shuffle: insertion into random gaps of a growing list

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use betwixt::between::key_between;
use betwixt::key::OrderKey;

// =============================================================================
// Benchmark Helpers
// =============================================================================

/// Generate `count` keys by always appending after the last one.
fn append_chain(count: usize) -> Vec<OrderKey> {
    let mut keys = Vec::with_capacity(count);
    let mut last = key_between(None, None).unwrap();
    for _ in 1..count {
        let next = key_between(Some(&last), None).unwrap();
        keys.push(last);
        last = next;
    }
    keys.push(last);
    return keys;
}

/// Generate `count` keys by always wedging into the same gap.
fn wedge_chain(count: usize) -> Vec<OrderKey> {
    let mut keys = Vec::with_capacity(count);
    let mut lower = key_between(None, None).unwrap();
    let upper = key_between(Some(&lower), None).unwrap();
    for _ in 0..count {
        let next = key_between(Some(&lower), Some(&upper)).unwrap();
        keys.push(lower);
        lower = next;
    }
    return keys;
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for count in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(append_chain(count)));
        });
    }
    group.finish();
}

fn bench_prepend(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepend");
    for count in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut first = key_between(None, None).unwrap();
                for _ in 1..count {
                    first = key_between(None, Some(&first)).unwrap();
                }
                black_box(first)
            });
        });
    }
    group.finish();
}

fn bench_wedge(c: &mut Criterion) {
    let mut group = c.benchmark_group("wedge");
    for count in [100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(wedge_chain(count)));
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    for count in [100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let mut keys = vec![key_between(None, None).unwrap()];
                for _ in 1..count {
                    let slot = rng.gen_range(0..=keys.len());
                    let lower = if slot == 0 { None } else { keys.get(slot - 1) };
                    let upper = keys.get(slot);
                    let fresh = key_between(lower, upper).unwrap();
                    keys.insert(slot, fresh);
                }
                black_box(keys.len())
            });
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let keys = append_chain(1_000);
    let raw: Vec<&str> = keys.iter().map(|key| key.as_str()).collect();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(raw.len() as u64));
    group.bench_function("revalidate_1000", |b| {
        b.iter(|| {
            for key in &raw {
                black_box(OrderKey::parse(key).unwrap());
            }
        });
    });
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_append,
    bench_prepend,
    bench_wedge,
    bench_shuffle,
    bench_parse,
);

criterion_main!(benches);
