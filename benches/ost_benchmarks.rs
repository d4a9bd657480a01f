use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rbost_tree::OrderStatisticTree;
use std::collections::BTreeSet;

const N: usize = 10_000;

const NOT_FOUND: i64 = i64::MIN;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert Benchmarks (vs BTreeSet) ────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("OrderStatisticTree", N), |b| {
        b.iter(|| {
            let mut tree = OrderStatisticTree::new(NOT_FOUND);
            for i in 0..N as i64 {
                tree.insert(i);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in 0..N as i64 {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_reverse");

    group.bench_function(BenchmarkId::new("OrderStatisticTree", N), |b| {
        b.iter(|| {
            let mut tree = OrderStatisticTree::new(NOT_FOUND);
            for i in (0..N as i64).rev() {
                tree.insert(i);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in (0..N as i64).rev() {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OrderStatisticTree", N), |b| {
        b.iter(|| {
            let mut tree = OrderStatisticTree::new(NOT_FOUND);
            for &k in &keys {
                tree.insert(k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

// ─── Order-statistic query benchmarks ───────────────────────────────────────
//
// BTreeSet has no O(log n) counterpart for these; the closest expression is
// counting a range, which scans. Both are included to show the gap.

fn bench_rank(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: OrderStatisticTree<i64> = {
        let mut t = OrderStatisticTree::new(NOT_FOUND);
        t.extend(keys.iter().copied());
        t
    };
    let set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("rank_random");

    group.bench_function(BenchmarkId::new("OrderStatisticTree", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in &keys {
                sum = sum.wrapping_add(tree.rank(k));
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet_range_count", N), |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for k in keys.iter().take(100) {
                sum = sum.wrapping_add(set.range(..k).count());
            }
            sum
        });
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: OrderStatisticTree<i64> = {
        let mut t = OrderStatisticTree::new(NOT_FOUND);
        t.extend(keys.iter().copied());
        t
    };
    let set: BTreeSet<i64> = keys.iter().copied().collect();
    let len = tree.len() as i64;

    let mut group = c.benchmark_group("select_all_positions");

    group.bench_function(BenchmarkId::new("OrderStatisticTree", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in 0..len {
                sum = sum.wrapping_add(*tree.select(k));
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet_iter_nth", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in (0..set.len()).step_by(100) {
                if let Some(v) = set.iter().nth(k) {
                    sum = sum.wrapping_add(*v);
                }
            }
            sum
        });
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_reverse, bench_insert_random,);

criterion_group!(query_benches, bench_rank, bench_select,);

criterion_main!(insert_benches, query_benches,);
