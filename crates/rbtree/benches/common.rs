use std::collections::BTreeSet;
use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_small_runtime_config, default_rng, distinct_keys};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::Rng;
use rand::rngs::StdRng;

use rbtree::RbTree;

const SIZES: [usize; 4] = [1_000, 8_000, 64_000, 256_000];
const OPS_PER_ITER: usize = 200;
const HIT_RATE_PERCENT: u32 = 80;

trait KeySet {
    fn new() -> Self;
    fn len(&self) -> usize;
    fn insert(&mut self, key: u64) -> bool;
    fn remove(&mut self, key: &u64) -> bool;
    fn contains(&self, key: &u64) -> bool;
}

impl KeySet for RbTree<u64> {
    fn new() -> Self {
        RbTree::new()
    }

    fn len(&self) -> usize {
        RbTree::len(self)
    }

    fn insert(&mut self, key: u64) -> bool {
        RbTree::insert(self, key).is_inserted()
    }

    fn remove(&mut self, key: &u64) -> bool {
        RbTree::remove(self, key).is_removed()
    }

    fn contains(&self, key: &u64) -> bool {
        RbTree::contains(self, key)
    }
}

impl KeySet for BTreeSet<u64> {
    fn new() -> Self {
        BTreeSet::new()
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn insert(&mut self, key: u64) -> bool {
        BTreeSet::insert(self, key)
    }

    fn remove(&mut self, key: &u64) -> bool {
        BTreeSet::remove(self, key)
    }

    fn contains(&self, key: &u64) -> bool {
        BTreeSet::contains(self, key)
    }
}

#[derive(Clone, Copy)]
enum Op {
    Contains { key: u64 },
    Insert { key: u64 },
    Remove { key: u64 },
}

fn build<S: KeySet>(keys: &[u64]) -> S {
    let mut set = S::new();
    for &k in keys {
        black_box(set.insert(k));
    }
    set
}

fn probe_key(keys: &[u64], rng: &mut StdRng) -> u64 {
    if rng.random_range(0..100) < HIT_RATE_PERCENT {
        keys[rng.random_range(0..keys.len())]
    } else {
        rng.random()
    }
}

fn generate_read_ops(keys: &[u64], rng: &mut StdRng) -> Vec<Op> {
    (0..OPS_PER_ITER)
        .map(|_| Op::Contains {
            key: probe_key(keys, rng),
        })
        .collect()
}

/// 10% inserts of fresh keys, 10% removes of those same keys, 80% reads.
fn generate_mixed_ops(keys: &[u64], rng: &mut StdRng) -> Vec<Op> {
    let updates = OPS_PER_ITER / 10;
    let mut ops = Vec::with_capacity(OPS_PER_ITER);
    let mut live = Vec::with_capacity(updates);
    for i in 0..OPS_PER_ITER {
        if i % 10 == 0 {
            let key = rng.random::<u64>() | 1;
            live.push(key);
            ops.push(Op::Insert { key });
        } else if i % 10 == 5 {
            let idx = rng.random_range(0..live.len());
            ops.push(Op::Remove {
                key: live.swap_remove(idx),
            });
        } else {
            ops.push(Op::Contains {
                key: probe_key(keys, rng),
            });
        }
    }
    debug_assert!(live.is_empty());
    ops
}

fn run_ops<S: KeySet>(set: &mut S, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Contains { key } => {
                black_box(set.contains(&key));
            }
            Op::Insert { key } => {
                black_box(set.insert(key));
            }
            Op::Remove { key } => {
                black_box(set.remove(&key));
            }
        }
    }
}

fn bench_build<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: KeySet,
{
    let mut rng = default_rng();
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let keys = distinct_keys(&mut rng, size);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let set = build::<S>(&keys);
                black_box(set.len())
            })
        });
    }
}

fn bench_ops<S, T, F>(group: &mut BenchmarkGroup<'_, T>, label: &str, generate: F)
where
    T: Measurement<Value = Duration>,
    S: KeySet,
    F: Fn(&[u64], &mut StdRng) -> Vec<Op>,
{
    let mut rng = default_rng();
    for &size in &SIZES {
        apply_small_runtime_config(group);
        // Even keys only, so the odd keys drawn for inserts are always fresh.
        let keys = distinct_keys(&mut rng, size)
            .into_iter()
            .map(|k| k << 1)
            .collect::<Vec<_>>();
        let mut set = build::<S>(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let ops = generate(&keys, &mut rng);
                    let start = Instant::now();
                    run_ops(&mut set, &ops);
                    black_box(set.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

pub fn bench_all_build<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_build::<RbTree<u64>, _>(group, "rbtree");
    bench_build::<BTreeSet<u64>, _>(group, "std_btree");
}

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_ops::<RbTree<u64>, _, _>(group, "rbtree", generate_read_ops);
    bench_ops::<BTreeSet<u64>, _, _>(group, "std_btree", generate_read_ops);
}

pub fn bench_all_mixed<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_ops::<RbTree<u64>, _, _>(group, "rbtree", generate_mixed_ops);
    bench_ops::<BTreeSet<u64>, _, _>(group, "std_btree", generate_mixed_ops);
}
