use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use knapnuts::knapsack::{Item, Strategy, classic_cakes};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, classic_bench, random_items_bench);

const CAPACITIES: [u64; 3] = [1_000, 100_000, 1_000_000];
const N_RANDOM_ITEMS: usize = 64;

/// Every strategy on the classic cake set, with growing capacity.
/// The dynamic programming strategy scales with the capacity, the greedy ones should not.
fn classic_bench(c: &mut Criterion) {
    let cakes = classic_cakes();
    for strategy in Strategy::ALL {
        let solver = strategy.solver();
        let mut group = c.benchmark_group(format!("classic_{strategy}"));
        for capacity in CAPACITIES {
            group.throughput(Throughput::Elements(capacity));
            group.bench_function(BenchmarkId::from_parameter(capacity), |b| {
                b.iter(|| solver.max_value(black_box(capacity), black_box(&cakes)))
            });
        }
        group.finish();
    }
}

/// Greedy strategies on many item types with frequent ties, which forces a lot of retry passes.
fn random_items_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let items = (0..N_RANDOM_ITEMS)
        .map(|_| {
            let weight = rng.random_range(1..=100);
            Item::new(weight, weight * rng.random_range(1..=3)).expect("weight is positive")
        })
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("random_items_greedy");
    for strategy in [Strategy::GreedyPQueue, Strategy::GreedySort] {
        let solver = strategy.solver();
        group.bench_function(BenchmarkId::from_parameter(strategy), |b| {
            b.iter(|| solver.max_value(black_box(10_007), black_box(&items)))
        });
    }
    group.finish();
}
