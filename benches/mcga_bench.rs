//! Criterion benchmarks for the multi-criteria GA engine.
//!
//! Uses a synthetic integer-search problem (minimise the distance between
//! a Gray-decoded gene and a target value) to measure pure engine
//! overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pareto_ga::{
    BitVector, Chromosome, Cost, CostFunction, Gene, KeepBestRankLotteryBreeder, Mcga,
    PopulationFactory,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Cost: distance of each Gray-decoded gene from its target value.
struct IntCost {
    targets: Vec<u64>,
}

impl CostFunction for IntCost {
    fn cost(&self, chromosome: &Chromosome) -> Vec<Cost> {
        chromosome
            .genes()
            .iter()
            .zip(&self.targets)
            .map(|(gene, &target)| {
                let decoded = gene
                    .inverse_gray_code()
                    .ok()
                    .and_then(|g| g.bits().ok().and_then(BitVector::to_u64))
                    .unwrap_or(0);
                Cost::scalar((decoded as f64 - target as f64).abs())
            })
            .collect()
    }
}

/// Factory: random Gray-coded genes of a fixed length.
struct GrayFactory {
    gene_length: usize,
    n_genes: usize,
    rng: StdRng,
}

impl PopulationFactory for GrayFactory {
    fn build_population(&mut self, size: usize) -> Vec<Chromosome> {
        (0..size)
            .map(|_| {
                let genes = (0..self.n_genes)
                    .map(|_| Gene::GrayCode(BitVector::random(self.gene_length, &mut self.rng)))
                    .collect();
                Chromosome::from_genes(genes).expect("no wildcards")
            })
            .collect()
    }
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcga_step");

    for &pop_size in &[50usize, 100, 200] {
        group.bench_with_input(
            BenchmarkId::from_parameter(pop_size),
            &pop_size,
            |b, &pop_size| {
                b.iter(|| {
                    let breeder = KeepBestRankLotteryBreeder::new(0.2, 0.05, 1);
                    let cost = IntCost {
                        targets: vec![87315],
                    };
                    let mut factory = GrayFactory {
                        gene_length: 20,
                        n_genes: 1,
                        rng: StdRng::seed_from_u64(7),
                    };
                    let mut ga =
                        Mcga::from_factory(breeder, cost, pop_size, &mut factory).with_seed(42);
                    for _ in 0..10 {
                        black_box(ga.step(false).unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_diversity(c: &mut Criterion) {
    let breeder = KeepBestRankLotteryBreeder::new(0.2, 0.05, 1);
    let cost = IntCost {
        targets: vec![87315],
    };
    let mut factory = GrayFactory {
        gene_length: 20,
        n_genes: 1,
        rng: StdRng::seed_from_u64(7),
    };
    let ga = Mcga::from_factory(breeder, cost, 100, &mut factory).with_seed(42);

    c.bench_function("difference0_100", |b| b.iter(|| black_box(ga.difference0())));
    c.bench_function("difference_100", |b| b.iter(|| black_box(ga.difference())));
}

criterion_group!(benches, bench_step, bench_diversity);
criterion_main!(benches);
