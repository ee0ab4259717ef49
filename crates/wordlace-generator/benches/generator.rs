//! Benchmarks for word-search puzzle generation.
//!
//! This benchmark suite measures the complete generation process: priority
//! partitioning, random placement with retry budgets, and the final letter
//! fill.
//!
//! # Benchmarks
//!
//! - **`generator_default`**: Generates 15×15 puzzles from a mixed word list
//!   with the default configuration.
//! - **`generator_dense`**: Generates 10×10 puzzles from the same list,
//!   forcing heavier placement contention and more retries.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases; each seed produces a different puzzle.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use wordlace_core::{Word, WordList};
use wordlace_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_words() -> WordList {
    [
        ("telescope", true),
        ("nebula", true),
        ("galaxy", true),
        ("comet", true),
        ("orbit", false),
        ("planet", false),
        ("meteor", false),
        ("eclipse", false),
        ("quasar", false),
        ("pulsar", false),
        ("aurora", false),
        ("gravity", false),
    ]
    .into_iter()
    .map(|(word, priority)| (Word::new(word).unwrap(), priority))
    .collect()
}

fn bench_generator_default(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    let words = bench_words();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_default", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&words, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_dense(c: &mut Criterion) {
    let generator = PuzzleGenerator::with_config(GeneratorConfig::default().grid_size(10));
    let words = bench_words();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_dense", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&words, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_default,
        bench_generator_dense
);
criterion_main!(benches);
