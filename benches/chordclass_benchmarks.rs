//! # Chordclass Performance Benchmarks
//!
//! - **Training**: statistics and model derivation over synthetic corpora
//! - **Classification**: single queries and parallel batches
//!
//! ```bash
//! cargo bench
//! cargo bench training
//! cargo bench classification
//! ```

use chordclass::algorithm::{self, ScoringContext};
use chordclass::model;
use chordclass::reference::reference_corpus;
use chordclass::song::{Corpus, DifficultyScale};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const ROOTS: [&str; 12] = ["c", "c#", "d", "eb", "e", "f", "f#", "g", "ab", "a", "bb", "b"];
const QUALITIES: [&str; 8] = ["", "m", "7", "maj7", "m7", "sus4", "dim", "add9"];

fn chord_pool() -> Vec<String> {
    ROOTS
        .iter()
        .flat_map(|root| QUALITIES.iter().map(move |quality| format!("{root}{quality}")))
        .collect()
}

/// Random corpus with `size` songs of 3-12 chords each.
fn create_synthetic_corpus(size: usize, rng: &mut StdRng) -> Corpus {
    let pool = chord_pool();
    let scale = DifficultyScale::default();
    let mut corpus = Corpus::new();

    for i in 0..size {
        let length = rng.gen_range(3..=12);
        let chords: Vec<&String> = pool.choose_multiple(rng, length).collect();
        let index = rng.gen_range(0..scale.names().len());
        corpus
            .add_rated_song(&format!("song{i:05}"), chords.as_slice(), index, &scale)
            .expect("Index is drawn from the scale");
    }
    corpus
}

fn create_queries(count: usize, rng: &mut StdRng) -> Vec<Vec<String>> {
    let pool = chord_pool();
    (0..count)
        .map(|_| {
            let length = rng.gen_range(1..=10);
            pool.choose_multiple(rng, length).cloned().collect()
        })
        .collect()
}

fn benchmark_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    let mut rng = StdRng::seed_from_u64(7);

    group.bench_function("reference_corpus", |b| {
        let corpus = reference_corpus();
        b.iter(|| model::train(black_box(&corpus)))
    });

    for size in [100, 1_000, 10_000] {
        let corpus = create_synthetic_corpus(size, &mut rng);
        group.bench_with_input(BenchmarkId::new("synthetic", size), &corpus, |b, corpus| {
            b.iter(|| model::train(black_box(corpus)))
        });
    }

    group.finish();
}

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let mut rng = StdRng::seed_from_u64(11);
    let context = ScoringContext::default();
    let model = model::train(&create_synthetic_corpus(1_000, &mut rng)).expect("Corpus is non-empty");

    let query = ["f#m7", "a", "dadd9", "dmaj7", "bm", "bm7", "d", "f#m"];
    group.bench_function("single_query", |b| {
        b.iter(|| algorithm::classify(black_box(&model), black_box(&query), &context))
    });

    for count in [10, 100, 1_000] {
        let queries = create_queries(count, &mut rng);
        group.bench_with_input(BenchmarkId::new("batch", count), &queries, |b, queries| {
            b.iter(|| algorithm::batch_classify(black_box(&model), black_box(queries.as_slice()), &context))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_training, benchmark_classification);
criterion_main!(benches);
