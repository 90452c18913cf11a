// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use roster_alloc_model::prelude::*;
use roster_alloc_solver::prelude::*;
use std::hint::black_box;

/// Build a mid-sized rostering problem: `workers` staff over `days` days
/// with `shifts` shift kinds to pick from.
fn build_config(workers: u64, days: i64, shifts: u64) -> OptimizationConfig {
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let end = start + chrono::Duration::days(days - 1);
    OptimizationConfig::builder()
        .with_workers((1..=workers).map(WorkerIdentifier::new))
        .with_period(start, end)
        .with_shifts((1..=shifts).map(|s| Shift::from_id(ShiftIdentifier::new(s))))
        .with_min_daily_staff(3)
        .with_max_generations(200)
        .with_seed(0xB0A7)
        .build()
}

fn bench_hybrid_pipeline(c: &mut Criterion) {
    let config = build_config(10, 14, 5);
    c.bench_function("hybrid_10_workers_14_days", |b| {
        b.iter(|| {
            let result = HybridOptimizer::new()
                .optimize(black_box(&config))
                .expect("config is valid");
            black_box(result)
        })
    });
}

fn bench_genetic_stage(c: &mut Criterion) {
    let config = build_config(10, 14, 5);
    let model = RosterModel::new(&config);
    c.bench_function("genetic_stage_10_workers_14_days", |b| {
        b.iter(|| {
            let mut rng = <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(0xB0A7);
            let outcome = GeneticOptimizer::new().run(black_box(&model), &mut rng);
            black_box(outcome)
        })
    });
}

fn bench_evaluator(c: &mut Criterion) {
    let config = build_config(10, 14, 5);
    let model = RosterModel::new(&config);
    let mut rng = <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(1);
    // a single low-budget run just to obtain a realistic schedule
    let throwaway = GeneticOptimizer::new()
        .with_population_size(8)
        .run(&model, &mut rng);
    let evaluator = FitnessEvaluator::new(&model);
    c.bench_function("evaluate_10_workers_14_days", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&throwaway.best))))
    });
}

criterion_group!(
    benches,
    bench_hybrid_pipeline,
    bench_genetic_stage,
    bench_evaluator
);
criterion_main!(benches);
