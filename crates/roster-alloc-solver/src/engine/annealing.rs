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

use crate::engine::optimizer::{Optimizer, SearchOutcome};
use crate::engine::{resample_gene, seed_schedule};
use crate::eval::FitnessEvaluator;
use crate::model::RosterModel;
use rand::Rng;
use roster_alloc_model::prelude::Schedule;

/// Temperature below which the annealing loop stops.
///
/// In the same units as the config's `initial_temperature`; a start
/// temperature at or near the floor is a valid fast-exit configuration,
/// not an error.
pub const TEMPERATURE_FLOOR: f64 = 1.0;

/// Metropolis acceptance ratio for a fitness delta at a temperature.
///
/// Greater than 1 for an improving move (always accepted), exactly 1 for a
/// sideways move, and a strict probability in (0, 1) for a worsening move
/// at positive temperature.
#[inline]
pub fn acceptance_ratio(delta: f64, temperature: f64) -> f64 {
    (delta / temperature).exp()
}

/// Single-solution local search with temperature-controlled acceptance.
///
/// `Seed → (Propose-Move → Accept/Reject → Cool)*`; a move rewrites exactly
/// one (worker, day) gene. Geometric cooling per iteration; the loop ends at
/// [`TEMPERATURE_FLOOR`] or the config's iteration budget. The best
/// chromosome observed is retained across accepted and rejected candidates,
/// since the walk may wander away from its best point.
#[derive(Debug, Clone, Default)]
pub struct AnnealingOptimizer {
    seed_schedule: Option<Schedule>,
}

impl AnnealingOptimizer {
    pub fn new() -> Self {
        Self {
            seed_schedule: None,
        }
    }

    /// Starts the walk from an explicit chromosome instead of a fresh
    /// random seed; the hybrid stage uses this to chain the genetic result.
    pub fn with_seed_schedule(mut self, schedule: Schedule) -> Self {
        self.seed_schedule = Some(schedule);
        self
    }
}

impl Optimizer for AnnealingOptimizer {
    fn name(&self) -> &str {
        "Simulated Annealing"
    }

    fn run<R: Rng>(&self, model: &RosterModel, rng: &mut R) -> SearchOutcome {
        let evaluator = FitnessEvaluator::new(model);

        let mut current = match &self.seed_schedule {
            Some(schedule) => schedule.clone(),
            None => seed_schedule(model, rng),
        };
        let mut current_fitness = evaluator.evaluate(&current);

        let mut best = current.clone();
        let mut best_fitness = current_fitness;

        let mut temperature = model.initial_temperature();
        let mut iterations = 0u64;

        while temperature >= TEMPERATURE_FLOOR && iterations < model.max_generations() {
            iterations += 1;

            let w = rng.random_range(0..model.worker_count());
            let d = rng.random_range(0..model.period_days());
            let mut candidate = current.clone();
            let next_gene = resample_gene(model, candidate.gene(w, d), rng);
            candidate.set_gene(w, d, next_gene);

            let candidate_fitness = evaluator.evaluate(&candidate);

            // track the best over every evaluated candidate, not only the
            // accepted ones
            if candidate_fitness.better_than(&best_fitness) {
                best = candidate.clone();
                best_fitness = candidate_fitness;
            }

            let delta = candidate_fitness.total - current_fitness.total;
            let ratio = acceptance_ratio(delta, temperature);
            if ratio >= 1.0 || rng.random::<f64>() < ratio {
                current = candidate;
                current_fitness = candidate_fitness;
            }

            temperature *= model.cooling_rate();
        }

        tracing::debug!(
            iterations,
            final_temperature = temperature,
            best = %best_fitness,
            "annealing finished"
        );

        SearchOutcome {
            best,
            fitness: best_fitness,
            iterations,
        }
    }
}
