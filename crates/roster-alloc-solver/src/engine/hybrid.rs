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

use crate::engine::annealing::AnnealingOptimizer;
use crate::engine::genetic::GeneticOptimizer;
use crate::engine::optimizer::Optimizer;
use crate::model::RosterModel;
use crate::support::SeedSplitter;
use roster_alloc_model::prelude::{ConfigError, OptimizationConfig, OptimizationResult};
use std::time::Instant;

/// Two-stage pipeline: a genetic population search for global exploration,
/// then a simulated-annealing walk seeded from the genetic champion for
/// local refinement. The reported best is whichever stage produced the
/// higher fitness, so the refinement stage can never lose ground already
/// won.
#[derive(Debug, Clone, Default)]
pub struct HybridOptimizer {
    genetic: GeneticOptimizer,
    annealing: AnnealingOptimizer,
}

impl HybridOptimizer {
    pub fn new() -> Self {
        Self {
            genetic: GeneticOptimizer::new(),
            annealing: AnnealingOptimizer::new(),
        }
    }

    /// Replaces the genetic stage, keeping the pipeline wiring.
    pub fn with_genetic(mut self, genetic: GeneticOptimizer) -> Self {
        self.genetic = genetic;
        self
    }

    /// Runs the full pipeline against a validated configuration.
    ///
    /// Iteration counts of both stages are summed into the result. The
    /// result is marked successful when the winning schedule matches the
    /// configured worker set and period and scored above the fitness floor.
    #[tracing::instrument(level = "info", skip_all, fields(workers = config.workers().len(), days = config.period_days()))]
    pub fn optimize(&self, config: &OptimizationConfig) -> Result<OptimizationResult, ConfigError> {
        config.validate()?;

        let started = Instant::now();
        let model = RosterModel::new(config);
        let splitter = match config.seed() {
            Some(seed) => SeedSplitter::new(seed),
            None => SeedSplitter::from_entropy(),
        };

        tracing::info!(optimizer = self.genetic.name(), "starting exploration stage");
        let mut genetic_rng = splitter.stage(0);
        let genetic_outcome = self.genetic.run(&model, &mut genetic_rng);
        tracing::info!(
            iterations = genetic_outcome.iterations,
            fitness = %genetic_outcome.fitness,
            "exploration stage finished"
        );

        tracing::info!(optimizer = self.annealing.name(), "starting refinement stage");
        let mut annealing_rng = splitter.stage(1);
        let annealing_outcome = self
            .annealing
            .clone()
            .with_seed_schedule(genetic_outcome.best.clone())
            .run(&model, &mut annealing_rng);
        tracing::info!(
            iterations = annealing_outcome.iterations,
            fitness = %annealing_outcome.fitness,
            "refinement stage finished"
        );

        let iterations = genetic_outcome.iterations + annealing_outcome.iterations;
        let (best, fitness) = if annealing_outcome
            .fitness
            .better_than(&genetic_outcome.fitness)
        {
            (annealing_outcome.best, annealing_outcome.fitness)
        } else {
            (genetic_outcome.best, genetic_outcome.fitness)
        };

        let shape_ok = best.workers() == model.workers()
            && best.period_days() == model.period_days();
        let successful = shape_ok && fitness.total > 0.0;

        Ok(OptimizationResult::new(
            best,
            fitness,
            iterations,
            started.elapsed(),
            successful,
        ))
    }
}
