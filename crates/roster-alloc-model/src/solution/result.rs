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

use crate::solution::fitness::FitnessBreakdown;
use crate::solution::sched::Schedule;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Frozen outcome of one `optimize` call.
///
/// `iterations` is the sum of the genetic generations and the annealing
/// iterations of the hybrid run and is always at least 1 for a config that
/// passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    best_schedule: Schedule,
    best_fitness: FitnessBreakdown,
    iterations: u64,
    execution: Duration,
    successful: bool,
}

impl OptimizationResult {
    pub fn new(
        best_schedule: Schedule,
        best_fitness: FitnessBreakdown,
        iterations: u64,
        execution: Duration,
        successful: bool,
    ) -> Self {
        Self {
            best_schedule,
            best_fitness,
            iterations,
            execution,
            successful,
        }
    }

    #[inline]
    pub fn best_schedule(&self) -> &Schedule {
        &self.best_schedule
    }

    #[inline]
    pub fn best_fitness(&self) -> &FitnessBreakdown {
        &self.best_fitness
    }

    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[inline]
    pub fn execution(&self) -> Duration {
        self.execution
    }

    #[inline]
    pub fn execution_millis(&self) -> u128 {
        self.execution.as_millis()
    }

    #[inline]
    pub fn is_successful(&self) -> bool {
        self.successful
    }

    /// Consumes the result, handing out the frozen schedule.
    #[inline]
    pub fn into_schedule(self) -> Schedule {
        self.best_schedule
    }
}

impl std::fmt::Display for OptimizationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} after {} iterations in {}ms: {}",
            if self.successful { "ok" } else { "failed" },
            self.iterations,
            self.execution_millis(),
            self.best_fitness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::WorkerIdentifier;

    fn result() -> OptimizationResult {
        let schedule = Schedule::empty(vec![WorkerIdentifier::new(1)], 3);
        let fitness = FitnessBreakdown::combine(0.5, 0.5, 0.5, 0.5, 0.0, 0.5);
        OptimizationResult::new(schedule, fitness, 42, Duration::from_millis(7), true)
    }

    #[test]
    fn test_accessors() {
        let r = result();
        assert!(r.is_successful());
        assert_eq!(r.iterations(), 42);
        assert_eq!(r.execution_millis(), 7);
        assert_eq!(r.best_schedule().worker_count(), 1);
    }

    #[test]
    fn test_into_schedule_keeps_shape() {
        let s = result().into_schedule();
        assert_eq!(s.worker_count(), 1);
        assert_eq!(s.period_days(), 3);
    }
}
