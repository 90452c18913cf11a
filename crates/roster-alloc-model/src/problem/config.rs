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

use crate::common::WorkerIdentifier;
use crate::problem::err::ConfigError;
use crate::problem::shift::Shift;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable description of one optimization run.
///
/// Built through [`OptimizationConfigBuilder`]; [`OptimizationConfig::validate`]
/// is the gate the hybrid optimizer runs before touching any search state.
/// Workers are kept sorted and deduplicated so that identical inputs always
/// produce the same internal indexing, regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConfig {
    workers: Vec<WorkerIdentifier>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    shifts: Vec<Shift>,
    max_consecutive_work_days: u32,
    min_rest_days: u32,
    min_daily_staff: u32,
    fairness_weight: f64,
    cost_weight: f64,
    efficiency_weight: f64,
    satisfaction_weight: f64,
    max_generations: u32,
    initial_temperature: f64,
    cooling_rate: f64,
    seed: Option<u64>,
}

impl OptimizationConfig {
    #[inline]
    pub fn builder() -> OptimizationConfigBuilder {
        OptimizationConfigBuilder::new()
    }

    #[inline]
    pub fn workers(&self) -> &[WorkerIdentifier] {
        &self.workers
    }

    #[inline]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[inline]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Length of the inclusive period in days; zero when `end < start`.
    #[inline]
    pub fn period_days(&self) -> usize {
        let span = (self.end_date - self.start_date).num_days() + 1;
        span.max(0) as usize
    }

    #[inline]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    #[inline]
    pub fn max_consecutive_work_days(&self) -> u32 {
        self.max_consecutive_work_days
    }

    #[inline]
    pub fn min_rest_days(&self) -> u32 {
        self.min_rest_days
    }

    #[inline]
    pub fn min_daily_staff(&self) -> u32 {
        self.min_daily_staff
    }

    #[inline]
    pub fn fairness_weight(&self) -> f64 {
        self.fairness_weight
    }

    #[inline]
    pub fn cost_weight(&self) -> f64 {
        self.cost_weight
    }

    #[inline]
    pub fn efficiency_weight(&self) -> f64 {
        self.efficiency_weight
    }

    #[inline]
    pub fn satisfaction_weight(&self) -> f64 {
        self.satisfaction_weight
    }

    #[inline]
    pub fn max_generations(&self) -> u32 {
        self.max_generations
    }

    #[inline]
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    #[inline]
    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// Optional reproducibility seed. `None` means entropy seeding per run.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks every precondition the engine relies on.
    ///
    /// Degenerate-but-valid shapes (one worker, one day, one shift) pass;
    /// only genuinely unrunnable configurations are refused.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers.is_empty() {
            return Err(ConfigError::NoWorkers);
        }
        if self.shifts.is_empty() {
            return Err(ConfigError::NoShifts);
        }
        if self.end_date < self.start_date {
            return Err(ConfigError::EmptyPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(self.initial_temperature > 0.0) {
            return Err(ConfigError::NonPositiveTemperature(self.initial_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRateOutOfRange(self.cooling_rate));
        }
        for (name, value) in [
            ("fairness", self.fairness_weight),
            ("cost", self.cost_weight),
            ("efficiency", self.efficiency_weight),
            ("satisfaction", self.satisfaction_weight),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Builder for [`OptimizationConfig`].
///
/// Defaults mirror the production tuning: equal sub-score weights, a
/// six-day consecutive-work cap, one rest day, one worker per day minimum,
/// 200 generations and a 1000.0 / 0.95 annealing schedule.
#[derive(Debug, Clone)]
pub struct OptimizationConfigBuilder {
    workers: Vec<WorkerIdentifier>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    shifts: Vec<Shift>,
    max_consecutive_work_days: u32,
    min_rest_days: u32,
    min_daily_staff: u32,
    fairness_weight: f64,
    cost_weight: f64,
    efficiency_weight: f64,
    satisfaction_weight: f64,
    max_generations: u32,
    initial_temperature: f64,
    cooling_rate: f64,
    seed: Option<u64>,
}

impl Default for OptimizationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizationConfigBuilder {
    pub fn new() -> Self {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        Self {
            workers: Vec::new(),
            start_date: today,
            end_date: today,
            shifts: Vec::new(),
            max_consecutive_work_days: 6,
            min_rest_days: 1,
            min_daily_staff: 1,
            fairness_weight: 0.25,
            cost_weight: 0.25,
            efficiency_weight: 0.25,
            satisfaction_weight: 0.25,
            max_generations: 200,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            seed: None,
        }
    }

    pub fn with_workers<I>(mut self, workers: I) -> Self
    where
        I: IntoIterator<Item = WorkerIdentifier>,
    {
        self.workers = workers.into_iter().collect();
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_shifts<I>(mut self, shifts: I) -> Self
    where
        I: IntoIterator<Item = Shift>,
    {
        self.shifts = shifts.into_iter().collect();
        self
    }

    pub fn with_max_consecutive_work_days(mut self, days: u32) -> Self {
        self.max_consecutive_work_days = days;
        self
    }

    pub fn with_min_rest_days(mut self, days: u32) -> Self {
        self.min_rest_days = days;
        self
    }

    pub fn with_min_daily_staff(mut self, staff: u32) -> Self {
        self.min_daily_staff = staff;
        self
    }

    pub fn with_weights(
        mut self,
        fairness: f64,
        cost: f64,
        efficiency: f64,
        satisfaction: f64,
    ) -> Self {
        self.fairness_weight = fairness;
        self.cost_weight = cost;
        self.efficiency_weight = efficiency;
        self.satisfaction_weight = satisfaction;
        self
    }

    pub fn with_max_generations(mut self, generations: u32) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Freezes the builder into a config value.
    ///
    /// Workers are deduplicated and sorted here; validation itself is
    /// deferred to [`OptimizationConfig::validate`] so the refusal happens
    /// at the `optimize` boundary.
    pub fn build(self) -> OptimizationConfig {
        let mut workers = self.workers;
        workers.sort();
        workers.dedup();

        OptimizationConfig {
            workers,
            start_date: self.start_date,
            end_date: self.end_date,
            shifts: self.shifts,
            max_consecutive_work_days: self.max_consecutive_work_days,
            min_rest_days: self.min_rest_days,
            min_daily_staff: self.min_daily_staff,
            fairness_weight: self.fairness_weight,
            cost_weight: self.cost_weight,
            efficiency_weight: self.efficiency_weight,
            satisfaction_weight: self.satisfaction_weight,
            max_generations: self.max_generations,
            initial_temperature: self.initial_temperature,
            cooling_rate: self.cooling_rate,
            seed: self.seed,
        }
    }
}
