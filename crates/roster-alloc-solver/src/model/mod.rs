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

use roster_alloc_model::prelude::{OptimizationConfig, Shift, ShiftIdentifier, WorkerIdentifier};

/// Sub-score weights normalized to sum to 1.
///
/// All-zero input weights stay all-zero; the evaluator then scores on the
/// penalty term alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWeights {
    pub fairness: f64,
    pub cost: f64,
    pub efficiency: f64,
    pub satisfaction: f64,
}

impl NormalizedWeights {
    fn from_config(config: &OptimizationConfig) -> Self {
        let sum = config.fairness_weight()
            + config.cost_weight()
            + config.efficiency_weight()
            + config.satisfaction_weight();
        if sum > 0.0 {
            Self {
                fairness: config.fairness_weight() / sum,
                cost: config.cost_weight() / sum,
                efficiency: config.efficiency_weight() / sum,
                satisfaction: config.satisfaction_weight() / sum,
            }
        } else {
            Self {
                fairness: 0.0,
                cost: 0.0,
                efficiency: 0.0,
                satisfaction: 0.0,
            }
        }
    }
}

/// Immutable, indexed view of a validated [`OptimizationConfig`].
///
/// Built once per `optimize` call and shared by reference between the
/// evaluator and both search engines. Holds no search state.
#[derive(Debug, Clone)]
pub struct RosterModel {
    workers: Vec<WorkerIdentifier>,
    shifts: Vec<Shift>,
    period_days: usize,
    max_consecutive_work_days: usize,
    min_rest_days: usize,
    min_daily_staff: usize,
    weights: NormalizedWeights,
    max_generations: u64,
    initial_temperature: f64,
    cooling_rate: f64,
    min_shift_hours: f64,
}

impl RosterModel {
    pub fn new(config: &OptimizationConfig) -> Self {
        let min_shift_hours = config
            .shifts()
            .iter()
            .map(Shift::work_hours)
            .fold(f64::INFINITY, f64::min);

        Self {
            workers: config.workers().to_vec(),
            shifts: config.shifts().to_vec(),
            period_days: config.period_days(),
            max_consecutive_work_days: config.max_consecutive_work_days() as usize,
            min_rest_days: config.min_rest_days() as usize,
            min_daily_staff: config.min_daily_staff() as usize,
            weights: NormalizedWeights::from_config(config),
            max_generations: u64::from(config.max_generations()),
            initial_temperature: config.initial_temperature(),
            cooling_rate: config.cooling_rate(),
            min_shift_hours: if min_shift_hours.is_finite() {
                min_shift_hours
            } else {
                0.0
            },
        }
    }

    #[inline]
    pub fn workers(&self) -> &[WorkerIdentifier] {
        &self.workers
    }

    #[inline]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    #[inline]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    #[inline]
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    /// Paid hours of a shift, 0.0 for an identifier outside the catalog.
    pub fn shift_hours(&self, id: ShiftIdentifier) -> f64 {
        self.shifts
            .iter()
            .find(|s| s.id() == id)
            .map(Shift::work_hours)
            .unwrap_or(0.0)
    }

    /// Paid hours of the cheapest shift in the catalog.
    #[inline]
    pub fn min_shift_hours(&self) -> f64 {
        self.min_shift_hours
    }

    #[inline]
    pub fn period_days(&self) -> usize {
        self.period_days
    }

    #[inline]
    pub fn max_consecutive_work_days(&self) -> usize {
        self.max_consecutive_work_days
    }

    #[inline]
    pub fn min_rest_days(&self) -> usize {
        self.min_rest_days
    }

    #[inline]
    pub fn min_daily_staff(&self) -> usize {
        self.min_daily_staff
    }

    #[inline]
    pub fn weights(&self) -> NormalizedWeights {
        self.weights
    }

    #[inline]
    pub fn max_generations(&self) -> u64 {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> OptimizationConfig {
        OptimizationConfig::builder()
            .with_workers((1..=3).map(WorkerIdentifier::new))
            .with_period(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            )
            .with_shifts([
                Shift::new(ShiftIdentifier::new(1), 8.0),
                Shift::new(ShiftIdentifier::new(2), 6.0),
            ])
            .with_weights(1.0, 1.0, 1.0, 1.0)
            .build()
    }

    #[test]
    fn test_weights_normalized_to_unit_sum() {
        let model = RosterModel::new(&config());
        let w = model.weights();
        let sum = w.fairness + w.cost + w.efficiency + w.satisfaction;
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((w.fairness - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_weights_stay_zero() {
        let cfg = OptimizationConfig::builder()
            .with_workers([WorkerIdentifier::new(1)])
            .with_period(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            )
            .with_shifts([Shift::from_id(ShiftIdentifier::new(1))])
            .with_weights(0.0, 0.0, 0.0, 0.0)
            .build();
        let w = RosterModel::new(&cfg).weights();
        assert_eq!(w.fairness + w.cost + w.efficiency + w.satisfaction, 0.0);
    }

    #[test]
    fn test_shift_hours_lookup() {
        let model = RosterModel::new(&config());
        assert_eq!(model.shift_hours(ShiftIdentifier::new(2)), 6.0);
        assert_eq!(model.shift_hours(ShiftIdentifier::new(99)), 0.0);
        assert_eq!(model.min_shift_hours(), 6.0);
    }

    #[test]
    fn test_dimensions_copied_from_config() {
        let model = RosterModel::new(&config());
        assert_eq!(model.worker_count(), 3);
        assert_eq!(model.shift_count(), 2);
        assert_eq!(model.period_days(), 7);
        assert_eq!(model.max_generations(), 200);
    }
}
