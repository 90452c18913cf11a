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

use crate::model::RosterModel;
use roster_alloc_model::prelude::{FitnessBreakdown, Schedule};

/// Fitness lost per violated hard constraint.
///
/// Large enough that a violation is never free, small enough that the
/// search can still climb out of infeasible regions.
pub const PENALTY_STEP: f64 = 0.05;

/// Multi-objective fitness function over candidate schedules.
///
/// Produces a [`FitnessBreakdown`] whose `total` combines the four weighted
/// sub-scores minus the constraint penalty; higher is better and the result
/// is always finite and strictly positive, including for schedules that
/// violate hard constraints.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'m> {
    model: &'m RosterModel,
}

impl<'m> FitnessEvaluator<'m> {
    #[inline]
    pub fn new(model: &'m RosterModel) -> Self {
        Self { model }
    }

    pub fn evaluate(&self, schedule: &Schedule) -> FitnessBreakdown {
        let fairness = self.fairness_score(schedule);
        let cost = self.cost_score(schedule);
        let efficiency = self.efficiency_score(schedule);
        let satisfaction = self.satisfaction_score(schedule);
        let penalty = PENALTY_STEP * self.violation_count(schedule) as f64;

        let w = self.model.weights();
        let weighted = w.fairness * fairness
            + w.cost * cost
            + w.efficiency * efficiency
            + w.satisfaction * satisfaction;

        FitnessBreakdown::combine(fairness, cost, efficiency, satisfaction, penalty, weighted)
    }

    /// Uniformity of workdays across workers: 1 − spread / period length.
    fn fairness_score(&self, schedule: &Schedule) -> f64 {
        let counts = schedule.workday_counts();
        let max = counts.iter().copied().max().unwrap_or(0);
        let min = counts.iter().copied().min().unwrap_or(0);
        let spread = (max - min) as f64;
        1.0 - spread / self.model.period_days().max(1) as f64
    }

    /// Monotonically decreasing in total paid hours.
    ///
    /// Full marks up to the minimal-coverage baseline, then the baseline
    /// fraction of the actual spend. A zero baseline (no staffing quota)
    /// falls back to discounting by mean daily hours per worker.
    fn cost_score(&self, schedule: &Schedule) -> f64 {
        let total_hours = self.total_work_hours(schedule);
        let baseline = self.model.min_daily_staff() as f64
            * self.model.period_days() as f64
            * self.model.min_shift_hours();

        if total_hours <= baseline {
            return 1.0;
        }
        if baseline > 0.0 {
            return baseline / total_hours;
        }
        let cells = (self.model.worker_count() * self.model.period_days()).max(1);
        1.0 / (1.0 + total_hours / cells as f64)
    }

    /// Per-day blend of quota attainment with minimal surplus and
    /// shift-type coverage.
    fn efficiency_score(&self, schedule: &Schedule) -> f64 {
        let days = self.model.period_days();
        if days == 0 {
            return 0.0;
        }
        let quota = self.model.min_daily_staff();
        let shift_count = self.model.shift_count().max(1);

        let mut sum = 0.0;
        for day in 0..days {
            let staffed = schedule.staffed_on(day);
            let surplus_term = if quota == 0 {
                1.0 / (1.0 + staffed as f64)
            } else if staffed >= quota {
                1.0 / (1.0 + (staffed - quota) as f64)
            } else {
                staffed as f64 / quota as f64
            };

            let covered = self
                .model
                .shifts()
                .iter()
                .filter(|s| schedule.workers_on(day, s.id()).next().is_some())
                .count();
            let coverage_term = covered as f64 / shift_count as f64;

            sum += 0.5 * surplus_term + 0.5 * coverage_term;
        }
        sum / days as f64
    }

    /// Rest-quota attainment blended with consecutive-run attainment,
    /// averaged over workers.
    fn satisfaction_score(&self, schedule: &Schedule) -> f64 {
        let workers = self.model.worker_count();
        if workers == 0 {
            return 0.0;
        }
        let days = self.model.period_days();
        let min_rest = self.model.min_rest_days();
        let max_run = self.model.max_consecutive_work_days();

        let mut sum = 0.0;
        for w in 0..workers {
            let rest = days - schedule.workday_count(w);
            let rest_term = if min_rest == 0 {
                1.0
            } else {
                (rest as f64 / min_rest as f64).min(1.0)
            };

            let run = schedule.longest_work_run(w);
            let run_term = if run <= max_run {
                1.0
            } else {
                max_run as f64 / run as f64
            };

            sum += 0.5 * rest_term + 0.5 * run_term;
        }
        sum / workers as f64
    }

    /// One count per violated hard constraint: a consecutive-run overrun or
    /// rest shortfall per worker, a staffing shortfall per day.
    pub fn violation_count(&self, schedule: &Schedule) -> usize {
        let days = self.model.period_days();
        let mut violations = 0usize;

        for w in 0..self.model.worker_count() {
            if schedule.longest_work_run(w) > self.model.max_consecutive_work_days() {
                violations += 1;
            }
            let rest = days - schedule.workday_count(w);
            if rest < self.model.min_rest_days() {
                violations += 1;
            }
        }

        for day in 0..days {
            if schedule.staffed_on(day) < self.model.min_daily_staff() {
                violations += 1;
            }
        }

        violations
    }

    fn total_work_hours(&self, schedule: &Schedule) -> f64 {
        let mut hours = 0.0;
        for w in 0..schedule.worker_count() {
            for a in schedule.worker_row(w) {
                if let Some(id) = a.shift() {
                    hours += self.model.shift_hours(id);
                }
            }
        }
        hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_alloc_model::prelude::*;

    fn config(workers: u64, days: u32, min_staff: u32) -> OptimizationConfig {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = start + chrono::Duration::days(i64::from(days) - 1);
        OptimizationConfig::builder()
            .with_workers((1..=workers).map(WorkerIdentifier::new))
            .with_period(start, end)
            .with_shifts([Shift::new(ShiftIdentifier::new(1), 8.0)])
            .with_min_daily_staff(min_staff)
            .with_max_consecutive_work_days(3)
            .with_min_rest_days(1)
            .build()
    }

    #[inline]
    fn work() -> Assignment {
        Assignment::Work(ShiftIdentifier::new(1))
    }

    #[test]
    fn test_fairness_prefers_balanced_workloads() {
        let cfg = config(2, 4, 0);
        let model = RosterModel::new(&cfg);
        let eval = FitnessEvaluator::new(&model);

        let mut balanced = Schedule::empty(model.workers().to_vec(), 4);
        balanced.set_gene(0, 0, work());
        balanced.set_gene(0, 1, work());
        balanced.set_gene(1, 2, work());
        balanced.set_gene(1, 3, work());

        let mut skewed = Schedule::empty(model.workers().to_vec(), 4);
        for day in 0..4 {
            skewed.set_gene(0, day, work());
        }

        let fair_balanced = eval.evaluate(&balanced).fairness;
        let fair_skewed = eval.evaluate(&skewed).fairness;
        assert_eq!(fair_balanced, 1.0);
        assert_eq!(fair_skewed, 0.0);
    }

    #[test]
    fn test_cost_decreases_with_extra_hours() {
        let cfg = config(3, 2, 1);
        let model = RosterModel::new(&cfg);
        let eval = FitnessEvaluator::new(&model);

        // exactly the quota: one worker per day, 16h total vs 16h baseline
        let mut lean = Schedule::empty(model.workers().to_vec(), 2);
        lean.set_gene(0, 0, work());
        lean.set_gene(1, 1, work());

        // everyone works every day
        let mut heavy = Schedule::empty(model.workers().to_vec(), 2);
        for w in 0..3 {
            for day in 0..2 {
                heavy.set_gene(w, day, work());
            }
        }

        let lean_cost = eval.evaluate(&lean).cost;
        let heavy_cost = eval.evaluate(&heavy).cost;
        assert_eq!(lean_cost, 1.0);
        assert!(heavy_cost < lean_cost);
        assert!((heavy_cost - 16.0 / 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_violations_are_penalized_but_finite() {
        let cfg = config(2, 5, 2);
        let model = RosterModel::new(&cfg);
        let eval = FitnessEvaluator::new(&model);

        // all rest: staffing shortfall on every one of the 5 days
        let idle = Schedule::empty(model.workers().to_vec(), 5);
        assert_eq!(eval.violation_count(&idle), 5);

        let breakdown = eval.evaluate(&idle);
        assert!((breakdown.penalty - 5.0 * PENALTY_STEP).abs() < 1e-12);
        assert!(breakdown.total > 0.0);
        assert!(breakdown.total.is_finite());
    }

    #[test]
    fn test_consecutive_run_and_rest_violations_counted() {
        let cfg = config(1, 5, 0);
        let model = RosterModel::new(&cfg);
        let eval = FitnessEvaluator::new(&model);

        // 5 straight workdays: run 5 > 3 and rest 0 < 1
        let mut grind = Schedule::empty(model.workers().to_vec(), 5);
        for day in 0..5 {
            grind.set_gene(0, day, work());
        }
        assert_eq!(eval.violation_count(&grind), 2);
    }

    #[test]
    fn test_all_zero_weights_score_on_penalty_alone() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let cfg = OptimizationConfig::builder()
            .with_workers([WorkerIdentifier::new(1)])
            .with_period(start, start)
            .with_shifts([Shift::from_id(ShiftIdentifier::new(1))])
            .with_weights(0.0, 0.0, 0.0, 0.0)
            .with_min_daily_staff(1)
            .build();
        let model = RosterModel::new(&cfg);
        let eval = FitnessEvaluator::new(&model);

        let idle = Schedule::empty(model.workers().to_vec(), 1);
        let breakdown = eval.evaluate(&idle);
        // weighted sum is zero, one staffing violation remains
        assert!((breakdown.penalty - PENALTY_STEP).abs() < 1e-12);
        assert_eq!(breakdown.total, MIN_FITNESS);
    }

    #[test]
    fn test_efficiency_rewards_exact_quota() {
        let cfg = config(3, 1, 1);
        let model = RosterModel::new(&cfg);
        let eval = FitnessEvaluator::new(&model);

        let mut exact = Schedule::empty(model.workers().to_vec(), 1);
        exact.set_gene(0, 0, work());

        let mut overstaffed = Schedule::empty(model.workers().to_vec(), 1);
        for w in 0..3 {
            overstaffed.set_gene(w, 0, work());
        }

        let exact_eff = eval.evaluate(&exact).efficiency;
        let over_eff = eval.evaluate(&overstaffed).efficiency;
        assert!(exact_eff > over_eff);
        assert_eq!(exact_eff, 1.0);
    }

    #[test]
    fn test_satisfaction_degrades_with_long_runs() {
        let cfg = config(1, 6, 0);
        let model = RosterModel::new(&cfg);
        let eval = FitnessEvaluator::new(&model);

        // 3-day run, 3 rest days: within every bound
        let mut easy = Schedule::empty(model.workers().to_vec(), 6);
        for day in 0..3 {
            easy.set_gene(0, day, work());
        }

        // 6-day run, no rest
        let mut brutal = Schedule::empty(model.workers().to_vec(), 6);
        for day in 0..6 {
            brutal.set_gene(0, day, work());
        }

        let easy_sat = eval.evaluate(&easy).satisfaction;
        let brutal_sat = eval.evaluate(&brutal).satisfaction;
        assert_eq!(easy_sat, 1.0);
        assert!(brutal_sat < easy_sat);
    }
}
