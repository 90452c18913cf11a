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
use roster_alloc_model::prelude::*;
use roster_alloc_solver::prelude::*;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn demo_config() -> OptimizationConfig {
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2025, 9, 14).expect("valid date");
    OptimizationConfig::builder()
        .with_workers((1..=8).map(WorkerIdentifier::new))
        .with_period(start, end)
        .with_shifts([
            Shift::new(ShiftIdentifier::new(1), 8.0),
            Shift::new(ShiftIdentifier::new(2), 8.0),
            Shift::new(ShiftIdentifier::new(3), 10.0),
        ])
        .with_min_daily_staff(3)
        .with_max_consecutive_work_days(5)
        .with_min_rest_days(1)
        .with_max_generations(300)
        .with_seed(2025)
        .build()
}

/// One row per worker, one column per day: `.` for rest, the shift id
/// digit for a working day.
fn print_roster(schedule: &Schedule) {
    print!("{:>12} ", "");
    for day in 0..schedule.period_days() {
        print!("{:>2}", day + 1);
    }
    println!();

    for (w, worker) in schedule.workers().iter().enumerate() {
        print!("{:>12} ", worker.to_string());
        for day in 0..schedule.period_days() {
            match schedule.gene(w, day) {
                Assignment::Rest => print!(" ."),
                Assignment::Work(shift) => print!("{:>2}", shift.value()),
            }
        }
        println!(" ({} workdays)", schedule.workday_count(w));
    }
}

fn main() {
    enable_tracing();

    let config = demo_config();
    let result = HybridOptimizer::new()
        .optimize(&config)
        .expect("demo config is valid");

    println!(
        "Optimized {} workers over {} days in {} ms ({} iterations, {})",
        config.workers().len(),
        config.period_days(),
        result.execution_millis(),
        result.iterations(),
        if result.is_successful() {
            "successful"
        } else {
            "not successful"
        }
    );
    println!("{}", result.best_fitness());
    println!();
    print_roster(result.best_schedule());
}
