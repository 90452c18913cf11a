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

pub mod annealing;
pub mod genetic;
pub mod hybrid;
pub mod optimizer;

use crate::model::RosterModel;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use roster_alloc_model::prelude::{Assignment, Schedule};

/// Draws a random gene: rest, or one of the model's shifts, uniformly.
pub(crate) fn random_gene<R: Rng>(model: &RosterModel, rng: &mut R) -> Assignment {
    let options = model.shift_count() + 1;
    let pick = rng.random_range(0..options);
    if pick == 0 {
        Assignment::Rest
    } else {
        Assignment::Work(model.shifts()[pick - 1].id())
    }
}

/// Draws a random gene different from `current`.
///
/// With a single shift in the catalog the only alternative flips between
/// rest and that shift, which keeps the neighborhood non-empty even for
/// degenerate configs.
pub(crate) fn resample_gene<R: Rng>(
    model: &RosterModel,
    current: Assignment,
    rng: &mut R,
) -> Assignment {
    let mut options: Vec<Assignment> = Vec::with_capacity(model.shift_count() + 1);
    if !current.is_rest() {
        options.push(Assignment::Rest);
    }
    for shift in model.shifts() {
        if current.shift() != Some(shift.id()) {
            options.push(Assignment::Work(shift.id()));
        }
    }
    options.choose(rng).copied().unwrap_or(Assignment::Rest)
}

/// Builds a random seed schedule that meets each day's staffing quota
/// where the worker pool allows it; the remainder is randomized.
pub(crate) fn seed_schedule<R: Rng>(model: &RosterModel, rng: &mut R) -> Schedule {
    let workers = model.worker_count();
    let mut schedule = Schedule::empty(model.workers().to_vec(), model.period_days());
    let mut order: Vec<usize> = (0..workers).collect();

    for day in 0..model.period_days() {
        order.shuffle(rng);
        let staffed = model.min_daily_staff().min(workers);
        for (slot, &w) in order.iter().enumerate() {
            let assignment = if slot < staffed {
                // quota slot: always a working shift
                let shift = model.shifts()[rng.random_range(0..model.shift_count())];
                Assignment::Work(shift.id())
            } else {
                random_gene(model, rng)
            };
            schedule.set_gene(w, day, assignment);
        }
    }
    schedule
}
