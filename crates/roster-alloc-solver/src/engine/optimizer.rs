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

/// Best chromosome a search stage produced, with its score and the number
/// of iterations the stage actually ran.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Schedule,
    pub fitness: FitnessBreakdown,
    pub iterations: u64,
}

/// A single search strategy over roster chromosomes.
///
/// Both the genetic and the annealing engine implement this; the hybrid
/// optimizer composes them by value. Implementations hold tuning knobs
/// only, never per-run state, so one instance may serve concurrent runs.
pub trait Optimizer {
    fn name(&self) -> &str;

    fn run<R: rand::Rng>(&self, model: &RosterModel, rng: &mut R) -> SearchOutcome;
}
