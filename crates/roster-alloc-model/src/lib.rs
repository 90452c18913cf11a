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

//! Problem and solution model for the shift-roster optimization engine.
//!
//! The [`problem`] module holds the immutable inputs of a run: typed
//! identifiers, shift definitions and the validated
//! [`problem::OptimizationConfig`]. The [`solution`] module holds the
//! candidate-schedule representation ([`solution::Schedule`]), its fitness
//! breakdown and the frozen [`solution::OptimizationResult`].

pub mod common;
pub mod problem;
pub mod solution;

pub mod prelude {
    pub use crate::common::{Identifier, ShiftIdentifier, WorkerIdentifier};
    pub use crate::problem::{
        ConfigError, OptimizationConfig, OptimizationConfigBuilder, Shift,
    };
    pub use crate::solution::{
        Assignment, FitnessBreakdown, OptimizationResult, Schedule, MIN_FITNESS,
    };
}
