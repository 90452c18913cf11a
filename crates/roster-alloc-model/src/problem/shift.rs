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

use crate::common::ShiftIdentifier;
use serde::{Deserialize, Serialize};

/// Paid hours assumed for a shift built from a bare identifier.
pub const DEFAULT_SHIFT_HOURS: f64 = 8.0;

/// A shift type available on every day of the scheduling period.
///
/// `work_hours` is the paid duration of one occurrence of the shift and
/// feeds the cost sub-score of the fitness function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    id: ShiftIdentifier,
    work_hours: f64,
}

impl Shift {
    #[inline]
    pub fn new(id: ShiftIdentifier, work_hours: f64) -> Self {
        Self { id, work_hours }
    }

    /// Builds a shift with [`DEFAULT_SHIFT_HOURS`] paid hours.
    #[inline]
    pub fn from_id(id: ShiftIdentifier) -> Self {
        Self::new(id, DEFAULT_SHIFT_HOURS)
    }

    #[inline]
    pub fn id(&self) -> ShiftIdentifier {
        self.id
    }

    #[inline]
    pub fn work_hours(&self) -> f64 {
        self.work_hours
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}h)", self.id, self.work_hours)
    }
}
