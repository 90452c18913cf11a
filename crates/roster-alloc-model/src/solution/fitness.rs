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

use serde::{Deserialize, Serialize};

/// Positive floor applied to the combined score.
///
/// Keeps every chromosome strictly ordered above zero so comparisons stay
/// well defined even when penalties swamp the weighted sub-scores (or all
/// weights are zero).
pub const MIN_FITNESS: f64 = 1e-6;

/// Scalar quality of a schedule plus the four weighted sub-scores and the
/// constraint-violation penalty that produced it.
///
/// `total` is the already-clamped combined score; `higher is better`
/// throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    pub fairness: f64,
    pub cost: f64,
    pub efficiency: f64,
    pub satisfaction: f64,
    pub penalty: f64,
    pub total: f64,
}

impl FitnessBreakdown {
    /// Combines weighted sub-scores and penalty, clamping to [`MIN_FITNESS`].
    pub fn combine(
        fairness: f64,
        cost: f64,
        efficiency: f64,
        satisfaction: f64,
        penalty: f64,
        weighted_sum: f64,
    ) -> Self {
        Self {
            fairness,
            cost,
            efficiency,
            satisfaction,
            penalty,
            total: (weighted_sum - penalty).max(MIN_FITNESS),
        }
    }

    /// Strict "better than" with the fairness tie-break.
    ///
    /// Equal totals fall back to the fairness sub-score; a full tie keeps
    /// the incumbent, which makes selection stable for reproducible runs.
    #[inline]
    pub fn better_than(&self, other: &FitnessBreakdown) -> bool {
        if self.total != other.total {
            return self.total > other.total;
        }
        self.fairness > other.fairness
    }
}

impl std::fmt::Display for FitnessBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total {:.4} (fair {:.3}, cost {:.3}, eff {:.3}, sat {:.3}, pen {:.3})",
            self.total, self.fairness, self.cost, self.efficiency, self.satisfaction, self.penalty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_subtracts_penalty() {
        let f = FitnessBreakdown::combine(0.5, 0.5, 0.5, 0.5, 0.1, 0.5);
        assert!((f.total - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_combine_clamps_to_floor() {
        let f = FitnessBreakdown::combine(0.0, 0.0, 0.0, 0.0, 0.3, 0.0);
        assert_eq!(f.total, MIN_FITNESS);
        assert!(f.total > 0.0);
    }

    #[test]
    fn test_better_than_uses_total_then_fairness() {
        let low = FitnessBreakdown::combine(0.9, 0.0, 0.0, 0.0, 0.0, 0.4);
        let high = FitnessBreakdown::combine(0.1, 0.0, 0.0, 0.0, 0.0, 0.6);
        assert!(high.better_than(&low));
        assert!(!low.better_than(&high));

        let tied_fair = FitnessBreakdown::combine(0.8, 0.0, 0.0, 0.0, 0.0, 0.6);
        assert!(tied_fair.better_than(&high));

        // full tie keeps the incumbent
        assert!(!high.better_than(&high.clone()));
    }
}
