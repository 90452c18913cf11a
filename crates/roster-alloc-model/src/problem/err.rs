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

/// A configuration defect detected before any search starts.
///
/// Every variant is a hard refusal to run; none of these conditions is ever
/// coerced into a degenerate search.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The worker set is empty.
    NoWorkers,
    /// The shift set is empty.
    NoShifts,
    /// The inclusive period `start..=end` contains no days.
    EmptyPeriod { start: NaiveDate, end: NaiveDate },
    /// The generation budget is zero.
    ZeroGenerations,
    /// The annealing start temperature is not strictly positive.
    NonPositiveTemperature(f64),
    /// The cooling rate lies outside the open interval (0, 1).
    CoolingRateOutOfRange(f64),
    /// A sub-score weight is negative.
    NegativeWeight { name: &'static str, value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoWorkers => write!(f, "The worker set is empty."),
            ConfigError::NoShifts => write!(f, "The shift set is empty."),
            ConfigError::EmptyPeriod { start, end } => {
                write!(f, "The period {} ..= {} contains no days.", start, end)
            }
            ConfigError::ZeroGenerations => {
                write!(f, "The generation budget must be at least 1.")
            }
            ConfigError::NonPositiveTemperature(t) => {
                write!(f, "The initial temperature {} is not strictly positive.", t)
            }
            ConfigError::CoolingRateOutOfRange(r) => {
                write!(f, "The cooling rate {} lies outside (0, 1).", r)
            }
            ConfigError::NegativeWeight { name, value } => {
                write!(f, "The {} weight {} is negative.", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ConfigError::NoWorkers.to_string(), "The worker set is empty.");
        assert_eq!(
            ConfigError::CoolingRateOutOfRange(1.5).to_string(),
            "The cooling rate 1.5 lies outside (0, 1)."
        );
        assert_eq!(
            ConfigError::NegativeWeight {
                name: "fairness",
                value: -0.5
            }
            .to_string(),
            "The fairness weight -0.5 is negative."
        );
    }
}
