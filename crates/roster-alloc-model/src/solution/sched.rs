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

use crate::common::{ShiftIdentifier, WorkerIdentifier};
use serde::{Deserialize, Serialize};

/// One gene of a schedule: what a single worker does on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assignment {
    Rest,
    Work(ShiftIdentifier),
}

impl Assignment {
    #[inline]
    pub fn is_rest(self) -> bool {
        matches!(self, Assignment::Rest)
    }

    #[inline]
    pub fn is_work(self) -> bool {
        !self.is_rest()
    }

    #[inline]
    pub fn shift(self) -> Option<ShiftIdentifier> {
        match self {
            Assignment::Rest => None,
            Assignment::Work(id) => Some(id),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Assignment::Rest => write!(f, "-"),
            Assignment::Work(id) => write!(f, "{}", id),
        }
    }
}

/// A complete candidate schedule: the chromosome of the search.
///
/// Genes are stored worker-major in a flat board, one row of `period_days`
/// assignments per worker. Rows always stay full length; the shape invariant
/// (every configured worker present, every row `period_days` long) holds by
/// construction and is preserved by every mutating operation.
///
/// Cloning is deep: genetic operators may freely clone a parent and rewrite
/// the child without aliasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    workers: Vec<WorkerIdentifier>,
    period_days: usize,
    genes: Vec<Assignment>,
}

impl Schedule {
    /// A schedule with every worker resting on every day.
    pub fn empty(workers: Vec<WorkerIdentifier>, period_days: usize) -> Self {
        let genes = vec![Assignment::Rest; workers.len() * period_days];
        Self {
            workers,
            period_days,
            genes,
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
    pub fn period_days(&self) -> usize {
        self.period_days
    }

    #[inline]
    fn row_start(&self, worker: usize) -> usize {
        worker * self.period_days
    }

    /// Gene at `(worker index, day index)`.
    #[inline]
    pub fn gene(&self, worker: usize, day: usize) -> Assignment {
        debug_assert!(worker < self.workers.len() && day < self.period_days);
        self.genes[self.row_start(worker) + day]
    }

    #[inline]
    pub fn set_gene(&mut self, worker: usize, day: usize, assignment: Assignment) {
        debug_assert!(worker < self.workers.len() && day < self.period_days);
        let start = self.row_start(worker);
        self.genes[start + day] = assignment;
    }

    /// Full per-day sequence of one worker.
    #[inline]
    pub fn worker_row(&self, worker: usize) -> &[Assignment] {
        let start = self.row_start(worker);
        &self.genes[start..start + self.period_days]
    }

    /// Replaces a worker's full per-day sequence.
    ///
    /// The row length must match the period; partially written rows would
    /// break the shape invariant.
    pub fn set_worker_row(&mut self, worker: usize, row: &[Assignment]) {
        assert_eq!(
            row.len(),
            self.period_days,
            "worker row length must equal the period length"
        );
        let start = self.row_start(worker);
        self.genes[start..start + self.period_days].copy_from_slice(row);
    }

    /// Assignment of a worker (by identifier) on a day, or `None` for an
    /// unknown worker.
    pub fn assignment_for(&self, worker: WorkerIdentifier, day: usize) -> Option<Assignment> {
        if day >= self.period_days {
            return None;
        }
        let idx = self.workers.iter().position(|&w| w == worker)?;
        Some(self.gene(idx, day))
    }

    /// Workers assigned to the given shift on the given day.
    pub fn workers_on(
        &self,
        day: usize,
        shift: ShiftIdentifier,
    ) -> impl Iterator<Item = WorkerIdentifier> + '_ {
        self.workers
            .iter()
            .enumerate()
            .filter(move |&(w, _)| self.gene(w, day).shift() == Some(shift))
            .map(|(_, &id)| id)
    }

    /// Number of workers assigned to any shift on the given day.
    pub fn staffed_on(&self, day: usize) -> usize {
        (0..self.workers.len())
            .filter(|&w| self.gene(w, day).is_work())
            .count()
    }

    /// Workdays of one worker over the whole period.
    pub fn workday_count(&self, worker: usize) -> usize {
        self.worker_row(worker).iter().filter(|a| a.is_work()).count()
    }

    /// Workday counts for all workers, in worker order.
    pub fn workday_counts(&self) -> Vec<usize> {
        (0..self.workers.len())
            .map(|w| self.workday_count(w))
            .collect()
    }

    /// Length of the longest consecutive run of workdays for one worker.
    pub fn longest_work_run(&self, worker: usize) -> usize {
        let mut longest = 0usize;
        let mut run = 0usize;
        for a in self.worker_row(worker) {
            if a.is_work() {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        longest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn wid(n: u64) -> WorkerIdentifier {
        WorkerIdentifier::new(n)
    }

    #[inline]
    fn work(n: u64) -> Assignment {
        Assignment::Work(ShiftIdentifier::new(n))
    }

    fn three_by_four() -> Schedule {
        Schedule::empty(vec![wid(1), wid(2), wid(3)], 4)
    }

    #[test]
    fn test_empty_schedule_is_all_rest() {
        let s = three_by_four();
        assert_eq!(s.worker_count(), 3);
        assert_eq!(s.period_days(), 4);
        for w in 0..3 {
            assert_eq!(s.workday_count(w), 0);
            assert!(s.worker_row(w).iter().all(|a| a.is_rest()));
        }
    }

    #[test]
    fn test_set_and_get_gene() {
        let mut s = three_by_four();
        s.set_gene(1, 2, work(7));
        assert_eq!(s.gene(1, 2), work(7));
        assert_eq!(s.gene(1, 1), Assignment::Rest);
        assert_eq!(s.assignment_for(wid(2), 2), Some(work(7)));
        assert_eq!(s.assignment_for(wid(9), 0), None);
        assert_eq!(s.assignment_for(wid(2), 99), None);
    }

    #[test]
    fn test_set_worker_row_replaces_whole_sequence() {
        let mut s = three_by_four();
        let row = [work(1), Assignment::Rest, work(2), work(1)];
        s.set_worker_row(0, &row);
        assert_eq!(s.worker_row(0), &row);
        assert_eq!(s.workday_count(0), 3);
    }

    #[test]
    #[should_panic(expected = "worker row length")]
    fn test_short_row_is_rejected() {
        let mut s = three_by_four();
        s.set_worker_row(0, &[work(1)]);
    }

    #[test]
    fn test_workers_on_and_staffed_on() {
        let mut s = three_by_four();
        s.set_gene(0, 1, work(5));
        s.set_gene(2, 1, work(5));
        s.set_gene(1, 1, work(6));

        let on_five: Vec<_> = s.workers_on(1, ShiftIdentifier::new(5)).collect();
        assert_eq!(on_five, vec![wid(1), wid(3)]);
        assert_eq!(s.staffed_on(1), 3);
        assert_eq!(s.staffed_on(0), 0);
    }

    #[test]
    fn test_longest_work_run() {
        let mut s = Schedule::empty(vec![wid(1)], 6);
        for day in [0, 1, 3, 4, 5] {
            s.set_gene(0, day, work(1));
        }
        assert_eq!(s.longest_work_run(0), 3);
        assert_eq!(s.workday_count(0), 5);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut parent = three_by_four();
        parent.set_gene(0, 0, work(1));
        let mut child = parent.clone();
        child.set_gene(0, 0, Assignment::Rest);

        assert_eq!(parent.gene(0, 0), work(1));
        assert_eq!(child.gene(0, 0), Assignment::Rest);
        assert_ne!(parent, child);
    }
}
