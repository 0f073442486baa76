// Selection sort: scan for the minimum, swap it into place

use super::SortValue;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Scan,
    NewMin,
    Swap,
    Finish,
    Done,
}

/// Step iterator for selection sort. The sorted set grows as the prefix
/// `[0, i)` and jumps to `[0, i + 1)` on the swap frame.
#[derive(Debug)]
pub struct SelectionSteps<T> {
    a: Vec<T>,
    i: usize,
    j: usize,
    min_idx: usize,
    phase: Phase,
}

pub fn sort<T: SortValue>(input: &[T]) -> SelectionSteps<T> {
    SelectionSteps {
        a: input.to_vec(),
        i: 0,
        j: 0,
        min_idx: 0,
        phase: Phase::Start,
    }
}

impl<T: SortValue> SelectionSteps<T> {
    /// Next candidate in the current scan, or the end-of-scan swap check.
    fn advance_scan(&mut self) {
        self.j += 1;
        if self.j < self.a.len() {
            self.phase = Phase::Scan;
        } else if self.min_idx != self.i {
            self.phase = Phase::Swap;
        } else {
            self.advance_outer();
        }
    }

    /// Begin the next outer position, skipping scan-free tail positions.
    fn advance_outer(&mut self) {
        let n = self.a.len();
        loop {
            self.i += 1;
            if self.i >= n {
                self.phase = Phase::Finish;
                return;
            }
            self.min_idx = self.i;
            self.j = self.i + 1;
            if self.j < n {
                self.phase = Phase::Scan;
                return;
            }
        }
    }
}

impl<T: SortValue> Iterator for SelectionSteps<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        match self.phase {
            Phase::Start => {
                let frame = Snapshot::baseline(&self.a);
                if self.a.is_empty() {
                    self.phase = Phase::Done;
                } else {
                    self.min_idx = 0;
                    self.j = 1;
                    if self.j < self.a.len() {
                        self.phase = Phase::Scan;
                    } else {
                        self.advance_outer();
                    }
                }
                Some(frame)
            }
            Phase::Scan => {
                let frame = Snapshot::with(&self.a, &[self.min_idx, self.j], 0..self.i);
                if self.a[self.j] < self.a[self.min_idx] {
                    self.min_idx = self.j;
                    self.phase = Phase::NewMin;
                } else {
                    self.advance_scan();
                }
                Some(frame)
            }
            Phase::NewMin => {
                let frame = Snapshot::with(&self.a, &[self.min_idx], 0..self.i);
                self.advance_scan();
                Some(frame)
            }
            Phase::Swap => {
                self.a.swap(self.i, self.min_idx);
                let frame = Snapshot::with(&self.a, &[self.i, self.min_idx], 0..self.i + 1);
                self.advance_outer();
                Some(frame)
            }
            Phase::Finish => {
                self.phase = Phase::Done;
                Some(Snapshot::finished(&self.a))
            }
            Phase::Done => None,
        }
    }
}
