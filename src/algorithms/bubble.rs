// Bubble sort: adjacent-pair passes with early exit

use super::SortValue;
use crate::snapshot::Snapshot;

/// What the next pull will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Compare,
    Swap,
    Finish,
    Done,
}

/// Step iterator for bubble sort.
///
/// Pass `i` finalizes the tail `[n - i, n)`. A pass without swaps ends the
/// run, so the frame count depends on the input, not just its size.
#[derive(Debug)]
pub struct BubbleSteps<T> {
    a: Vec<T>,
    i: usize,
    j: usize,
    swapped: bool,
    phase: Phase,
}

pub fn sort<T: SortValue>(input: &[T]) -> BubbleSteps<T> {
    BubbleSteps {
        a: input.to_vec(),
        i: 0,
        j: 0,
        swapped: false,
        phase: Phase::Start,
    }
}

impl<T: SortValue> BubbleSteps<T> {
    fn tail(&self) -> std::ops::Range<usize> {
        self.a.len() - self.i..self.a.len()
    }

    /// Move to the next comparison, the next pass, or the final frame.
    fn advance(&mut self) {
        let n = self.a.len();
        self.j += 1;
        if self.j < n - self.i - 1 {
            self.phase = Phase::Compare;
            return;
        }
        if !self.swapped {
            self.phase = Phase::Finish;
            return;
        }
        self.i += 1;
        self.j = 0;
        self.swapped = false;
        self.phase = if n - self.i - 1 == 0 {
            Phase::Finish
        } else {
            Phase::Compare
        };
    }
}

impl<T: SortValue> Iterator for BubbleSteps<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        match self.phase {
            Phase::Start => {
                self.phase = match self.a.len() {
                    0 => Phase::Done,
                    1 => Phase::Finish,
                    _ => Phase::Compare,
                };
                Some(Snapshot::baseline(&self.a))
            }
            Phase::Compare => {
                let frame = Snapshot::with(&self.a, &[self.j, self.j + 1], self.tail());
                if self.a[self.j] > self.a[self.j + 1] {
                    self.phase = Phase::Swap;
                } else {
                    self.advance();
                }
                Some(frame)
            }
            Phase::Swap => {
                self.a.swap(self.j, self.j + 1);
                self.swapped = true;
                let frame = Snapshot::with(&self.a, &[self.j, self.j + 1], self.tail());
                self.advance();
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
