// Quick sort: iterative Lomuto partition over an explicit range stack

use super::SortValue;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    PopRange,
    Compare,
    SwapSmaller,
    PlacePivot,
    Finish,
    Done,
}

/// Step iterator for quick sort.
///
/// Ranges are inclusive `(low, high)` pairs kept as `isize` because the left
/// sub-range degenerates to `(low, i - 1)` with `i == 0`. Invalid ranges are
/// skipped at pop time without consuming a pull.
#[derive(Debug)]
pub struct QuickSteps<T> {
    a: Vec<T>,
    stack: Vec<(isize, isize)>,
    low: usize,
    high: usize,
    i: usize,
    j: usize,
    phase: Phase,
}

pub fn sort<T: SortValue>(input: &[T]) -> QuickSteps<T> {
    QuickSteps {
        a: input.to_vec(),
        stack: Vec::new(),
        low: 0,
        high: 0,
        i: 0,
        j: 0,
        phase: Phase::Start,
    }
}

impl<T: SortValue> QuickSteps<T> {
    /// Next comparison in the scan, or pivot placement when the scan ends.
    fn advance_scan(&mut self) {
        self.j += 1;
        self.phase = if self.j < self.high {
            Phase::Compare
        } else {
            Phase::PlacePivot
        };
    }
}

impl<T: SortValue> Iterator for QuickSteps<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        loop {
            match self.phase {
                Phase::Start => {
                    let frame = Snapshot::baseline(&self.a);
                    if self.a.is_empty() {
                        self.phase = Phase::Done;
                    } else {
                        self.stack.push((0, self.a.len() as isize - 1));
                        self.phase = Phase::PopRange;
                    }
                    return Some(frame);
                }
                Phase::PopRange => match self.stack.pop() {
                    None => self.phase = Phase::Finish,
                    Some((low, high)) if low >= high => {}
                    Some((low, high)) => {
                        self.low = low as usize;
                        self.high = high as usize;
                        self.i = self.low;
                        self.j = self.low;
                        self.phase = Phase::Compare;
                    }
                },
                Phase::Compare => {
                    let frame =
                        Snapshot::labeled(&self.a, &[self.j, self.high], "compare to pivot");
                    // the pivot a[high] never moves during the scan
                    if self.a[self.j] < self.a[self.high] {
                        self.phase = Phase::SwapSmaller;
                    } else {
                        self.advance_scan();
                    }
                    return Some(frame);
                }
                Phase::SwapSmaller => {
                    self.a.swap(self.i, self.j);
                    let frame = Snapshot::labeled(&self.a, &[self.i, self.j], "swap smaller");
                    self.i += 1;
                    self.advance_scan();
                    return Some(frame);
                }
                Phase::PlacePivot => {
                    self.a.swap(self.i, self.high);
                    let frame = Snapshot::labeled(&self.a, &[self.i, self.high], "pivot placed");
                    self.stack.push((self.low as isize, self.i as isize - 1));
                    self.stack.push((self.i as isize + 1, self.high as isize));
                    self.phase = Phase::PopRange;
                    return Some(frame);
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(Snapshot::finished(&self.a));
                }
                Phase::Done => return None,
            }
        }
    }
}
