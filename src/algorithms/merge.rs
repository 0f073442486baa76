// Merge sort flattened onto an explicit work list of split/merge frames

use super::SortValue;
use crate::snapshot::Snapshot;

/// Pending work: split a half-open range or merge two adjacent sorted runs.
#[derive(Debug, Clone, Copy)]
enum Frame {
    Split { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

/// An in-progress merge of `[left, mid)` and `[mid, right)` from the
/// temporary runs `lo` and `hi` back into the working array at cursor `k`.
#[derive(Debug)]
struct Merging<T> {
    left: usize,
    mid: usize,
    right: usize,
    lo: Vec<T>,
    hi: Vec<T>,
    i: usize,
    j: usize,
    k: usize,
    // a pre-write frame was emitted; the write itself is next
    pending: bool,
}

/// Step iterator for merge sort. The sorted set stays empty until the final
/// frame; write steps carry range labels instead.
#[derive(Debug)]
pub struct MergeSteps<T> {
    a: Vec<T>,
    work: Vec<Frame>,
    cur: Option<Merging<T>>,
    started: bool,
    done: bool,
}

pub fn sort<T: SortValue>(input: &[T]) -> MergeSteps<T> {
    MergeSteps {
        a: input.to_vec(),
        work: Vec::new(),
        cur: None,
        started: false,
        done: false,
    }
}

impl<T: SortValue> Iterator for MergeSteps<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            if self.a.is_empty() {
                self.done = true;
            } else {
                self.work.push(Frame::Split {
                    left: 0,
                    right: self.a.len(),
                });
            }
            return Some(Snapshot::baseline(&self.a));
        }
        loop {
            if let Some(m) = self.cur.as_mut() {
                if m.i < m.lo.len() && m.j < m.hi.len() {
                    if !m.pending {
                        m.pending = true;
                        return Some(Snapshot::labeled(
                            &self.a,
                            &[m.k],
                            format!("merging {}:{} + {}:{}", m.left, m.mid, m.mid, m.right),
                        ));
                    }
                    // ties take the left run, preserving stability
                    self.a[m.k] = if m.lo[m.i] <= m.hi[m.j] {
                        m.i += 1;
                        m.lo[m.i - 1]
                    } else {
                        m.j += 1;
                        m.hi[m.j - 1]
                    };
                    m.k += 1;
                    m.pending = false;
                    return Some(Snapshot::labeled(&self.a, &[m.k - 1], "after write"));
                }
                if m.i < m.lo.len() {
                    self.a[m.k] = m.lo[m.i];
                    m.i += 1;
                    m.k += 1;
                    return Some(Snapshot::with(&self.a, &[m.k - 1], []));
                }
                if m.j < m.hi.len() {
                    self.a[m.k] = m.hi[m.j];
                    m.j += 1;
                    m.k += 1;
                    return Some(Snapshot::with(&self.a, &[m.k - 1], []));
                }
                self.cur = None;
            }
            match self.work.pop() {
                Some(Frame::Split { left, right }) => {
                    if right - left > 1 {
                        let mid = (left + right) / 2;
                        self.work.push(Frame::Merge { left, mid, right });
                        self.work.push(Frame::Split { left: mid, right });
                        self.work.push(Frame::Split { left, right: mid });
                    }
                }
                Some(Frame::Merge { left, mid, right }) => {
                    self.cur = Some(Merging {
                        left,
                        mid,
                        right,
                        lo: self.a[left..mid].to_vec(),
                        hi: self.a[mid..right].to_vec(),
                        i: 0,
                        j: 0,
                        k: left,
                        pending: false,
                    });
                }
                None => {
                    self.done = true;
                    return Some(Snapshot::finished(&self.a));
                }
            }
        }
    }
}
