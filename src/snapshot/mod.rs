// Per-step frames emitted by the sorting state machines

use rustc_hash::FxHashSet;

/// One observable frame of a sorting run: a defensive copy of the working
/// array plus highlight metadata.
///
/// A snapshot never aliases the live array, so consumers can retain or
/// replay frames without observing later mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    /// The array values at this instant.
    pub values: Vec<T>,
    /// Indices currently being compared or moved.
    pub active: FxHashSet<usize>,
    /// Indices known to hold their final sorted value.
    pub sorted: FxHashSet<usize>,
    /// Optional short description of the step.
    pub label: Option<String>,
}

impl<T: Copy> Snapshot<T> {
    /// Frame with explicit highlight sets.
    pub fn with(values: &[T], active: &[usize], sorted: impl IntoIterator<Item = usize>) -> Self {
        Snapshot {
            values: values.to_vec(),
            active: active.iter().copied().collect(),
            sorted: sorted.into_iter().collect(),
            label: None,
        }
    }

    /// The "before" frame: unmodified values, nothing highlighted.
    pub fn baseline(values: &[T]) -> Self {
        Self::with(values, &[], [])
    }

    /// Frame with a label and no sorted set (merge and partition steps).
    pub fn labeled(values: &[T], active: &[usize], label: impl Into<String>) -> Self {
        Snapshot {
            label: Some(label.into()),
            ..Self::with(values, active, [])
        }
    }

    /// The terminal frame: every index final, nothing active.
    pub fn finished(values: &[T]) -> Self {
        Self::with(values, &[], 0..values.len())
    }
}

/// The lazy, ordered, finite stream of frames one sorting run produces.
///
/// Exhausting it is terminal; a new run requires a new sequence.
pub type StepSequence<T> = Box<dyn Iterator<Item = Snapshot<T>>>;
