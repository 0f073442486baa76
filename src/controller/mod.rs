//! Run controller: owns the live step sequence and advances it on demand
//!
//! The controller is a small state machine between the step generators and
//! the UI. It holds the baseline array, creates a fresh [`StepSequence`] per
//! run over a private copy, and pulls one frame per `step` call. Exhaustion
//! is a completion signal, never an error.

use crate::algorithms::{Algorithm, SortValue};
use crate::snapshot::{Snapshot, StepSequence};

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No live step sequence.
    Idle,
    /// A sequence exists and is advanced manually.
    Ready,
    /// Continuous playback; the driver pulls on a timer.
    Running,
    /// The sequence was exhausted.
    Done,
}

/// Result of a single `step` pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    Finished,
}

/// Owns the baseline array, the algorithm choice, and the live run.
pub struct Controller<T> {
    algorithm: Algorithm,
    baseline: Vec<T>,
    steps: Option<StepSequence<T>>,
    last_snapshot: Snapshot<T>,
    state: RunState,
    steps_taken: usize,
}

impl<T: SortValue> Controller<T> {
    pub fn new(algorithm: Algorithm, array: Vec<T>) -> Self {
        let last_snapshot = Snapshot::baseline(&array);
        Controller {
            algorithm,
            baseline: array,
            steps: None,
            last_snapshot,
            state: RunState::Idle,
            steps_taken: 0,
        }
    }

    /// Begin continuous playback over a private copy of `array`. Any
    /// existing run is replaced; the displayed frame resets to the new
    /// unsorted baseline.
    pub fn start(&mut self, algorithm: Algorithm, array: &[T]) {
        self.algorithm = algorithm;
        self.baseline = array.to_vec();
        self.last_snapshot = Snapshot::baseline(array);
        self.steps = Some(algorithm.sort(array));
        self.steps_taken = 0;
        self.state = RunState::Running;
    }

    /// Pull exactly one frame. From `Idle` this lazily creates a sequence
    /// over the stored baseline and moves to manual-stepping `Ready`.
    pub fn step(&mut self) -> StepOutcome {
        match self.state {
            RunState::Idle => {
                self.steps = Some(self.algorithm.sort(&self.baseline));
                self.steps_taken = 0;
                self.state = RunState::Ready;
                self.pull()
            }
            RunState::Ready | RunState::Running => self.pull(),
            RunState::Done => StepOutcome::Finished,
        }
    }

    fn pull(&mut self) -> StepOutcome {
        match self.steps.as_mut().and_then(|steps| steps.next()) {
            Some(snapshot) => {
                self.last_snapshot = snapshot;
                self.steps_taken += 1;
                StepOutcome::Advanced
            }
            None => {
                self.steps = None;
                self.state = RunState::Done;
                StepOutcome::Finished
            }
        }
    }

    /// Stop playback, discarding the live sequence so the next `step` or
    /// `start` begins clean.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.steps = None;
            self.state = RunState::Idle;
        }
    }

    /// Drop any live run and show `array` unsorted.
    pub fn reset(&mut self, array: Vec<T>) {
        self.last_snapshot = Snapshot::baseline(&array);
        self.baseline = array;
        self.steps = None;
        self.steps_taken = 0;
        self.state = RunState::Idle;
    }

    /// Switch algorithms; any live run is discarded.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        let array = self.baseline.clone();
        self.reset(array);
    }

    // ========== Getter methods for UI ==========

    /// The most recently pulled frame (or the baseline before any pull).
    pub fn current_snapshot(&self) -> &Snapshot<T> {
        &self.last_snapshot
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The unsorted input array for the current session.
    pub fn array(&self) -> &[T] {
        &self.baseline
    }

    /// Frames pulled from the current sequence so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}
