//! # Introduction
//!
//! sortty runs classic sorting algorithms one primitive operation at a
//! time, capturing a snapshot of the working array after every operation.
//! The snapshot stream is drawn as a bar chart in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Array → Algorithm state machine → Snapshots → Controller → TUI
//! ```
//!
//! 1. [`algorithms`] — the five step generators (bubble, selection,
//!    insertion, merge, quick), each a lazy iterator of
//!    [`snapshot::Snapshot`]s, plus seeded array generation.
//! 2. [`snapshot`] — the per-step frame: a defensive copy of the array and
//!    the highlight index sets.
//! 3. [`controller`] — the run state machine that owns the live step
//!    sequence and advances it on demand.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble (early exit), selection, insertion, merge (stable), quick
//! (iterative Lomuto partition).

pub mod algorithms;
pub mod controller;
pub mod snapshot;
pub mod ui;
