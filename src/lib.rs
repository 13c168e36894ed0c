//! # Introduction
//!
//! sortty animates classic sorting algorithms one step at a time. Each
//! algorithm is instrumented to report a full snapshot of the array, plus the
//! indices it touched, after every mutation. The recorded steps are then
//! replayed at a controlled pace through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Generator → Controller → Algorithm → StepSink (SnapshotLog) → Replay → TUI
//! ```
//!
//! 1. [`generator`] — random arrays of values in `[1, 100)`.
//! 2. [`algorithms`] — the eleven instrumented sorts behind the
//!    [`algorithms::Algorithm`] selector.
//! 3. [`snapshot`] — step events, the [`snapshot::StepSink`] callback trait,
//!    the bounded [`snapshot::SnapshotLog`] and cooperative cancellation.
//! 4. [`controller`] — owns the current array between runs, serializes runs
//!    and commits results.
//! 5. [`config`] / [`logging`] — settings from `sortty.toml` and `SORTTY_*`
//!    variables; file-backed `tracing` output.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Headless use
//!
//! ```
//! use sortty::algorithms::Algorithm;
//! use sortty::snapshot::SnapshotLog;
//!
//! let mut log = SnapshotLog::new(usize::MAX);
//! let sorted = Algorithm::Bubble.sort(vec![5, 3, 8, 1], &mut log).unwrap();
//! assert_eq!(sorted, vec![1, 3, 5, 8]);
//! assert_eq!(log.get(0).unwrap().values, vec![3, 5, 8, 1]);
//! ```

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod snapshot;
pub mod ui;
