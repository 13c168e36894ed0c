//! Run orchestration and the current-array lifecycle.
//!
//! The [`Controller`] owns the only long-lived mutable state: the array shown
//! between runs and the selected algorithm. Algorithms never see that array;
//! every run works on a private copy, and the copy only replaces the current
//! array when the run completes.
//!
//! Two ways to run:
//!
//! - [`Controller::run`] streams steps to a caller-supplied [`StepSink`] and
//!   commits as soon as the algorithm returns.
//! - [`Controller::record`] sorts eagerly into a [`SnapshotLog`] and hands back
//!   a [`Replay`]. The controller stays busy until the replay is either
//!   [committed](Controller::commit) or [aborted](Controller::abort), so a UI can
//!   animate the log at its own pace without a second run sneaking in.

use crate::algorithms::Algorithm;
use crate::constants::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::errors::SortError;
use crate::generator;
use crate::snapshot::{CancelToken, Cancellable, Snapshot, SnapshotLog, StepSink};
use rand::Rng;
use tracing::{debug, info, warn};

/// Inclusive range of array sizes the controller accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    min: usize,
    max: usize,
}

impl SizeBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, SortError> {
        if min == 0 || min > max {
            return Err(SortError::invalid_input(format!(
                "array size bounds [{}, {}] are empty",
                min, max
            )));
        }
        Ok(SizeBounds { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }

    pub fn clamp(&self, size: usize) -> usize {
        size.clamp(self.min, self.max)
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        SizeBounds {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}

/// A run recorded eagerly, waiting to be played back and committed
#[derive(Debug, Clone)]
pub struct Replay {
    id: u64,
    algorithm: Algorithm,
    input: Vec<i64>,
    log: SnapshotLog,
    result: Vec<i64>,
}

impl Replay {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The array as it was when the run started
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn result(&self) -> &[i64] {
        &self.result
    }

    pub fn log(&self) -> &SnapshotLog {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Snapshot> {
        self.log.get(index)
    }
}

/// Owner of the current array and the selected algorithm
pub struct Controller<R> {
    rng: R,
    bounds: SizeBounds,
    current: Option<Vec<i64>>,
    selected: Algorithm,
    cancel: CancelToken,
    /// Id of the outstanding replay, if any
    pending: Option<u64>,
    next_run_id: u64,
}

impl<R: Rng> Controller<R> {
    pub fn new(bounds: SizeBounds, rng: R) -> Self {
        Controller {
            rng,
            bounds,
            current: None,
            selected: Algorithm::default(),
            cancel: CancelToken::new(),
            pending: None,
            next_run_id: 0,
        }
    }

    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// The committed array, if one has been generated yet
    pub fn current(&self) -> Option<&[i64]> {
        self.current.as_deref()
    }

    pub fn selected(&self) -> Algorithm {
        self.selected
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        debug!(algorithm = %algorithm, "algorithm selected");
        self.selected = algorithm;
    }

    /// Whether a recorded replay is waiting for commit or abort
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle that aborts a streaming run at its next step
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Generate the first array unless one already exists
    pub fn ensure_array(&mut self, size: usize) -> Result<&[i64], SortError> {
        if self.current.is_none() {
            return self.regenerate(size);
        }
        Ok(self.current.as_deref().unwrap_or_default())
    }

    /// Replace the current array with a fresh random one
    pub fn regenerate(&mut self, size: usize) -> Result<&[i64], SortError> {
        if self.pending.is_some() {
            return Err(SortError::RunInProgress);
        }
        if !self.bounds.contains(size) {
            return Err(SortError::invalid_input(format!(
                "array size {} is outside [{}, {}]",
                size, self.bounds.min, self.bounds.max
            )));
        }

        let values = generator::generate(size, &mut self.rng)?;
        info!(size, "generated new array");
        Ok(self.current.insert(values).as_slice())
    }

    fn start(&self) -> Result<Vec<i64>, SortError> {
        if self.pending.is_some() {
            return Err(SortError::RunInProgress);
        }
        let input = self
            .current
            .clone()
            .ok_or_else(|| SortError::invalid_input("no array has been generated"))?;
        self.selected.validate(&input)?;
        Ok(input)
    }

    /// Run the selected algorithm on a copy of the current array, streaming
    /// every step to `sink`, and commit the result.
    ///
    /// The controller's [`CancelToken`] is reset first and checked before every
    /// step. On any error the current array is left as it was.
    pub fn run<S: StepSink>(&mut self, sink: S) -> Result<&[i64], SortError> {
        let input = self.start()?;
        let algorithm = self.selected;
        self.cancel.reset();

        info!(algorithm = %algorithm, len = input.len(), "run started");
        let outcome = {
            let mut guarded = Cancellable::new(sink, &self.cancel);
            algorithm.sort(input, &mut guarded)
        };

        match outcome {
            Ok(sorted) => {
                info!(algorithm = %algorithm, "run committed");
                Ok(self.current.insert(sorted).as_slice())
            }
            Err(err) => {
                warn!(algorithm = %algorithm, error = %err, "run discarded");
                Err(err)
            }
        }
    }

    /// Sort a copy of the current array into a bounded event log.
    ///
    /// The controller stays busy until [`Controller::commit`] or
    /// [`Controller::abort`] is called.
    pub fn record(&mut self, snapshot_limit: usize) -> Result<Replay, SortError> {
        let input = self.start()?;
        let algorithm = self.selected;

        let mut log = SnapshotLog::new(snapshot_limit);
        let result = algorithm.sort(input.clone(), &mut log)?;

        let id = self.next_run_id;
        self.next_run_id += 1;
        self.pending = Some(id);

        info!(
            algorithm = %algorithm,
            len = input.len(),
            steps = log.len(),
            bytes = log.memory_usage(),
            "run recorded"
        );
        Ok(Replay {
            id,
            algorithm,
            input,
            log,
            result,
        })
    }

    /// Make a finished replay's result the current array
    pub fn commit(&mut self, replay: Replay) -> Result<&[i64], SortError> {
        if self.pending != Some(replay.id) {
            return Err(SortError::invalid_input(
                "replay is not the outstanding run",
            ));
        }
        self.pending = None;
        info!(algorithm = %replay.algorithm, steps = replay.len(), "run committed");
        Ok(self.current.insert(replay.result).as_slice())
    }

    /// Drop the outstanding replay; the current array is untouched.
    ///
    /// Returns whether there was a replay to drop.
    pub fn abort(&mut self) -> bool {
        let aborted = self.pending.take().is_some();
        if aborted {
            info!("run aborted");
        }
        aborted
    }
}
