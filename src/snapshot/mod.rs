// Step events, event sinks and the recorded event log

use crate::errors::SortError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One step of a sorting run: a full copy of the array plus the indices
/// touched by the operation that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<i64>,
    pub highlighted: Vec<usize>,
}

impl Snapshot {
    pub fn new(values: &[i64], highlighted: &[usize]) -> Self {
        Snapshot {
            values: values.to_vec(),
            highlighted: highlighted.to_vec(),
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        self.values.len() * std::mem::size_of::<i64>()
            + self.highlighted.len() * std::mem::size_of::<usize>()
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }
}

/// Receiver of step events.
///
/// Algorithms call [`StepSink::on_step`] synchronously after every mutation
/// and do not continue until it returns. Returning an error (usually
/// [`SortError::Cancelled`]) stops the run at that point. [`StepSink::on_complete`]
/// is called exactly once, after the last step, with the sorted result.
pub trait StepSink {
    fn on_step(&mut self, values: &[i64], highlighted: &[usize]) -> Result<(), SortError>;

    fn on_complete(&mut self, _sorted: &[i64]) -> Result<(), SortError> {
        Ok(())
    }
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn on_step(&mut self, values: &[i64], highlighted: &[usize]) -> Result<(), SortError> {
        (**self).on_step(values, highlighted)
    }

    fn on_complete(&mut self, sorted: &[i64]) -> Result<(), SortError> {
        (**self).on_complete(sorted)
    }
}

/// Shared flag used to abort a run between events
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Sink adapter that checks a [`CancelToken`] before forwarding each event
pub struct Cancellable<'t, S> {
    inner: S,
    token: &'t CancelToken,
}

impl<'t, S: StepSink> Cancellable<'t, S> {
    pub fn new(inner: S, token: &'t CancelToken) -> Self {
        Cancellable { inner, token }
    }
}

impl<S: StepSink> StepSink for Cancellable<'_, S> {
    fn on_step(&mut self, values: &[i64], highlighted: &[usize]) -> Result<(), SortError> {
        if self.token.is_cancelled() {
            return Err(SortError::Cancelled);
        }
        self.inner.on_step(values, highlighted)
    }

    fn on_complete(&mut self, sorted: &[i64]) -> Result<(), SortError> {
        if self.token.is_cancelled() {
            return Err(SortError::Cancelled);
        }
        self.inner.on_complete(sorted)
    }
}

/// Ordered event log for a single run, bounded by an estimated memory budget
#[derive(Debug, Clone)]
pub struct SnapshotLog {
    snapshots: Vec<Snapshot>,
    completed: Option<Vec<i64>>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotLog {
    pub fn new(max_memory: usize) -> Self {
        SnapshotLog {
            snapshots: Vec::new(),
            completed: None,
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to the log
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), SortError> {
        debug_assert!(
            snapshot
                .highlighted
                .iter()
                .all(|&idx| idx < snapshot.values.len()),
            "highlighted index out of range"
        );

        let snapshot_size = snapshot.estimated_size();
        if self.current_memory + snapshot_size > self.max_memory {
            return Err(SortError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The sorted result, once the run has completed
    pub fn completed(&self) -> Option<&[i64]> {
        self.completed.as_deref()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}

impl StepSink for SnapshotLog {
    fn on_step(&mut self, values: &[i64], highlighted: &[usize]) -> Result<(), SortError> {
        self.push(Snapshot::new(values, highlighted))
    }

    fn on_complete(&mut self, sorted: &[i64]) -> Result<(), SortError> {
        self.completed = Some(sorted.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let mut log = SnapshotLog::new(1024);
        log.on_step(&[2, 1], &[0, 1]).unwrap();
        log.on_step(&[1, 2], &[]).unwrap();
        log.on_complete(&[1, 2]).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0).unwrap().values, vec![2, 1]);
        assert!(log.get(0).unwrap().is_highlighted(1));
        assert_eq!(log.last().unwrap().highlighted, Vec::<usize>::new());
        assert_eq!(log.completed(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_log_enforces_memory_limit() {
        // Each snapshot of two values and no highlights costs 16 bytes
        let mut log = SnapshotLog::new(40);
        log.on_step(&[1, 2], &[]).unwrap();
        log.on_step(&[1, 2], &[]).unwrap();
        let err = log.on_step(&[1, 2], &[]).unwrap_err();

        assert_eq!(
            err,
            SortError::SnapshotLimitExceeded {
                current: 48,
                limit: 40
            }
        );
        assert_eq!(log.len(), 2);
        assert_eq!(log.memory_usage(), 32);
    }

    #[test]
    fn test_cancellable_stops_after_cancel() {
        let token = CancelToken::new();
        let mut log = SnapshotLog::new(1024);
        {
            let mut sink = Cancellable::new(&mut log, &token);
            sink.on_step(&[1], &[0]).unwrap();
            token.cancel();
            assert_eq!(sink.on_step(&[1], &[0]), Err(SortError::Cancelled));
            assert_eq!(sink.on_complete(&[1]), Err(SortError::Cancelled));
        }
        assert_eq!(log.len(), 1);
        assert!(log.completed().is_none());

        token.reset();
        assert!(!token.is_cancelled());
    }
}
