//! Instrumented sorting algorithms.
//!
//! Every algorithm takes ownership of its input buffer, sorts it ascending and
//! returns it, calling [`StepSink::on_step`] after each data-mutating step with a
//! full copy of the array and the indices the step touched. The family
//! submodules hold the implementations:
//!
//! - [`exchange`]: Bubble, Selection, Insertion and Shell Sort
//! - [`divide`]: Merge and Quick Sort
//! - [`heap`]: Heap Sort
//! - [`distribution`]: Counting, Radix and Bucket Sort (non-negative values only)
//! - [`native`]: the standard library sort, emitted as a single step
//!
//! Callers go through [`Algorithm::sort`], which validates the value domain,
//! skips trivially sorted inputs and delivers the terminal
//! [`StepSink::on_complete`] event.

pub mod distribution;
pub mod divide;
pub mod exchange;
pub mod heap;
pub mod native;

use crate::errors::SortError;
use crate::snapshot::StepSink;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Selector for one of the supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Heap,
    Quick,
    Counting,
    Radix,
    Bucket,
    Shell,
    Tim,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Shell,
        Algorithm::Tim,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Bucket => "Bucket Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Tim => "Tim Sort",
        }
    }

    /// Lower-case key used in configuration files
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Counting => "counting",
            Algorithm::Radix => "radix",
            Algorithm::Bucket => "bucket",
            Algorithm::Shell => "shell",
            Algorithm::Tim => "tim",
        }
    }

    /// One-paragraph explanation shown next to the chart
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order."
            }
            Algorithm::Selection => {
                "Divides the array into a sorted and unsorted region, repeatedly finds the minimum element in the unsorted region and adds it to the sorted region."
            }
            Algorithm::Insertion => {
                "Builds the final sorted array one item at a time, by repeatedly inserting a new element into the sorted portion of the array."
            }
            Algorithm::Merge => {
                "Divides the array into smaller subarrays, sorts them, and then merges them back together to form the final sorted array."
            }
            Algorithm::Heap => {
                "Creates a heap data structure from the array and repeatedly extracts the maximum element to build the sorted array."
            }
            Algorithm::Quick => {
                "Uses a divide-and-conquer strategy, selecting a 'pivot' element and partitioning the array around it."
            }
            Algorithm::Counting => {
                "Counts how often each value occurs, turns the counts into positions and places every element directly into its final slot."
            }
            Algorithm::Radix => {
                "Sorts by one decimal digit at a time, least significant first, using a stable counting pass per digit."
            }
            Algorithm::Bucket => {
                "Distributes elements into buckets by value range, sorts each bucket on its own and concatenates the buckets."
            }
            Algorithm::Shell => {
                "Runs insertion sort over elements a shrinking gap apart, so far-away elements move early and the final pass has little left to do."
            }
            Algorithm::Tim => {
                "Hands the whole array to the standard library's stable sort and shows only the finished result."
            }
        }
    }

    /// Distribution sorts index by value and cannot handle negative keys
    pub fn requires_non_negative(self) -> bool {
        matches!(
            self,
            Algorithm::Counting | Algorithm::Radix | Algorithm::Bucket
        )
    }

    /// Next algorithm in menu order (wraps around)
    pub fn next(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order (wraps around)
    pub fn prev(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Index into [`Algorithm::ALL`]
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|&algorithm| algorithm == self)
            .unwrap_or(0)
    }

    /// Check that every value is acceptable to this algorithm.
    ///
    /// Called before any mutation so a rejected input never emits an event.
    pub fn validate(self, values: &[i64]) -> Result<(), SortError> {
        if !self.requires_non_negative() {
            return Ok(());
        }

        if let Some(&value) = values.iter().find(|&&v| v < 0) {
            return Err(SortError::UnsupportedValueDomain {
                algorithm: self,
                value,
                reason: "negative values are not supported",
            });
        }

        if self == Algorithm::Counting {
            distribution::check_counting_range(values)?;
        }

        Ok(())
    }

    /// Sort `values`, reporting every step to `sink`.
    ///
    /// Inputs of length 0 or 1 are returned unchanged without any step event.
    /// On success `sink.on_complete` has been called exactly once with the
    /// returned array.
    pub fn sort(self, values: Vec<i64>, sink: &mut dyn StepSink) -> Result<Vec<i64>, SortError> {
        self.validate(&values)?;

        let sorted = if values.len() < 2 {
            values
        } else {
            match self {
                Algorithm::Bubble => exchange::bubble_sort(values, sink)?,
                Algorithm::Selection => exchange::selection_sort(values, sink)?,
                Algorithm::Insertion => exchange::insertion_sort(values, sink)?,
                Algorithm::Shell => exchange::shell_sort(values, sink)?,
                Algorithm::Merge => divide::merge_sort(values, sink)?,
                Algorithm::Quick => divide::quick_sort(values, sink)?,
                Algorithm::Heap => heap::heap_sort(values, sink)?,
                Algorithm::Counting => distribution::counting_sort(values, sink)?,
                Algorithm::Radix => distribution::radix_sort(values, sink)?,
                Algorithm::Bucket => distribution::bucket_sort(values, sink)?,
                Algorithm::Tim => native::tim_sort(values, sink)?,
            }
        };

        sink.on_complete(&sorted)?;
        Ok(sorted)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix(" sort").unwrap_or(&key);
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.key() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotLog;

    #[test]
    fn test_next_and_prev_cycle_through_all() {
        let mut algorithm = Algorithm::Bubble;
        for _ in 0..Algorithm::ALL.len() {
            algorithm = algorithm.next();
        }
        assert_eq!(algorithm, Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Tim);
        assert_eq!(Algorithm::Tim.next(), Algorithm::Bubble);
    }

    #[test]
    fn test_from_str_accepts_keys_and_names() {
        assert_eq!("quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("Radix Sort".parse::<Algorithm>(), Ok(Algorithm::Radix));
        assert_eq!(" TIM ".parse::<Algorithm>(), Ok(Algorithm::Tim));
        assert!("bogo".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_negative_values_rejected_before_any_event() {
        for algorithm in [Algorithm::Counting, Algorithm::Radix, Algorithm::Bucket] {
            let mut log = SnapshotLog::new(usize::MAX);
            let err = algorithm.sort(vec![3, -1, 2], &mut log).unwrap_err();
            assert!(matches!(
                err,
                SortError::UnsupportedValueDomain { value: -1, .. }
            ));
            assert!(log.is_empty());
            assert!(log.completed().is_none());
        }
    }

    #[test]
    fn test_comparison_sorts_accept_negatives() {
        let mut log = SnapshotLog::new(usize::MAX);
        let sorted = Algorithm::Quick.sort(vec![3, -1, 2], &mut log).unwrap();
        assert_eq!(sorted, vec![-1, 2, 3]);
    }

    #[test]
    fn test_trivial_inputs_emit_nothing_but_complete() {
        for algorithm in Algorithm::ALL {
            for input in [vec![], vec![7]] {
                let mut log = SnapshotLog::new(usize::MAX);
                let sorted = algorithm.sort(input.clone(), &mut log).unwrap();
                assert_eq!(sorted, input, "{algorithm}");
                assert!(log.is_empty(), "{algorithm} emitted on {input:?}");
                assert_eq!(log.completed(), Some(&input[..]));
            }
        }
    }
}
