//! Error types for the sorting engine and controller
//!
//! [`SortError`] covers every way a run can be rejected or stopped. Runs are
//! deterministic, so there is no transient-failure class: an error is either a
//! validation rejection raised before the first event, a cooperative
//! cancellation, or a resource limit hit while recording.

use crate::algorithms::Algorithm;
use thiserror::Error;

/// Errors that can occur while generating, validating or running a sort
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Bad size or bounds at the controller boundary
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A value the algorithm cannot index by (negative keys for the
    /// distribution sorts)
    #[error("{algorithm} cannot sort value {value}: {reason}")]
    UnsupportedValueDomain {
        algorithm: Algorithm,
        value: i64,
        reason: &'static str,
    },

    /// The run was aborted at a suspension point
    #[error("Run cancelled")]
    Cancelled,

    /// A replay is still outstanding on the controller
    #[error("A run is already in progress")]
    RunInProgress,

    /// Recording the event log would exceed the configured memory limit
    #[error("Snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },
}

impl SortError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SortError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether the error was raised by validation, before any event fired
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SortError::InvalidInput { .. }
                | SortError::UnsupportedValueDomain { .. }
                | SortError::RunInProgress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_domain_message_names_algorithm() {
        let err = SortError::UnsupportedValueDomain {
            algorithm: Algorithm::Counting,
            value: -3,
            reason: "negative values are not supported",
        };
        assert_eq!(
            err.to_string(),
            "Counting Sort cannot sort value -3: negative values are not supported"
        );
        assert!(err.is_rejection());
    }

    #[test]
    fn test_cancel_is_not_a_rejection() {
        assert!(!SortError::Cancelled.is_rejection());
        assert!(!SortError::SnapshotLimitExceeded {
            current: 10,
            limit: 5
        }
        .is_rejection());
    }
}
