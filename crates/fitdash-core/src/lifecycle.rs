//! Per-activation retrieval lifecycle.

use crate::error::FetchError;
use crate::normalize::Record;

/// The resolved result of one fetch, before it lands in the state machine.
pub type FetchOutcome = Result<Vec<Record>, FetchError>;

/// Status of a single retrieval attempt.
///
/// A view starts at `Loading` and moves exactly once, to `Success` or to
/// `Error`. There is no road back: a terminal state holds until the view
/// instance that owns it is torn down and a fresh activation replaces it.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState {
    /// Retrieval in progress; no data, no error.
    Loading,
    /// Retrieval finished; rows ready to render.
    Success { records: Vec<Record> },
    /// Retrieval failed; message ready to surface.
    Error { message: String },
}

impl LifecycleState {
    /// Map a resolved fetch outcome onto its terminal state.
    ///
    /// This is the only transition in the lifecycle. Every failure kind folds
    /// into the same `Error` shape via its Display text.
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        match outcome {
            Ok(records) => Self::Success { records },
            Err(err) => Self::Error { message: err.to_string() },
        }
    }

    /// `true` once the state has left `Loading`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_outcome_becomes_success_state() {
        let state = LifecycleState::from_outcome(Ok(vec![json!({"id": 1})]));
        match state {
            LifecycleState::Success { records } => assert_eq!(records.len(), 1),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_outcome_becomes_error_state_with_display_text() {
        let state =
            LifecycleState::from_outcome(Err(FetchError::HttpStatus { status: 404 }));
        match state {
            LifecycleState::Error { message } => assert!(message.contains("404")),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_is_not_terminal() {
        assert!(!LifecycleState::Loading.is_terminal());
    }

    #[test]
    fn test_success_and_error_are_terminal() {
        assert!(LifecycleState::Success { records: Vec::new() }.is_terminal());
        assert!(LifecycleState::Error { message: "boom".to_string() }.is_terminal());
    }
}
