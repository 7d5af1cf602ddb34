//! Events delivered from the backend worker to the UI thread.

use client_core::SubmissionOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SubmissionFinished(SubmissionOutcome),
    BackendFailed(String),
}
