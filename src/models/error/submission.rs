use serde::Serialize;
use thiserror::Error;

/// Failure of a batch submission, classified so the boundary can map it to a
/// caller-actionable response.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum SubmissionError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate submission: idempotency token {token} was already accepted")]
    DuplicateSubmission { token: String },

    /// `message` is an opaque diagnostic; counterparty detail is logged, never carried here.
    #[error("Submission failed: {message}")]
    SubmissionFailed { message: String, retryable: bool },
}

impl SubmissionError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmissionError::SubmissionFailed {
                retryable: true,
                ..
            }
        )
    }

    /// Short label used for metrics.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            SubmissionError::Validation(_) => "validation_error",
            SubmissionError::DuplicateSubmission { .. } => "duplicate",
            SubmissionError::SubmissionFailed { .. } => "failed",
        }
    }
}
