use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::models::{ErrorResponse, SubmissionError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Duplicate Request: {0}")]
    DuplicateRequest(String),

    #[error("Submission Failed: {message}")]
    SubmissionFailed { message: String, retryable: bool },

    #[error("Authentication Failed: {0}")]
    AuthenticationFailure(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::DuplicateRequest(_) => "DUPLICATE_REQUEST",
            ApiError::SubmissionFailed { .. } => "SUBMISSION_FAILED",
            ApiError::AuthenticationFailure(_) => "AUTHENTICATION_FAILED",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(error: SubmissionError) -> Self {
        match error {
            SubmissionError::Validation(msg) => ApiError::ValidationError(msg),
            SubmissionError::DuplicateSubmission { .. } => {
                ApiError::DuplicateRequest("This batch is already being processed".to_string())
            }
            SubmissionError::SubmissionFailed { message, retryable } => {
                // the diagnostic stays in the logs, callers get a fixed message
                error!("Batch submission failed: {}", message);
                ApiError::SubmissionFailed {
                    message: "Failed to process batch mint".to_string(),
                    retryable,
                }
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateRequest(_) => StatusCode::CONFLICT,
            ApiError::SubmissionFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::AuthenticationFailure(_) => StatusCode::UNAUTHORIZED,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::ValidationError(msg)
            | ApiError::DuplicateRequest(msg)
            | ApiError::AuthenticationFailure(msg)
            | ApiError::InternalError(msg) => ErrorResponse::new(self.code(), msg),
            ApiError::SubmissionFailed { message, retryable } => {
                ErrorResponse::new(self.code(), message).with_retryable(*retryable)
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
