use thiserror::Error;

pub type OpenfortResult<T> = Result<T, OpenfortError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpenfortError {
    /// The idempotency token was already accepted for an earlier intent.
    #[error("Idempotency key already in use")]
    IdempotencyKeyInUse,

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("API error ({status}): {message}")]
    ApiError {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl OpenfortError {
    /// Whether the same request may succeed if the caller re-sends it with
    /// the same idempotency token.
    pub fn is_retryable(&self) -> bool {
        match self {
            OpenfortError::Timeout | OpenfortError::HttpError(_) => true,
            OpenfortError::ApiError { status, .. } => *status >= 500 || *status == 429,
            // a 2xx with an unreadable body may still have filed the intent
            OpenfortError::ResponseParsing(_) => true,
            OpenfortError::IdempotencyKeyInUse | OpenfortError::ConfigError(_) => false,
        }
    }

    /// Caller-safe description with no URLs, bodies or credentials.
    pub fn safe_description(&self) -> &'static str {
        match self {
            OpenfortError::IdempotencyKeyInUse => "Idempotency token already in use",
            OpenfortError::Timeout => "Counterparty request timed out",
            OpenfortError::HttpError(_) => "Counterparty unreachable",
            OpenfortError::ApiError { status, .. } if *status >= 500 => {
                "Counterparty temporarily unavailable"
            }
            OpenfortError::ApiError { status: 429, .. } => "Counterparty rate limit exceeded",
            OpenfortError::ApiError { status: 401, .. }
            | OpenfortError::ApiError { status: 403, .. } => "Counterparty rejected credentials",
            OpenfortError::ApiError { .. } => "Counterparty rejected the request",
            OpenfortError::ResponseParsing(_) => "Unexpected counterparty response",
            OpenfortError::ConfigError(_) => "Counterparty client misconfigured",
        }
    }
}
