//! Error types for live-data fetching
//!
//! Error taxonomy using thiserror. Each outbound attempt yields an
//! [`AttemptError`]; the retry loop folds those into a single [`FetchError`].

use thiserror::Error;

/// Symbol validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Symbol is empty")]
    Empty,
}

/// Failure of a single outbound attempt
///
/// Every variant is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected upstream status: {0}")]
    Status(u16),

    #[error("Malformed JSON body: {0}")]
    Decode(String),
}

impl AttemptError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            AttemptError::Transport(_) => "transport",
            AttemptError::Timeout => "timeout",
            AttemptError::Status(_) => "status",
            AttemptError::Decode(_) => "decode",
        }
    }
}

/// Terminal failure of a fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid symbol: {0}")]
    Symbol(#[from] SymbolError),

    #[error("Retries exhausted after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: AttemptError },

    #[error("Upstream returned an empty body")]
    EmptyBody,

    #[error("Upstream body is not a JSON object")]
    NotAnObject,

    #[error("Upstream body is missing required field: {0}")]
    MissingField(String),
}
