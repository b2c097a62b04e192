// Error types for input resolution, device fetches and analysis.

use thiserror::Error;

/// Rejected operator input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid IP address {0:?}")]
    InvalidAddress(String),

    #[error("{field} must be an integer, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("Duration and interval must be positive integers")]
    NotPositive,

    #[error("duration of {0} minutes is too long")]
    DurationTooLong(i64),

    /// Stdin closed while a prompt was still waiting for a valid answer.
    #[error("input closed before a valid {0} was entered")]
    EndOfInput(&'static str),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One failed read of the device status endpoint. Never fatal: the tick is skipped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("device returned status {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("response has no {0} value")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No data collected, unable to compute percentage differences.")]
    NoData,
}
