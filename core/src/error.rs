//! Error types for the todo export core.
//!
//! # Design
//! `ApiError` covers what can go wrong once a response is in hand: a non-2xx
//! status or a body that is not a list of todos. Transport failures
//! (connect, timeout) never reach the core and are classified by the binary.
//! `ExportError` covers CSV serialization.

use thiserror::Error;

/// Errors returned by `TodoClient::parse_list_todos`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("{status} {} for url: {url}", .reason.as_deref().unwrap_or("Error"))]
    HttpError {
        status: u16,
        reason: Option<String>,
        url: String,
        body: String,
    },

    /// The response body could not be deserialized into a list of records.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// Status code for `HttpError`, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            ApiError::DeserializationError(_) => None,
        }
    }
}

/// Errors raised while writing or reading back a table as CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
