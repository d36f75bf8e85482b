//! Error types for catalog API calls.

use std::fmt;

use thiserror::Error;

/// The catalog operation a request belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => f.write_str("list"),
            Operation::Create => f.write_str("create"),
            Operation::Update => f.write_str("update"),
        }
    }
}

/// Errors that can occur while talking to the catalog backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to reach the backend or the request timed out
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Catalog {operation} failed with status {status}")]
    Status { operation: Operation, status: u16 },

    /// Response body was not the expected JSON
    #[error("Failed to decode catalog {operation} response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Update requested for an item with an empty id
    #[error("Cannot update an item without an id")]
    MissingId,
}

impl ApiError {
    /// True when the backend itself reported the failure.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}
