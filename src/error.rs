//! Crate-level error type.

use thiserror::Error;

use crate::api::ApiError;
use crate::catalog::ValidationResult;
use crate::config::ConfigError;

/// Errors returned by `CatalogStore` operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The record failed client-side validation and was not sent
    #[error("Invalid record: {0}")]
    Invalid(ValidationResult),

    /// No loaded item has this id
    #[error("Item '{id}' not found")]
    NotFound { id: String },
}
