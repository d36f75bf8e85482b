//! Catalog records and their client-side validation.

mod types;
mod validation;

pub use types::{CatalogRecord, Gato, GatoChanges, GatoDraft, Price};
pub use validation::{
    validate, Field, FieldError, ValidationResult, Violation, DESCRIPTION_MAX_CHARS,
    DESCRIPTION_MIN_CHARS,
};
