//! REST access to the remote catalog.

mod client;
mod error;

pub use client::CatalogClient;
pub use error::{ApiError, Operation};
