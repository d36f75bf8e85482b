//! Client library for the gatos catalog.
//!
//! - `catalog`: records and field validation
//! - `api`: REST client for the backend
//! - `store`: state container driven by an MVI reducer
//! - `cancel`: cancellation of in-flight loads

pub mod api;
pub mod cancel;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod store;

pub use error::CatalogError;
