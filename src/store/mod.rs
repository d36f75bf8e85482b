//! Catalog state container.
//!
//! `CatalogReducer` defines the transitions; `CatalogStore` performs the
//! remote calls and feeds their outcomes through the reducer.

mod catalog_store;
mod intent;
mod reducer;
mod state;

pub use catalog_store::CatalogStore;
pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, LOAD_FAILED_MESSAGE};
