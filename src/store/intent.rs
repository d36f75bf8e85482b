use crate::catalog::Gato;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A fetch of the whole list has started. Valid from any state.
    StartLoad,
    LoadSucceeded { gatos: Vec<Gato> },
    LoadFailed { message: String },
    /// The backend stored a new item.
    Added { gato: Gato },
    /// The backend accepted an edit; `gato` replaces the item with its id.
    Updated { gato: Gato },
}

impl Intent for CatalogIntent {}
