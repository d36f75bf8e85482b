use crate::catalog::Gato;
use crate::mvi::State;

/// Message shown to users when the catalog cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Hubo un problema al cargar las mascotas.";

/// Lifecycle of the catalog list: idle → loading → loaded | errored.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Idle,
    Loading,
    Loaded {
        gatos: Vec<Gato>,
    },
    Errored {
        message: String,
    },
}

impl State for CatalogState {}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Items currently held; empty unless loaded.
    pub fn gatos(&self) -> &[Gato] {
        match self {
            Self::Loaded { gatos } => gatos,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored { message } => Some(message),
            _ => None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Gato> {
        self.gatos().iter().find(|g| g.id == id)
    }
}
