use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::CatalogClient;
use crate::cancel::CancelToken;
use crate::catalog::{validate, CatalogRecord, Gato, GatoChanges, GatoDraft, ValidationResult};
use crate::config::Config;
use crate::error::CatalogError;
use crate::mvi::Reducer;
use crate::store::intent::CatalogIntent;
use crate::store::reducer::CatalogReducer;
use crate::store::state::{CatalogState, LOAD_FAILED_MESSAGE};

/// Owns the catalog state and the client that feeds it.
///
/// Clones share the same state. Every change goes through
/// `CatalogReducer`; the lock is never held across an await.
#[derive(Clone)]
pub struct CatalogStore {
    client: CatalogClient,
    state: Arc<RwLock<CatalogState>>,
}

impl CatalogStore {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(CatalogState::Idle)),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        Ok(Self::new(CatalogClient::new(&config.api)?))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CatalogState {
        self.state.read().clone()
    }

    pub fn gatos(&self) -> Vec<Gato> {
        self.state.read().gatos().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error().map(str::to_string)
    }

    pub fn validate<R: CatalogRecord + ?Sized>(&self, record: &R) -> ValidationResult {
        validate(record)
    }

    /// Fetches the list and moves the state to `Loaded` or `Errored`.
    ///
    /// Once `cancel` fires no further state change is made: a response that
    /// arrives late is dropped and the state stays where it was.
    pub async fn load(&self, cancel: &CancelToken) -> CatalogState {
        if cancel.is_cancelled() {
            tracing::debug!("Load cancelled before start");
            return self.state();
        }
        self.dispatch(CatalogIntent::StartLoad);
        tracing::debug!(url = %self.client.api().collection_url(), "Loading catalog");

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Load cancelled while fetching, discarding response");
                return self.state();
            }
            result = self.client.list() => result,
        };

        if cancel.is_cancelled() {
            tracing::debug!("Load cancelled, ignoring result");
            return self.state();
        }

        let intent = match result {
            Ok(gatos) => {
                tracing::info!(count = gatos.len(), "Catalog loaded");
                CatalogIntent::LoadSucceeded { gatos }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                CatalogIntent::LoadFailed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                }
            }
        };
        self.dispatch(intent)
    }

    /// Validates `draft`, stores it remotely and appends the stored item.
    pub async fn add(&self, draft: GatoDraft) -> Result<Gato, CatalogError> {
        let validation = validate(&draft);
        if !validation.is_valid() {
            return Err(CatalogError::Invalid(validation));
        }

        let gato = self.client.create(&draft).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to add item");
            e
        })?;

        tracing::info!(id = %gato.id, "Item added");
        self.dispatch(CatalogIntent::Added { gato: gato.clone() });
        Ok(gato)
    }

    /// Validates `gato`, sends it as the new version of its id and swaps
    /// the backend's answer into the list.
    pub async fn edit(&self, gato: Gato) -> Result<Gato, CatalogError> {
        let validation = validate(&gato);
        if !validation.is_valid() {
            return Err(CatalogError::Invalid(validation));
        }

        let updated = self.client.update(&gato).await.map_err(|e| {
            tracing::error!(id = %gato.id, error = %e, "Failed to edit item");
            e
        })?;

        tracing::info!(id = %updated.id, "Item updated");
        self.dispatch(CatalogIntent::Updated {
            gato: updated.clone(),
        });
        Ok(updated)
    }

    /// Applies `changes` to the loaded item with `id` and saves it.
    pub async fn edit_by_id(&self, id: &str, changes: GatoChanges) -> Result<Gato, CatalogError> {
        let current = self.state.read().find(id).cloned();
        let mut gato = current.ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        gato.apply(changes);
        self.edit(gato).await
    }

    fn dispatch(&self, intent: CatalogIntent) -> CatalogState {
        let mut state = self.state.write();
        let next = CatalogReducer::reduce(std::mem::take(&mut *state), intent);
        *state = next.clone();
        next
    }
}
