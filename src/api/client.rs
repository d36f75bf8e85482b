//! HTTP client for the catalog backend.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, Operation};
use crate::catalog::{Gato, GatoDraft};
use crate::config::ApiConfig;

/// Thin REST client over one catalog collection.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    api: ApiConfig,
}

impl CatalogClient {
    pub fn new(api: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(api.connect_timeout())
            .timeout(api.timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            api: api.clone(),
        })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Fetches every item in the collection.
    ///
    /// Calls GET /{resource}
    pub async fn list(&self) -> Result<Vec<Gato>, ApiError> {
        let url = self.api.collection_url();
        let request = self.client.get(&url);
        self.execute(Operation::List, url, request).await
    }

    /// Stores a new item; the backend assigns its id.
    ///
    /// Calls POST /{resource}
    pub async fn create(&self, draft: &GatoDraft) -> Result<Gato, ApiError> {
        let url = self.api.collection_url();
        let request = self.client.post(&url).json(draft);
        self.execute(Operation::Create, url, request).await
    }

    /// Replaces a stored item with `gato`.
    ///
    /// Calls PUT /{resource}/{id}
    pub async fn update(&self, gato: &Gato) -> Result<Gato, ApiError> {
        if gato.id.trim().is_empty() {
            return Err(ApiError::MissingId);
        }
        let url = self.api.item_url(&gato.id);
        let request = self.client.put(&url).json(gato);
        self.execute(Operation::Update, url, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        url: String,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!(%operation, %url, "Sending catalog request");

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Connection { url, source: e })?;

        let response = check_status(operation, response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode {
                operation,
                source: e,
            })
    }
}

fn check_status(operation: Operation, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    tracing::debug!(%operation, status = status.as_u16(), "Catalog response received");

    if !status.is_success() {
        return Err(ApiError::Status {
            operation,
            status: status.as_u16(),
        });
    }
    Ok(response)
}
