//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use gatos::api::CatalogClient;
use gatos::catalog::{Gato, Price};
use gatos::config::ApiConfig;
use gatos::store::CatalogStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub const CATALOG_JSON: &str = r#"[
    {"id": "1", "nombre": "Michi", "precio": "1.500", "descripcion": "Gato naranja muy juguetón", "createdAt": 1700000000},
    {"id": "2", "nombre": "Luna", "precio": 2300, "descripcion": "Gata negra y tranquila"}
]"#;

/// API settings pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        resource: "gatos".to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn client_for(base_url: &str) -> CatalogClient {
    CatalogClient::new(&api_config(base_url)).expect("Failed to build client")
}

pub fn store_for(base_url: &str) -> CatalogStore {
    CatalogStore::new(client_for(base_url))
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn gato(id: &str, name: &str, price: &str, description: &str) -> Gato {
    Gato {
        id: id.to_string(),
        name: name.to_string(),
        price: Price::from(price),
        description: description.to_string(),
        ..Default::default()
    }
}
