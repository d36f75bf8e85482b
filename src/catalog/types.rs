use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Price as it arrives from a form or from the backend.
///
/// The backend stores whatever the client sent, so the same collection can
/// hold plain JSON numbers and locale-formatted strings such as `"1.200,50"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(value) => write!(f, "{}", value),
            Price::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::Text(text.to_string())
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Price::Text(text)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Amount(value)
    }
}

/// Read access to the fields the validator checks.
pub trait CatalogRecord {
    fn name(&self) -> &str;
    fn price(&self) -> &Price;
    fn description(&self) -> &str;
}

/// A catalog item that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatoDraft {
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "precio", default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl GatoDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<Price>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// A catalog item as stored by the backend.
///
/// Fields the backend adds on its own (timestamps, image URLs) are kept in
/// `extra` and sent back untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gato {
    pub id: String,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "precio", default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Gato {
    /// Overwrites the editable fields with the ones set in `changes`.
    pub fn apply(&mut self, changes: GatoChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
    }
}

/// Partial edit of a stored item; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GatoChanges {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub description: Option<String>,
}

impl CatalogRecord for GatoDraft {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> &Price {
        &self.price
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl CatalogRecord for Gato {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> &Price {
        &self.price
    }

    fn description(&self) -> &str {
        &self.description
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
