//! Opaque product records.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product as returned by the commerce service.
///
/// Only the identifier is interpreted. Every other field lands in `payload`
/// verbatim and serializes back out unchanged, so the card sees exactly what
/// the service sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Remaining service fields, untouched.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Product {
    /// Create a product with an empty payload.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            payload: Map::new(),
        }
    }

    /// Attach a payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    /// Look up a raw payload field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Display name, if the service sent one.
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// Price already formatted by the service, e.g. `"$19.99"`.
    pub fn formatted_price(&self) -> Option<&str> {
        let price = self.field("price")?;
        price
            .get("formatted_with_symbol")
            .or_else(|| price.get("formatted"))
            .and_then(Value::as_str)
    }

    /// Primary image URL.
    pub fn image_url(&self) -> Option<&str> {
        self.field("image")
            .and_then(|image| image.get("url"))
            .or_else(|| self.field("media").and_then(|media| media.get("source")))
            .and_then(Value::as_str)
    }
}
