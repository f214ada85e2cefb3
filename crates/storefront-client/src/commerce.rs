//! Typed client for the hosted commerce service.

use crate::{CommerceConfig, FetchClient, FetchError, HttpTransport, ReqwestTransport};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use storefront_catalog::Product;

/// Header carrying the public API key.
const AUTH_HEADER: &str = "X-Authorization";

/// One page of the product listing, `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products in service order.
    pub data: Vec<Product>,
    /// Pagination and other metadata, left opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Client for the commerce service.
///
/// Every request carries the public key and JSON content negotiation
/// headers.
#[derive(Debug)]
pub struct CommerceClient<T = ReqwestTransport> {
    http: FetchClient<T>,
}

impl CommerceClient<ReqwestTransport> {
    /// Create a client over reqwest.
    pub fn new(config: &CommerceConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> CommerceClient<T> {
    /// Create a client over a specific transport.
    pub fn with_transport(config: &CommerceConfig, transport: T) -> Self {
        let http = FetchClient::with_transport(transport)
            .with_base_url(config.api_url.as_str())
            .with_default_header(AUTH_HEADER, config.public_key.expose_secret())
            .with_default_header("Accept", "application/json")
            .with_default_header("Content-Type", "application/json");

        Self { http }
    }

    /// Product endpoints.
    pub fn products(&self) -> Products<'_, T> {
        Products { client: self }
    }
}

/// Product endpoints of the commerce service.
pub struct Products<'a, T> {
    client: &'a CommerceClient<T>,
}

impl<T: HttpTransport> Products<'_, T> {
    /// List products. No filtering, sorting or pagination parameters are sent.
    pub async fn list(&self) -> Result<ProductPage, FetchError> {
        let response = self
            .client
            .http
            .get("/products")
            .send()
            .await?
            .error_for_status()?;

        response.json()
    }
}
