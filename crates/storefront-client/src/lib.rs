//! Commerce API client for the storefront.
//!
//! Provides a small fetch client with a pluggable transport, plus a typed
//! client for the hosted commerce service's product listing.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_client::{CommerceClient, CommerceConfig, ProductSource};
//!
//! let config = CommerceConfig::from_env()?;
//! let client = CommerceClient::new(&config);
//!
//! // GET {api_url}/products
//! let page = client.products().list().await?;
//! for product in page.data {
//!     println!("{}", product.id);
//! }
//! ```

mod commerce;
mod config;
mod error;
mod request;
mod response;
mod source;
mod transport;

pub use commerce::{CommerceClient, ProductPage, Products};
pub use config::{CommerceConfig, API_URL_VAR, DEFAULT_API_URL, PUBLIC_KEY_VAR};
pub use error::{ConfigError, FetchError};
pub use request::Request;
pub use response::Response;
pub use source::{ProductSource, UnavailableSource};
pub use transport::{HttpTransport, ReqwestTransport};

use std::collections::HashMap;
use std::fmt;

/// HTTP client for making outbound requests.
///
/// Holds a base URL and default headers; the actual I/O is delegated to an
/// [`HttpTransport`].
pub struct FetchClient<T = ReqwestTransport> {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: T,
}

impl Default for FetchClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient<ReqwestTransport> {
    /// Create a new HTTP client over reqwest.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl<T> fmt::Debug for FetchClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header values may carry credentials.
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<T: HttpTransport> FetchClient<T> {
    /// Create a client over a specific transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request. Relative URLs are joined onto the base URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let request = Request::get(full_url).headers(
            self.default_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        ClientRequestBuilder {
            client: self,
            request,
        }
    }
}

/// A request bound to a client.
pub struct ClientRequestBuilder<'a, T> {
    client: &'a FetchClient<T>,
    request: Request,
}

impl<'a, T: HttpTransport> ClientRequestBuilder<'a, T> {
    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.client.transport.execute(self.request).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CommerceClient, CommerceConfig, FetchClient, FetchError, ProductSource, Response,
    };
}


#[cfg(test)]
mod tests {
    use super::testing::StubTransport;
    use super::*;

    #[tokio::test]
    async fn test_client_joins_base_url() {
        let transport = StubTransport::replying(200, "{}");
        let client = FetchClient::with_transport(transport.clone())
            .with_base_url("https://api.example.com/v1/");

        client.get("/products").send().await.unwrap();
        client.get("https://other.example.com/x").send().await.unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].url, "https://api.example.com/v1/products");
        assert_eq!(requests[1].url, "https://other.example.com/x");
    }

    #[tokio::test]
    async fn test_client_applies_default_headers() {
        let transport = StubTransport::replying(200, "{}");
        let client = FetchClient::with_transport(transport.clone())
            .with_base_url("https://api.example.com/v1")
            .with_default_header("Accept", "application/json")
            .with_default_header("X-Authorization", "pk_test");

        client.get("/products").send().await.unwrap();
        client.get("/products").send().await.unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 2);
        for request in requests.iter() {
            assert_eq!(request.header_value("accept"), Some("application/json"));
            assert_eq!(request.header_value("x-authorization"), Some("pk_test"));
        }
    }

    #[test]
    fn test_client_debug_hides_header_values() {
        let client = FetchClient::with_transport(StubTransport::replying(200, ""))
            .with_default_header("X-Authorization", "pk_secret");
        let debug = format!("{:?}", client);
        assert!(debug.contains("X-Authorization"));
        assert!(!debug.contains("pk_secret"));
    }
}
