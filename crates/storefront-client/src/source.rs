//! Product source seam consumed by the catalog view.

use crate::{CommerceClient, FetchError, HttpTransport};
use async_trait::async_trait;
use storefront_catalog::Product;

/// Anything that can produce the full product listing.
///
/// The result is returned as-is; deciding whether a failure is logged,
/// retried or shown is left to the caller.
#[async_trait(?Send)]
pub trait ProductSource {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport> ProductSource for CommerceClient<T> {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.products().list().await?.data)
    }
}

/// Source used when no client could be configured.
///
/// Every listing fails with [`FetchError::Unavailable`].
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait(?Send)]
impl ProductSource for UnavailableSource {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        Err(FetchError::Unavailable(self.reason.clone()))
    }
}
