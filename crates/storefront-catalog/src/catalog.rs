//! Catalog view state.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Lifecycle of the catalog held by a view.
///
/// A failed fetch leaves the catalog `Empty`; there is no separate error
/// state and no way back from `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CatalogState {
    /// Nothing received yet.
    #[default]
    Empty,
    /// Holds the last successful response.
    Loaded,
}

/// Ordered products currently shown by the view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    state: CatalogState,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CatalogState {
        self.state
    }

    /// Products in the order the service returned them.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Replace the whole catalog with a successful response.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        self.state = CatalogState::Loaded;
    }
}
