//! Product catalog view state for the storefront.
//!
//! This crate provides the framework-free half of the catalog view:
//!
//! - **Ids**: `ProductId`, the stable render key
//! - **Product**: opaque record passed through to the card untouched
//! - **Catalog**: the `Empty` / `Loaded` view state
//! - **Grid**: layout model mapping a catalog onto grid cells
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! catalog.replace(products);
//!
//! let grid = ProductGrid::layout(&catalog);
//! for cell in grid.cells() {
//!     println!("{} -> {}", cell.key, cell.width_class());
//! }
//! ```

pub mod catalog;
pub mod grid;
pub mod ids;
pub mod product;

pub use catalog::{Catalog, CatalogState};
pub use grid::{GridCell, ProductGrid, COLUMN_WIDTH, SHOP_ALL_HEADING};
pub use ids::ProductId;
pub use product::Product;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogState};
    pub use crate::grid::{GridCell, ProductGrid, COLUMN_WIDTH, SHOP_ALL_HEADING};
    pub use crate::ids::ProductId;
    pub use crate::product::Product;
}
