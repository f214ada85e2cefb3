//! Fetch-once catalog loading.

use std::rc::Rc;

use storefront_catalog::Product;
use storefront_client::ProductSource;
use storefront_observability::StructuredLogger;

/// Loads the catalog for one mounted view.
///
/// `load` consumes the loader, so each loader asks its source at most once.
/// Failures are logged and swallowed: the view keeps whatever it already
/// shows.
pub struct CatalogLoader {
    source: Rc<dyn ProductSource>,
    logger: StructuredLogger,
}

impl CatalogLoader {
    pub fn new(source: Rc<dyn ProductSource>, logger: StructuredLogger) -> Self {
        Self { source, logger }
    }

    /// Fetch the catalog.
    ///
    /// Returns the products to display on success, `None` on failure.
    pub async fn load(self) -> Option<Vec<Product>> {
        match self.source.list_products().await {
            Ok(products) => {
                self.logger
                    .info_builder("product catalog loaded")
                    .field_i64("count", products.len() as i64)
                    .emit();
                Some(products)
            }
            Err(error) => {
                self.logger
                    .error_with("failed to fetch product catalog", &[("error", &error)]);
                None
            }
        }
    }
}
