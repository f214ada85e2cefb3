//! Storefront catalog view.
//!
//! Renders the "Shop All Products" page:
//! - `ProductContainer` fetches the catalog once at mount and lays it out
//! - `ProductCard` renders a single product
//! - `CatalogLoader` owns the fetch-once, log-and-ignore policy for one mount

mod app;
mod card;
mod console;
mod container;
mod loader;

pub use app::App;
pub use card::ProductCard;
pub use console::ConsoleSink;
pub use container::{CatalogGrid, ProductContainer};
pub use loader::CatalogLoader;

/// Component name attached to every diagnostic entry.
pub const LOG_COMPONENT: &str = "product-container";

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::rc::Rc;

    use leptos::prelude::*;
    use storefront_client::{CommerceClient, CommerceConfig, ProductSource, UnavailableSource};
    use storefront_observability::{LogFormat, StructuredLogger};

    console_error_panic_hook::set_once();

    let logger =
        StructuredLogger::new(ConsoleSink::new(LogFormat::Human)).with_component(LOG_COMPONENT);

    // A configuration error surfaces once, through the failing fetch.
    let source: Rc<dyn ProductSource> = match CommerceConfig::from_build_env() {
        Ok(config) => Rc::new(CommerceClient::new(&config)),
        Err(error) => Rc::new(UnavailableSource::new(error.to_string())),
    };

    leptos::mount::mount_to_body(move || view! { <App source=source logger=logger/> });
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use storefront_catalog::Product;
    use storefront_client::{FetchError, ProductSource};
    use storefront_observability::{MemorySink, StructuredLogger};

    pub enum Reply {
        Products(serde_json::Value),
        Offline,
        Status(u16),
    }

    /// Source with a canned reply. Clones share the call counter.
    #[derive(Clone)]
    pub struct FakeSource {
        reply: Rc<Reply>,
        calls: Rc<Cell<usize>>,
    }

    impl FakeSource {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply: Rc::new(reply),
                calls: Rc::new(Cell::new(0)),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    #[async_trait(?Send)]
    impl ProductSource for FakeSource {
        async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            match self.reply.as_ref() {
                Reply::Products(data) => serde_json::from_value(data.clone())
                    .map_err(|e| FetchError::ParseError(e.to_string())),
                Reply::Offline => Err(FetchError::RequestError("network unreachable".into())),
                Reply::Status(status) => Err(FetchError::HttpError {
                    status: *status,
                    message: "Service Unavailable".into(),
                }),
            }
        }
    }

    pub fn memory_logger() -> (StructuredLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(sink.clone()).with_component(crate::LOG_COMPONENT);
        (logger, sink)
    }
}
