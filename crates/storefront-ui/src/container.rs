//! Catalog fetcher / container.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_catalog::{Catalog, GridCell, ProductGrid, SHOP_ALL_HEADING};
use storefront_client::ProductSource;
use storefront_observability::StructuredLogger;

use crate::card::ProductCard;
use crate::loader::CatalogLoader;

/// Fetches the catalog once at mount and renders it as a grid of cards.
///
/// The first render always shows the divider over an empty grid; the
/// catalog is swapped in wholesale when the fetch succeeds. A response that
/// arrives after the view is gone is dropped.
#[component]
pub fn ProductContainer(source: Rc<dyn ProductSource>, logger: StructuredLogger) -> impl IntoView {
    let (catalog, fetch) = mount_catalog(source, logger);
    spawn_local(fetch);

    view! { <CatalogGrid catalog=catalog.read_only()/> }
}

/// Divider plus one keyed cell per product.
#[component]
pub fn CatalogGrid(catalog: ReadSignal<Catalog>) -> impl IntoView {
    let cells = move || catalog.with(|c| ProductGrid::layout(c).into_cells());

    view! {
        <div class="ui horizontal divider">{SHOP_ALL_HEADING}</div>
        <div class="ui stackable equal width centered grid">
            <For
                each=cells
                key=|cell: &GridCell| cell.key.clone()
                children=|cell: GridCell| {
                    let class = cell.width_class();
                    let id = cell.key.to_string();
                    view! {
                        <div class=class data-product-id=id>
                            <ProductCard product=cell.product/>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// State for one mount: an empty catalog and the single fetch that fills it.
///
/// Must run under the owner of the mounting view. Every call builds a fresh
/// loader, so a remounted view issues its own request.
pub(crate) fn mount_catalog(
    source: Rc<dyn ProductSource>,
    logger: StructuredLogger,
) -> (RwSignal<Catalog>, impl Future<Output = ()>) {
    let catalog = RwSignal::new(Catalog::new());
    let loader = CatalogLoader::new(source, logger.clone());

    let fetch = async move {
        if let Some(products) = loader.load().await {
            if catalog.try_update(|c| c.replace(products)).is_none() {
                logger.debug("view disposed before catalog arrived");
            }
        }
    };

    (catalog, fetch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{memory_logger, FakeSource, Reply};
    use serde_json::json;
    use storefront_observability::LogLevel;

    fn render(catalog: RwSignal<Catalog>) -> String {
        view! { <CatalogGrid catalog=catalog.read_only()/> }.to_html()
    }

    fn cell_position(html: &str, id: &str) -> usize {
        html.find(&format!(r#"data-product-id="{}""#, id))
            .unwrap_or_else(|| panic!("no cell for {} in {}", id, html))
    }

    #[tokio::test]
    async fn test_cells_render_in_response_order() {
        let source = FakeSource::new(Reply::Products(json!([
            {"id": "p2", "name": "Wool Beanie"},
            {"id": "p1", "name": "Canvas Tote", "price": {"formatted_with_symbol": "$20.00"}}
        ])));
        let (logger, _) = memory_logger();
        let owner = Owner::new();

        let (catalog, fetch) = owner.with(|| mount_catalog(Rc::new(source), logger));
        let first = owner.with(|| render(catalog));
        assert!(first.contains(SHOP_ALL_HEADING));
        assert!(!first.contains("data-product-id"));

        fetch.await;
        let html = owner.with(|| render(catalog));

        assert!(html.contains("ui horizontal divider"));
        assert!(cell_position(&html, "p2") < cell_position(&html, "p1"));
        assert_eq!(html.matches("five wide column").count(), 2);
        assert!(html.contains("Wool Beanie"));
        assert!(html.contains("$20.00"));
    }

    #[tokio::test]
    async fn test_empty_response_keeps_divider() {
        let source = FakeSource::new(Reply::Products(json!([])));
        let (logger, sink) = memory_logger();
        let owner = Owner::new();

        let (catalog, fetch) = owner.with(|| mount_catalog(Rc::new(source), logger));
        fetch.await;
        let html = owner.with(|| render(catalog));

        assert!(html.contains(SHOP_ALL_HEADING));
        assert!(html.contains("ui stackable equal width centered grid"));
        assert!(!html.contains("data-product-id"));
        assert!(sink.at_level(LogLevel::Error).is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_initial_state() {
        let source = FakeSource::new(Reply::Status(503));
        let (logger, sink) = memory_logger();
        let owner = Owner::new();

        let (catalog, fetch) = owner.with(|| mount_catalog(Rc::new(source.clone()), logger));
        let before = owner.with(|| render(catalog));
        fetch.await;
        let after = owner.with(|| render(catalog));

        for html in [&before, &after] {
            assert!(html.contains(SHOP_ALL_HEADING));
            assert!(!html.contains("data-product-id"));
        }
        assert_eq!(catalog.with_untracked(|c| c.clone()), Catalog::new());
        assert_eq!(source.calls(), 1);
        assert_eq!(sink.at_level(LogLevel::Error).len(), 1);
    }

    #[tokio::test]
    async fn test_each_mount_issues_its_own_request() {
        let source = FakeSource::new(Reply::Products(json!([{"id": "p1"}])));
        let shared: Rc<dyn ProductSource> = Rc::new(source.clone());
        let (logger, _) = memory_logger();

        let first_owner = Owner::new();
        let (first, fetch) = first_owner.with(|| mount_catalog(shared.clone(), logger.clone()));
        fetch.await;
        assert_eq!(first.with_untracked(|c| c.len()), 1);
        first_owner.cleanup();

        let second_owner = Owner::new();
        let (second, fetch) = second_owner.with(|| mount_catalog(shared.clone(), logger.clone()));
        fetch.await;
        assert_eq!(second.with_untracked(|c| c.len()), 1);

        let html = second_owner.with(|| render(second));
        assert!(html.contains(r#"data-product-id="p1""#));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_response_after_dispose_is_dropped() {
        let source = FakeSource::new(Reply::Products(json!([{"id": "p1"}])));
        let (logger, sink) = memory_logger();
        let logger = logger.with_min_level(LogLevel::Debug);
        let owner = Owner::new();

        let (catalog, fetch) = owner.with(|| mount_catalog(Rc::new(source), logger));
        owner.cleanup();
        fetch.await;

        assert!(catalog.try_with_untracked(|c| c.len()).is_none());
        let debug = sink.at_level(LogLevel::Debug);
        assert_eq!(debug.len(), 1);
        assert_eq!(debug[0].message, "view disposed before catalog arrived");
    }
}
