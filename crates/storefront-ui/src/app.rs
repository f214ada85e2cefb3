//! Application root.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use storefront_client::ProductSource;
use storefront_observability::StructuredLogger;

use crate::container::ProductContainer;

const SEMANTIC_UI_CSS: &str = "https://cdn.jsdelivr.net/npm/semantic-ui@2.5.0/dist/semantic.min.css";

#[component]
pub fn App(source: Rc<dyn ProductSource>, logger: StructuredLogger) -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="semantic-ui" href=SEMANTIC_UI_CSS/>
        <Title text="Shop All Products"/>

        <main class="ui container">
            <ProductContainer source=source logger=logger/>
        </main>
    }
}
