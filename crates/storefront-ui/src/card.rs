//! Product card.

use leptos::prelude::*;
use storefront_catalog::Product;

/// Renders one product from its opaque payload.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let name = product.name().unwrap_or_default().to_string();
    let price = product.formatted_price().map(str::to_string);
    let image = product.image_url().map(str::to_string);
    let alt = name.clone();

    view! {
        <div class="ui fluid card">
            {image.map(|src| view! {
                <div class="image">
                    <img src=src alt=alt/>
                </div>
            })}
            <div class="content">
                <div class="header">{name}</div>
                {price.map(|price| view! { <div class="meta">{price}</div> })}
            </div>
        </div>
    }
}
