//! Product grid with loading and empty states.

use api::Product;
use dioxus::prelude::*;

use crate::icons::{FaBoxOpen, FaMagnifyingGlass};
use crate::{Icon, ProductItem};

#[component]
pub fn ProductList(
    products: Vec<Product>,
    loading: bool,
    search_term: String,
    on_edit: EventHandler<Product>,
    on_remove: EventHandler<i64>,
) -> Element {
    if loading {
        return rsx! {
            div {
                class: "list-status",
                span { class: "spinner" }
                span { "Loading products..." }
            }
        };
    }

    if products.is_empty() {
        let searching = !search_term.is_empty();
        return rsx! {
            div {
                class: "list-empty",
                div {
                    class: "list-empty-icon",
                    if searching {
                        Icon { icon: FaMagnifyingGlass, width: 28, height: 28 }
                    } else {
                        Icon { icon: FaBoxOpen, width: 28, height: 28 }
                    }
                }
                h3 {
                    if searching { "No products found" } else { "No products yet" }
                }
                p {
                    if searching {
                        "We couldn't find any products matching \"{search_term}\". Try a different search."
                    } else {
                        "Start by adding your first product by clicking the \"New Product\" button."
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "product-grid",
            for product in products {
                ProductItem {
                    key: "{product.id}",
                    product,
                    on_edit,
                    on_remove,
                }
            }
        }
    }
}
