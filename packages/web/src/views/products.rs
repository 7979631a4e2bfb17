//! Product catalog view: search, sort, and owner edit/remove.

use api::{filter_and_sort, remove_by_id, Product, SortOrder};
use dioxus::prelude::*;
use ui::icons::{FaBoxOpen, FaMagnifyingGlass, FaPlus};
use ui::{use_toast, ConfirmDialog, Icon, ProductList};

use crate::Route;

#[component]
pub fn Products() -> Element {
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut sort_order = use_signal(|| SortOrder::Descending);
    let mut pending_remove = use_signal(|| Option::<i64>::None);

    // Load the catalog on mount.
    let _loader = use_resource(move || async move {
        loading.set(true);
        match api::client::get_products().await {
            Ok(list) => products.set(list),
            Err(err) => toast.error(format!("Error loading products: {err}")),
        }
        loading.set(false);
    });

    let on_edit = move |product: Product| {
        nav.push(Route::EditProduct { id: product.id });
    };

    // Two-step confirmation: remember the id, then delete only on confirm.
    let on_remove = move |id: i64| {
        pending_remove.set(Some(id));
    };

    let on_confirm_remove = move |_| {
        let Some(id) = pending_remove() else {
            return;
        };
        pending_remove.set(None);
        spawn(async move {
            match api::client::remove_product(id).await {
                Ok(()) => {
                    // Drop the id from the cached list only after the
                    // server confirmed the delete.
                    products.set(remove_by_id(products(), id));
                    toast.success("Product removed successfully!");
                }
                Err(err) => toast.error(format!("Error removing product: {err}")),
            }
        });
    };

    let count = products.read().len();
    let count_label = if count == 1 {
        "product found"
    } else {
        "products found"
    };
    let visible = filter_and_sort(&products.read(), &search_term.read(), sort_order());

    rsx! {
        div {
            class: "view",

            div {
                class: "view-header",
                div {
                    class: "view-heading",
                    span { class: "view-icon", Icon { icon: FaBoxOpen, width: 22, height: 22 } }
                    div {
                        h1 { "Products" }
                        p { "{count} {count_label}" }
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::NewProduct {}); },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "New Product" }
                }
            }

            div {
                class: "card filter-bar",
                div {
                    class: "search-box",
                    span { class: "search-icon", Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } }
                    input {
                        class: "input-field search-input",
                        r#type: "text",
                        placeholder: "Search products or users...",
                        value: search_term(),
                        oninput: move |evt| search_term.set(evt.value()),
                    }
                }
                select {
                    class: "input-field sort-select",
                    value: if sort_order() == SortOrder::Ascending { "asc" } else { "desc" },
                    onchange: move |evt| {
                        let order = if evt.value() == "asc" {
                            SortOrder::Ascending
                        } else {
                            SortOrder::Descending
                        };
                        sort_order.set(order);
                    },
                    option { value: "desc", "Newest first" }
                    option { value: "asc", "Oldest first" }
                }
            }

            ProductList {
                products: visible,
                loading: loading(),
                search_term: search_term(),
                on_edit,
                on_remove,
            }

            if pending_remove().is_some() {
                ConfirmDialog {
                    message: "Do you want to remove this product?",
                    on_confirm: on_confirm_remove,
                    on_cancel: move |_| pending_remove.set(None),
                }
            }
        }
    }
}
