//! Favorites view: the products the current user has hearted.

use api::{remove_by_id, Product};
use dioxus::prelude::*;
use ui::icons::{FaHeart, FaUser};
use ui::{use_session, use_toast, Icon};

#[component]
pub fn Favorites() -> Element {
    let session = use_session();
    let mut toast = use_toast();

    let mut favorites = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);

    let user_id = session.current().map(|u| u.id);

    let _loader = use_resource(move || async move {
        let Some(user_id) = user_id else {
            loading.set(false);
            return;
        };
        loading.set(true);
        match api::client::get_favorites(user_id).await {
            Ok(list) => favorites.set(list),
            Err(err) => toast.error(format!("Error loading favorites: {err}")),
        }
        loading.set(false);
    });

    let remove_favorite = move |product_id: i64| {
        let Some(user_id) = user_id else {
            return;
        };
        spawn(async move {
            match api::client::remove_favorite(user_id, product_id).await {
                Ok(()) => {
                    favorites.set(remove_by_id(favorites(), product_id));
                    toast.success("Product removed from favorites!");
                }
                Err(err) => toast.error(format!("Error removing favorite: {err}")),
            }
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "list-status",
                span { class: "spinner" }
                span { "Loading favorites..." }
            }
        };
    }

    let count = favorites.read().len();
    let count_label = if count == 1 {
        "favorite product"
    } else {
        "favorite products"
    };

    rsx! {
        div {
            class: "view",

            div {
                class: "view-heading",
                span { class: "view-icon view-icon--accent", Icon { icon: FaHeart, width: 22, height: 22 } }
                div {
                    h1 { "My Favorites" }
                    p { "{count} {count_label}" }
                }
            }

            if favorites.read().is_empty() {
                div {
                    class: "list-empty",
                    div { class: "list-empty-icon", Icon { icon: FaHeart, width: 28, height: 28 } }
                    h3 { "No favorites yet" }
                    p { "Explore products and add your favorites by clicking the heart icon." }
                }
            } else {
                div {
                    class: "product-grid",
                    for product in favorites.read().iter().cloned() {
                        FavoriteCard {
                            key: "{product.id}",
                            product,
                            on_remove: remove_favorite,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FavoriteCard(product: Product, on_remove: EventHandler<i64>) -> Element {
    let product_id = product.id;
    let owner_name = product
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_else(|| "Unknown user".to_string());

    rsx! {
        div {
            class: "card product-card",
            div {
                class: "product-image",
                if product.image.is_some() {
                    img {
                        src: api::product_image_url(product_id),
                        alt: "{product.name}",
                    }
                } else {
                    div { class: "product-image-placeholder" }
                }
                button {
                    class: "icon-btn favorite-btn favorited",
                    onclick: move |_| on_remove.call(product_id),
                    Icon { icon: FaHeart, width: 18, height: 18 }
                }
            }
            div {
                class: "product-info",
                h3 { class: "product-name", "{product.name}" }
                div {
                    class: "product-owner",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "by {owner_name}" }
                }
                span { class: "product-price", {format!("${:.2}", product.price)} }
            }
        }
    }
}
