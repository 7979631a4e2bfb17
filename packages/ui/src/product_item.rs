//! Product card with favorite toggle and owner actions.

use api::{FavoriteAdd, Product};
use dioxus::prelude::*;

use crate::icons::{FaBoxOpen, FaEllipsisVertical, FaHeart, FaPen, FaTrashCan, FaUser};
use crate::{use_session, use_toast, Icon};

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[component]
pub fn ProductItem(
    product: Product,
    on_edit: EventHandler<Product>,
    on_remove: EventHandler<i64>,
) -> Element {
    let session = use_session();
    let mut toast = use_toast();
    let mut favorited = use_signal(|| false);
    let mut show_menu = use_signal(|| false);

    let product_id = product.id;
    let user_id = session.current().map(|u| u.id);
    let is_owner = user_id == Some(product.user_id);

    // Initial favorite state, checked per product per viewing user.
    let _check = use_resource(move || async move {
        let Some(user_id) = user_id else {
            return;
        };
        match api::client::check_favorite(user_id, product_id).await {
            Ok(state) => favorited.set(state),
            Err(err) => tracing::warn!("favorite check failed: {err}"),
        }
    });

    let toggle_favorite = move |_| async move {
        let Some(user_id) = user_id else {
            toast.error("You need to be logged in to favorite products");
            return;
        };

        // Flip local state only after the server confirms.
        if favorited() {
            match api::client::remove_favorite(user_id, product_id).await {
                Ok(()) => {
                    favorited.set(false);
                    toast.success("Product removed from favorites!");
                }
                Err(err) => toast.error(format!("Error managing favorite: {err}")),
            }
        } else {
            match api::client::add_favorite(user_id, product_id).await {
                Ok(FavoriteAdd::Added) => {
                    favorited.set(true);
                    toast.success("Product added to favorites!");
                }
                Ok(FavoriteAdd::AlreadyFavorited) => {
                    favorited.set(true);
                    toast.info("Product is already in favorites");
                }
                Err(err) => toast.error(format!("Error managing favorite: {err}")),
            }
        }
    };

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
                    div {
                        class: "product-image-placeholder",
                        Icon { icon: FaBoxOpen, width: 48, height: 48 }
                    }
                }

                div {
                    class: "product-overlay",
                    button {
                        class: if favorited() { "icon-btn favorite-btn favorited" } else { "icon-btn favorite-btn" },
                        onclick: toggle_favorite,
                        Icon { icon: FaHeart, width: 18, height: 18 }
                    }

                    if is_owner {
                        div {
                            class: "owner-menu",
                            button {
                                class: "icon-btn",
                                onclick: move |_| show_menu.set(!show_menu()),
                                Icon { icon: FaEllipsisVertical, width: 18, height: 18 }
                            }
                            if show_menu() {
                                div {
                                    class: "owner-menu-dropdown",
                                    button {
                                        class: "menu-item",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| {
                                                show_menu.set(false);
                                                on_edit.call(product.clone());
                                            }
                                        },
                                        Icon { icon: FaPen, width: 14, height: 14 }
                                        span { "Edit" }
                                    }
                                    button {
                                        class: "menu-item menu-item--danger",
                                        onclick: move |_| {
                                            show_menu.set(false);
                                            on_remove.call(product_id);
                                        },
                                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                                        span { "Remove" }
                                    }
                                }
                            }
                        }
                    }
                }

                if is_owner {
                    span { class: "owner-badge", "My product" }
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
                span { class: "product-price", "{format_price(product.price)}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(19.9), "$19.90");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(1234.567), "$1234.57");
    }
}
