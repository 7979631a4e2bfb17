//! Protected-route shell: navigation gate plus the app header.

use dioxus::prelude::*;
use ui::icons::{FaBoxOpen, FaHeart, FaPlus, FaRightFromBracket, FaUser};
use ui::{use_session, Icon};

use crate::Route;

/// Wraps every protected route. Evaluated synchronously on navigation:
/// no session means an immediate replace-navigation to the login view.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if session.current().is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "page-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let username = session
        .current()
        .map(|u| u.username)
        .unwrap_or_default();

    let handle_logout = move |_| {
        session.logout();
        nav.push(Route::Login {});
    };

    let nav_class = |target: Route| {
        if route == target {
            "nav-link active".to_string()
        } else {
            "nav-link".to_string()
        }
    };
    let products_class = nav_class(Route::Products {});
    let new_product_class = nav_class(Route::NewProduct {});
    let favorites_class = nav_class(Route::Favorites {});
    let profile_class = nav_class(Route::EditProfile {});

    rsx! {
        header {
            class: "header",
            div {
                class: "header-inner",
                Link {
                    class: "brand",
                    to: Route::Products {},
                    span { class: "brand-mark", Icon { icon: FaBoxOpen, width: 18, height: 18 } }
                    span { class: "brand-name", "ProductHub" }
                }

                nav {
                    class: "header-nav",
                    Link {
                        class: products_class,
                        to: Route::Products {},
                        Icon { icon: FaBoxOpen, width: 14, height: 14 }
                        span { "Products" }
                    }
                    Link {
                        class: new_product_class,
                        to: Route::NewProduct {},
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "New Product" }
                    }
                    Link {
                        class: favorites_class,
                        to: Route::Favorites {},
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        span { "Favorites" }
                    }
                    Link {
                        class: profile_class,
                        to: Route::EditProfile {},
                        Icon { icon: FaUser, width: 14, height: 14 }
                        span { "Profile" }
                    }
                }

                div {
                    class: "header-user",
                    span { class: "header-greeting", "Hello, {username}" }
                    button {
                        class: "logout-btn",
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        span { "Sign Out" }
                    }
                }
            }
        }
    }
}
