use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider};
use views::{
    EditProduct, EditProfile, Favorites, Login, NewProduct, Products, Register, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Shell)]
        #[route("/products")]
        Products {},
        #[route("/new-product")]
        NewProduct {},
        #[route("/edit-product/:id")]
        EditProduct { id: i64 },
        #[route("/favorites")]
        Favorites {},
        #[route("/edit-profile")]
        EditProfile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}
