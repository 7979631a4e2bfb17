//! Create-product view.

use dioxus::prelude::*;
use ui::{use_toast, ProductForm, ProductSubmission};

use crate::Route;

#[component]
pub fn NewProduct() -> Element {
    let mut toast = use_toast();
    let nav = use_navigator();

    let handle_submit = move |submission: ProductSubmission| {
        spawn(async move {
            match api::client::create_product(&submission.draft).await {
                Ok(created) => {
                    if let Some(image) = submission.image {
                        if let Err(err) =
                            api::client::upload_product_image(created.id, &image.name, image.bytes)
                                .await
                        {
                            toast.error(format!("Error uploading image: {err}"));
                        }
                    }
                    toast.success("New product added!");
                    nav.push(Route::Products {});
                }
                Err(err) => {
                    let message = err.to_string();
                    if message.contains("price") {
                        toast.error("Invalid price");
                    } else {
                        toast.error(format!("Error: {message}"));
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "view view-narrow",
            h2 { "Add New Product" }
            ProductForm {
                submit_label: "Add",
                on_submit: handle_submit,
                on_cancel: move |_| { nav.push(Route::Products {}); },
            }
        }
    }
}
