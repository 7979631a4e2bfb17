//! Edit-product view. Loads the product by id, then reuses the shared form.

use api::Product;
use dioxus::prelude::*;
use ui::{use_toast, ProductForm, ProductSubmission};

use crate::Route;

#[component]
pub fn EditProduct(id: i64) -> Element {
    let mut toast = use_toast();
    let nav = use_navigator();
    let mut product = use_signal(|| Option::<Product>::None);

    let _loader = use_resource(move || async move {
        match api::client::get_product_by_id(id).await {
            Ok(Some(found)) => product.set(Some(found)),
            Ok(None) => {
                toast.error("Product not found");
                nav.push(Route::Products {});
            }
            Err(err) => {
                toast.error(format!("Error loading product: {err}"));
                nav.push(Route::Products {});
            }
        }
    });

    let handle_submit = move |submission: ProductSubmission| {
        let Some(current) = product() else {
            return;
        };
        spawn(async move {
            let updated = Product {
                name: submission.draft.name.clone(),
                price: submission.draft.price,
                ..current
            };
            match api::client::edit_product(id, &updated).await {
                Ok(_) => {
                    if let Some(image) = submission.image {
                        if let Err(err) =
                            api::client::upload_product_image(id, &image.name, image.bytes).await
                        {
                            toast.error(format!("Error uploading image: {err}"));
                        }
                    }
                    toast.success("Product updated!");
                    nav.push(Route::Products {});
                }
                Err(err) => toast.error(format!("Error updating product: {err}")),
            }
        });
    };

    rsx! {
        div {
            class: "view view-narrow",
            h2 { "Edit Product" }
            if let Some(p) = product() {
                ProductForm {
                    initial: p,
                    submit_label: "Confirm",
                    on_submit: handle_submit,
                    on_cancel: move |_| { nav.push(Route::Products {}); },
                }
            }
        }
    }
}
