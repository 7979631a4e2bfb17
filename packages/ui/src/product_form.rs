//! Create/edit form for a product.
//!
//! Validation runs before any network call: both fields are required and
//! the price must parse to a positive number. Invalid input produces a
//! warning toast and the submit handler is never invoked.

use api::{Product, ProductDraft};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::use_toast;

/// A picked image file, already read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// What the form hands to its submit handler.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSubmission {
    pub draft: ProductDraft,
    pub image: Option<ImageFile>,
}

/// Check the raw form fields and build the draft.
pub fn validate_draft(name: &str, price: &str) -> Result<ProductDraft, &'static str> {
    let name = name.trim();
    let price = price.trim();
    if name.is_empty() || price.is_empty() {
        return Err("Please fill in all fields");
    }
    let price: f64 = price.parse().map_err(|_| "Invalid price")?;
    if price <= 0.0 {
        return Err("Invalid price");
    }
    Ok(ProductDraft {
        name: name.to_string(),
        price,
    })
}

#[component]
pub fn ProductForm(
    /// Pre-filled product when editing; `None` for the create form.
    initial: Option<Product>,
    #[props(default = "Save".to_string())] submit_label: String,
    on_submit: EventHandler<ProductSubmission>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut toast = use_toast();
    let mut name = use_signal(|| initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let mut price = use_signal(|| {
        initial
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_default()
    });
    let mut image = use_signal(|| Option::<ImageFile>::None);

    let handle_file = move |evt: FormEvent| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        spawn(async move {
            let Some(file_name) = file_engine.files().into_iter().next() else {
                return;
            };
            if let Some(bytes) = file_engine.read_file(&file_name).await {
                image.set(Some(ImageFile {
                    name: file_name,
                    bytes,
                }));
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match validate_draft(&name(), &price()) {
            Ok(draft) => {
                on_submit.call(ProductSubmission {
                    draft,
                    image: image(),
                });
            }
            Err(msg) => toast.warn(msg),
        }
    };

    rsx! {
        form {
            class: "product-form",
            onsubmit: handle_submit,

            div {
                class: "form-field",
                Label { html_for: "product-name", "Name" }
                Input {
                    id: "product-name",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "product-price", "Price" }
                Input {
                    id: "product-price",
                    r#type: "number",
                    placeholder: "Price",
                    value: price(),
                    oninput: move |evt: FormEvent| price.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "product-image", "Image (optional)" }
                input {
                    id: "product-image",
                    class: "file-input",
                    r#type: "file",
                    accept: "image/*",
                    onchange: handle_file,
                }
                if let Some(file) = image() {
                    span { class: "file-name", "{file.name}" }
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "{submit_label}"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Back"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_rejected() {
        assert_eq!(validate_draft("", "10"), Err("Please fill in all fields"));
        assert_eq!(validate_draft("   ", "10"), Err("Please fill in all fields"));
    }

    #[test]
    fn test_missing_price_is_rejected() {
        assert_eq!(validate_draft("Lamp", ""), Err("Please fill in all fields"));
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        assert_eq!(validate_draft("Lamp", "0"), Err("Invalid price"));
        assert_eq!(validate_draft("Lamp", "-3.5"), Err("Invalid price"));
    }

    #[test]
    fn test_unparseable_price_is_rejected() {
        assert_eq!(validate_draft("Lamp", "ten"), Err("Invalid price"));
    }

    #[test]
    fn test_valid_fields_build_a_draft() {
        let draft = validate_draft("  Lamp ", "19.90").unwrap();
        assert_eq!(draft.name, "Lamp");
        assert_eq!(draft.price, 19.90);
    }
}
