use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Inline yes/no prompt shown before destructive actions.
///
/// The destructive call must only be issued from `on_confirm`; cancel
/// leaves everything untouched.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "confirm-overlay",
            div {
                class: "confirm-card",
                p { class: "confirm-message", "{message}" }
                div {
                    class: "confirm-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
