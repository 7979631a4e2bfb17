//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_session, AuthState, SessionContext, SessionProvider};

mod toast;
pub use toast::{use_toast, Toast, ToastKind, ToastProvider, Toasts};

mod confirm;
pub use confirm::ConfirmDialog;

mod product_form;
pub use product_form::{validate_draft, ImageFile, ProductForm, ProductSubmission};

mod product_item;
pub use product_item::ProductItem;

mod product_list;
pub use product_list::ProductList;
