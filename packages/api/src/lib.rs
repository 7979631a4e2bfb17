//! # API crate — REST client for the ProductHub backend
//!
//! Thin request/response wrappers over the remote service. Every function
//! issues exactly one HTTP request: no retries, no timeouts, no caching.
//! Success returns the parsed response body; any non-2xx response becomes an
//! [`ApiError::Server`] carrying the server's message text (or a fallback),
//! and connection/parse failures become [`ApiError::Network`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | One function per REST operation: products CRUD + image upload, user register/login/update/photo, favorites check/add/remove/list |
//! | [`catalog`] | Pure transforms over the cached product list: search filter, id sort, removal |
//! | [`error`] | [`ApiError`] taxonomy |
//! | [`models`] | Wire types (`Product`, drafts, credentials) |
//!
//! The base URL comes from the `PRODUCTHUB_API_URL` compile-time environment
//! variable, falling back to the hosted deployment.

pub mod catalog;
pub mod client;
pub mod error;
pub mod models;

pub use catalog::{filter_and_sort, remove_by_id, SortOrder};
pub use client::FavoriteAdd;
pub use error::ApiError;
pub use models::{Credentials, Product, ProductDraft, ProductOwner, UserUpdate};
pub use store::Session;

const DEFAULT_API_BASE: &str = "https://product-back-latest.onrender.com";

/// Base URL of the remote service, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("PRODUCTHUB_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// URL serving a product's image, for use in `img src`.
pub fn product_image_url(product_id: i64) -> String {
    format!("{}/api/products/{product_id}/image", api_base())
}
