//! One async function per REST operation.
//!
//! Each call is fire-once: build the request, await the response, map
//! non-2xx to [`ApiError::Server`] with the body text (or a fallback
//! message), parse 2xx bodies with serde.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Credentials, Product, ProductDraft, UserUpdate};
use crate::{api_base, Session};

/// Outcome of an add-favorite call. A conflict (the product is already
/// favorited) is reported as an outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteAdd {
    Added,
    AlreadyFavorited,
}

fn http() -> reqwest::Client {
    reqwest::Client::new()
}

fn products_url() -> String {
    format!("{}/api/Products", api_base())
}

fn users_url() -> String {
    format!("{}/api/Users", api_base())
}

fn favorites_url() -> String {
    format!("{}/api/favorites", api_base())
}

/// Read the body of a failed response and build the error, falling back to
/// `fallback` when the server sent nothing useful.
async fn server_error(res: reqwest::Response, fallback: &str) -> ApiError {
    let text = res.text().await.unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        ApiError::Server(fallback.to_string())
    } else {
        ApiError::Server(text.to_string())
    }
}

/// Fetch the full product collection.
pub async fn get_products() -> Result<Vec<Product>, ApiError> {
    let res = http().get(products_url()).send().await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Error loading products").await);
    }
    Ok(res.json().await?)
}

/// Look up a product by id.
///
/// The service has no single-product endpoint, so this fetches the whole
/// collection and filters client-side. O(n) per lookup; acceptable only
/// because catalogs are small.
pub async fn get_product_by_id(id: i64) -> Result<Option<Product>, ApiError> {
    let products = get_products().await?;
    Ok(products.into_iter().find(|p| p.id == id))
}

/// Create a product owned by the current user.
pub async fn create_product(draft: &ProductDraft) -> Result<Product, ApiError> {
    let res = http().post(products_url()).json(draft).send().await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Product could not be created").await);
    }
    Ok(res.json().await?)
}

/// Update an existing product. The service may reply with an empty body.
pub async fn edit_product(id: i64, product: &Product) -> Result<Option<Product>, ApiError> {
    let res = http()
        .put(format!("{}/{id}", products_url()))
        .json(product)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Failed to update product").await);
    }
    let text = res.text().await?;
    Ok(parse_updated_product(&text))
}

/// The update endpoint's 2xx body is either the updated record, empty, or
/// free-form text. Anything that is not a product record is tolerated; a
/// non-empty body that fails to parse is logged before being discarded.
fn parse_updated_product(body: &str) -> Option<Product> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(product) => Some(product),
        Err(err) => {
            tracing::warn!("discarding unparseable update response body: {err}");
            None
        }
    }
}

/// Delete a product.
pub async fn remove_product(id: i64) -> Result<(), ApiError> {
    let res = http()
        .delete(format!("{}/{id}", products_url()))
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Failed to remove product").await);
    }
    Ok(())
}

/// Upload a product image as multipart form data.
pub async fn upload_product_image(
    id: i64,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<(), ApiError> {
    let part = Part::bytes(bytes).file_name(filename.to_string());
    let form = Form::new().part("file", part);
    let res = http()
        .post(format!("{}/api/products/{id}/image", api_base()))
        .multipart(form)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Failed to upload image").await);
    }
    Ok(())
}

/// Register a new account. Returns the created user record.
pub async fn register_user(credentials: &Credentials) -> Result<Session, ApiError> {
    let res = http()
        .post(format!("{}/register", users_url()))
        .json(credentials)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "User could not be created").await);
    }
    Ok(res.json().await?)
}

/// Log in. Returns the authenticated user record, photo included.
pub async fn login_user(credentials: &Credentials) -> Result<Session, ApiError> {
    let res = http()
        .post(format!("{}/login", users_url()))
        .json(credentials)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Username or password invalid").await);
    }
    Ok(res.json().await?)
}

/// Update profile fields for the user named in the payload.
pub async fn update_user(update: &UserUpdate) -> Result<(), ApiError> {
    let res = http()
        .put(format!("{}/update", users_url()))
        .json(update)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Failed to update user").await);
    }
    Ok(())
}

/// Upload a new profile photo as multipart form data (`userId` + `file`).
pub async fn update_user_photo(
    user_id: i64,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<(), ApiError> {
    let part = Part::bytes(bytes).file_name(filename.to_string());
    let form = Form::new()
        .text("userId", user_id.to_string())
        .part("file", part);
    let res = http()
        .put(format!("{}/update-photo", users_url()))
        .multipart(form)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Failed to upload photo").await);
    }
    Ok(())
}

/// Whether `product_id` is favorited by `user_id`.
pub async fn check_favorite(user_id: i64, product_id: i64) -> Result<bool, ApiError> {
    let res = http()
        .get(format!(
            "{}/user/{user_id}/product/{product_id}/check",
            favorites_url()
        ))
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Error checking favorite").await);
    }
    Ok(res.json().await?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteBody {
    user_id: i64,
    product_id: i64,
}

/// Mark a product as favorited by a user.
pub async fn add_favorite(user_id: i64, product_id: i64) -> Result<FavoriteAdd, ApiError> {
    let res = http()
        .post(favorites_url())
        .json(&FavoriteBody {
            user_id,
            product_id,
        })
        .send()
        .await?;
    if res.status().is_success() {
        return Ok(FavoriteAdd::Added);
    }
    let text = res.text().await.unwrap_or_default();
    classify_add_failure(&text)
}

/// An "already favorited" rejection means the relation exists, which is the
/// state the caller wanted; everything else is a real error.
fn classify_add_failure(body: &str) -> Result<FavoriteAdd, ApiError> {
    if body.contains("already favorited") {
        Ok(FavoriteAdd::AlreadyFavorited)
    } else if body.trim().is_empty() {
        Err(ApiError::Server("Error adding favorite".to_string()))
    } else {
        Err(ApiError::Server(body.trim().to_string()))
    }
}

/// Remove a product from a user's favorites.
pub async fn remove_favorite(user_id: i64, product_id: i64) -> Result<(), ApiError> {
    let res = http()
        .delete(format!(
            "{}/user/{user_id}/product/{product_id}",
            favorites_url()
        ))
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Error removing favorite").await);
    }
    Ok(())
}

/// List the products a user has favorited.
pub async fn get_favorites(user_id: i64) -> Result<Vec<Product>, ApiError> {
    let res = http()
        .get(format!("{}/user/{user_id}", favorites_url()))
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(server_error(res, "Error loading favorites").await);
    }
    Ok(res.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_body_is_success() {
        let outcome = classify_add_failure("Product already favorited by this user");
        assert_eq!(outcome.unwrap(), FavoriteAdd::AlreadyFavorited);
    }

    #[test]
    fn test_other_failure_text_is_surfaced() {
        let err = classify_add_failure("Product not found").unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_empty_failure_body_gets_fallback() {
        let err = classify_add_failure("  ").unwrap_err();
        assert_eq!(err.to_string(), "Error adding favorite");
    }

    #[test]
    fn test_empty_update_body_is_tolerated() {
        assert_eq!(parse_updated_product(""), None);
        assert_eq!(parse_updated_product("  \n"), None);
    }

    #[test]
    fn test_unparseable_update_body_is_discarded() {
        assert_eq!(parse_updated_product("Product updated"), None);
    }

    #[test]
    fn test_update_body_with_record_is_returned() {
        let body = r#"{"id": 4, "name": "Lamp", "price": 12.5, "userId": 2}"#;
        let product = parse_updated_product(body).unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.name, "Lamp");
    }

    #[test]
    fn test_favorite_body_wire_format() {
        let body = FavoriteBody {
            user_id: 4,
            product_id: 9,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"userId":4,"productId":9}"#);
    }
}
