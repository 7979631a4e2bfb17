//! Wire types for the product and user endpoints, camelCase on the wire.

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub user_id: i64,
    /// Set when the product has an uploaded image; the bytes themselves are
    /// served from the image endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ProductOwner>,
}

/// The owning user embedded in a product record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductOwner {
    pub username: String,
}

/// Fields for creating a product.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

/// Login/registration payload.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Profile update payload. The username identifies the account; absent
/// optional fields are left unchanged server-side.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_from_service_payload() {
        let json = r#"{
            "id": 12,
            "name": "Lamp",
            "price": 19.9,
            "userId": 3,
            "image": "lamp.png",
            "user": {"username": "alice"}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 12);
        assert_eq!(product.user_id, 3);
        assert_eq!(product.user.unwrap().username, "alice");
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let json = r#"{"id": 1, "name": "Chair", "price": 5.0, "userId": 2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.image.is_none());
        assert!(product.user.is_none());
    }

    #[test]
    fn test_user_update_omits_absent_fields() {
        let update = UserUpdate {
            username: "alice".to_string(),
            email: Some("a@x.io".to_string()),
            birthdate: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"email\""));
        assert!(!json.contains("birthdate"));
    }
}
