//! # Session model and typed profile patch
//!
//! Defines the locally cached identity of the logged-in user and the patch
//! structure used to update it. These types are `Serialize + Deserialize`
//! with camelCase field names so they match the REST API's wire format.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Session`] | The current user: id, username, optional email, birthdate and photo. The photo is a base64 payload that lives only in memory — [`Session::without_photo`] produces the copy that is persisted. |
//! | [`UserPatch`] | An explicit list of updatable profile fields. [`UserPatch::apply`] merges it onto a base session: `Some` fields replace, `None` fields keep the base value. |

use serde::{Deserialize, Serialize};

/// The locally cached identity of the logged-in user.
///
/// At most one instance exists per browser tab. Created on successful
/// login or registration, replaced on profile edit, cleared on logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    /// Base64-encoded profile photo. Kept in memory only; never persisted,
    /// to bound local storage size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Session {
    /// The copy that goes into local storage: identical except for the photo.
    pub fn without_photo(&self) -> Session {
        Session {
            photo: None,
            ..self.clone()
        }
    }
}

/// Updatable profile fields.
///
/// `Some` fields replace the base value, `None` fields preserve it. The
/// username and id are not updatable through the profile flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub birthdate: Option<String>,
    pub photo: Option<String>,
}

impl UserPatch {
    /// Merge this patch onto `base`, producing the updated session.
    pub fn apply(&self, base: &Session) -> Session {
        Session {
            id: base.id,
            username: base.username.clone(),
            email: self.email.clone().or_else(|| base.email.clone()),
            birthdate: self.birthdate.clone().or_else(|| base.birthdate.clone()),
            photo: self.photo.clone().or_else(|| base.photo.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_session() -> Session {
        Session {
            id: 7,
            username: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
            birthdate: None,
            photo: Some("aGVsbG8=".to_string()),
        }
    }

    #[test]
    fn test_without_photo_strips_only_photo() {
        let session = base_session();
        let stripped = session.without_photo();

        assert!(stripped.photo.is_none());
        assert_eq!(stripped.id, session.id);
        assert_eq!(stripped.username, session.username);
        assert_eq!(stripped.email, session.email);
        assert_eq!(stripped.birthdate, session.birthdate);
    }

    #[test]
    fn test_patch_some_overrides_none_preserves() {
        let session = base_session();
        let patch = UserPatch {
            email: Some("new@example.com".to_string()),
            birthdate: Some("1990-01-01".to_string()),
            photo: None,
        };

        let updated = patch.apply(&session);
        assert_eq!(updated.email.as_deref(), Some("new@example.com"));
        assert_eq!(updated.birthdate.as_deref(), Some("1990-01-01"));
        // Untouched fields carry over
        assert_eq!(updated.photo, session.photo);
        assert_eq!(updated.id, 7);
        assert_eq!(updated.username, "alice");
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let session = base_session();
        assert_eq!(UserPatch::default().apply(&session), session);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{"id":3,"username":"bob","email":"b@x.io","birthdate":"2000-05-04T00:00:00"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, 3);
        assert_eq!(session.username, "bob");
        assert_eq!(session.birthdate.as_deref(), Some("2000-05-04T00:00:00"));
        assert!(session.photo.is_none());
    }
}
