//! Profile editing: email, birthdate, and photo upload.
//!
//! Email and birthdate go through the JSON update endpoint; the photo goes
//! through the multipart endpoint and is then patched into the in-memory
//! session as base64 (the persisted session never carries it).

use api::UserUpdate;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dioxus::prelude::*;
use store::UserPatch;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{use_session, use_toast, ImageFile};

use crate::Route;

/// The date input wants `YYYY-MM-DD`; the service may append a time part.
fn date_only(value: &str) -> String {
    value.split('T').next().unwrap_or_default().to_string()
}

#[component]
pub fn EditProfile() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut email = use_signal(|| {
        session
            .current()
            .and_then(|u| u.email)
            .unwrap_or_default()
    });
    let mut birthdate = use_signal(|| {
        session
            .current()
            .and_then(|u| u.birthdate)
            .map(|b| date_only(&b))
            .unwrap_or_default()
    });
    let mut photo = use_signal(|| Option::<ImageFile>::None);
    let mut preview = use_signal(|| Option::<String>::None);

    let current_photo = session
        .current()
        .and_then(|u| u.photo)
        .map(|p| format!("data:image/*;base64,{p}"));

    let handle_photo = move |evt: FormEvent| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        spawn(async move {
            let Some(file_name) = file_engine.files().into_iter().next() else {
                return;
            };
            if let Some(bytes) = file_engine.read_file(&file_name).await {
                preview.set(Some(format!(
                    "data:image/*;base64,{}",
                    BASE64.encode(&bytes)
                )));
                photo.set(Some(ImageFile {
                    name: file_name,
                    bytes,
                }));
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(user) = session.current() else {
                return;
            };

            let normalized_email = email().trim().to_string();
            let birth = birthdate();

            if normalized_email.is_empty() && birth.is_empty() && photo().is_none() {
                toast.warn("Please fill at least one field");
                return;
            }

            if !normalized_email.is_empty() || !birth.is_empty() {
                let update = UserUpdate {
                    username: user.username.clone(),
                    email: (!normalized_email.is_empty()).then(|| normalized_email.clone()),
                    birthdate: (!birth.is_empty()).then(|| birth.clone()),
                };
                if api::client::update_user(&update).await.is_err() {
                    toast.error("Error updating profile");
                    return;
                }
                session.update(UserPatch {
                    email: update.email.clone(),
                    birthdate: update.birthdate.clone(),
                    photo: None,
                });
            }

            if let Some(file) = photo() {
                match api::client::update_user_photo(user.id, &file.name, file.bytes.clone())
                    .await
                {
                    Ok(()) => session.update(UserPatch {
                        photo: Some(BASE64.encode(&file.bytes)),
                        ..UserPatch::default()
                    }),
                    Err(_) => {
                        toast.error("Error updating profile");
                        return;
                    }
                }
            }

            toast.success("Profile updated successfully");
        });
    };

    rsx! {
        div {
            class: "view view-narrow",
            h2 { "Edit Profile" }

            if let Some(src) = current_photo {
                img { class: "photo-preview", src: "{src}", alt: "Current photo" }
            }

            form {
                class: "card profile-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    Label { html_for: "profile-photo", "Photo" }
                    input {
                        id: "profile-photo",
                        class: "file-input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_photo,
                    }
                    if let Some(src) = preview() {
                        img { class: "photo-preview", src: "{src}", alt: "New photo preview" }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "profile-email", "Email" }
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "profile-birthdate", "Birthdate" }
                    Input {
                        id: "profile-birthdate",
                        r#type: "date",
                        value: birthdate(),
                        oninput: move |evt: FormEvent| birthdate.set(evt.value()),
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        "Save changes"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { nav.push(Route::Products {}); },
                        "Back"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::date_only;

    #[test]
    fn test_date_only_trims_time_suffix() {
        assert_eq!(date_only("2000-05-04T00:00:00"), "2000-05-04");
        assert_eq!(date_only("2000-05-04"), "2000-05-04");
        assert_eq!(date_only(""), "");
    }
}
