//! Registration page view.

use api::Credentials;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{use_session, use_toast};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if username().is_empty() || password().is_empty() || confirm_password().is_empty() {
                toast.warn("Please fill in all fields.");
                return;
            }
            if password() != confirm_password() {
                toast.error("Passwords do not match.");
                return;
            }
            if password().len() < 3 {
                toast.error("Password must be at least 3 characters long.");
                return;
            }

            loading.set(true);
            let credentials = Credentials {
                username: username(),
                password: password(),
            };
            match api::client::register_user(&credentials).await {
                Ok(user) => {
                    session.login(user);
                    toast.success("Registration successful!");
                    nav.push(Route::Products {});
                }
                Err(err) => toast.error(err.to_string()),
            }
            loading.set(false);
        });
    };

    let password_type = if show_password() { "text" } else { "password" };
    let confirm_type = if show_confirm() { "text" } else { "password" };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-panel",
                div {
                    class: "auth-title",
                    h1 { "Create Account" }
                    p { "Sign up to start managing your products" }
                }

                form {
                    class: "card auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        Label { html_for: "register-username", "Username" }
                        Input {
                            id: "register-username",
                            placeholder: "Choose a username",
                            disabled: loading(),
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "register-password", "Password" }
                        div {
                            class: "password-field",
                            Input {
                                id: "register-password",
                                r#type: "{password_type}",
                                placeholder: "Choose a password",
                                disabled: loading(),
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            button {
                                class: "password-toggle",
                                r#type: "button",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() { "Hide" } else { "Show" }
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "register-confirm", "Confirm password" }
                        div {
                            class: "password-field",
                            Input {
                                id: "register-confirm",
                                r#type: "{confirm_type}",
                                placeholder: "Repeat your password",
                                disabled: loading(),
                                value: confirm_password(),
                                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                            }
                            button {
                                class: "password-toggle",
                                r#type: "button",
                                onclick: move |_| show_confirm.set(!show_confirm()),
                                if show_confirm() { "Hide" } else { "Show" }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }

                    p {
                        class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
