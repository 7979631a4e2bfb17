//! Login page view.

use api::Credentials;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{use_session, use_toast};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if username().is_empty() || password().is_empty() {
                toast.warn("Please fill in all fields");
                return;
            }

            loading.set(true);
            let credentials = Credentials {
                username: username(),
                password: password(),
            };
            match api::client::login_user(&credentials).await {
                Ok(user) => {
                    session.login(user);
                    toast.success("Login successful!");
                    nav.push(Route::Products {});
                }
                Err(err) => toast.error(err.to_string()),
            }
            loading.set(false);
        });
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-panel",
                div {
                    class: "auth-title",
                    h1 { "ProductHub" }
                    p { "Sign in to your account to continue" }
                }

                form {
                    class: "card auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        Label { html_for: "login-username", "Username" }
                        Input {
                            id: "login-username",
                            placeholder: "Enter your username",
                            disabled: loading(),
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "login-password", "Password" }
                        div {
                            class: "password-field",
                            Input {
                                id: "login-password",
                                r#type: "{password_type}",
                                placeholder: "Enter your password",
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

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }

                    p {
                        class: "auth-switch",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Sign up here" }
                    }
                }
            }
        }
    }
}
