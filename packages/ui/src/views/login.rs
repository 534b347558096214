//! Login page view with username/password form.

use dioxus::prelude::*;

use super::{ErrorBanner, Layout};

/// Login page component.
#[component]
pub fn LoginView(#[props(!optional)] error: Option<String>, username: String) -> Element {
    rsx! {
        Layout {
            title: "Log in",
            username: None,
            section {
                class: "card",
                h1 { "Log in" }

                if let Some(err) = error {
                    ErrorBanner { message: err }
                }

                form {
                    method: "post",
                    action: "/app/login",
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        name: "username",
                        autocomplete: "username",
                        value: "{username}",
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        name: "password",
                        autocomplete: "current-password",
                    }
                    button { r#type: "submit", "Log in" }
                }

                p {
                    class: "hint",
                    "No account yet? "
                    a { href: "/app/register", "Register" }
                }
            }
        }
    }
}
