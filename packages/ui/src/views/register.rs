//! Registration page view.

use dioxus::prelude::*;

use super::{ErrorBanner, Layout};

/// Register page component.
#[component]
pub fn RegisterView(#[props(!optional)] error: Option<String>, username: String) -> Element {
    rsx! {
        Layout {
            title: "Register",
            username: None,
            section {
                class: "card",
                h1 { "Create account" }

                if let Some(err) = error {
                    ErrorBanner { message: err }
                }

                form {
                    method: "post",
                    action: "/app/register",
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
                        autocomplete: "new-password",
                    }
                    label { r#for: "confirm", "Confirm password" }
                    input {
                        id: "confirm",
                        r#type: "password",
                        name: "confirm",
                        autocomplete: "new-password",
                    }
                    button { r#type: "submit", "Register" }
                }

                p {
                    class: "hint",
                    "Already have an account? "
                    a { href: "/app/login", "Log in" }
                }
            }
        }
    }
}
