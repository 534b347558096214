use dioxus::prelude::*;

use super::Layout;

/// Inline error message shown above a form.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error", "{message}" }
    }
}

/// Full page for a failed request.
#[component]
pub fn ErrorView(status: u16, message: String) -> Element {
    rsx! {
        Layout {
            title: "Error {status}",
            username: None,
            section {
                class: "card",
                h1 { "{status}" }
                p { "{message}" }
                a { href: "/app/", "Back to your notes" }
            }
        }
    }
}
