//! Page shell shared by every view.

use dioxus::prelude::*;

use crate::MAIN_CSS_PATH;

/// `<head>` and `<body>` of every page: stylesheet plus an optional signed-in header.
///
/// The surrounding `<html>` element is added by `render`.
#[component]
pub fn Layout(
    title: String,
    #[props(!optional)] username: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} · Notes" }
            link { rel: "stylesheet", href: MAIN_CSS_PATH }
        }
        body {
            header {
                class: "topbar",
                span { class: "brand", "Notes" }
                if let Some(username) = username {
                    nav {
                        span { class: "who", "Signed in as {username}" }
                        a { class: "logout", href: "/app/logout", "Log out" }
                    }
                }
            }
            main {
                class: "container",
                {children}
            }
        }
    }
}
