//! # UI crate — server-rendered HTML pages
//!
//! Pages are ordinary Dioxus components. Nothing here runs in a browser: each page is
//! rendered once per request into a complete HTML document with [`dioxus_ssr`], and
//! the handlers in the `api` crate send that string back as the response body.
//! Text and attribute values are escaped by the renderer, so note content and
//! usernames can be interpolated directly.
//!
//! | Function | Page |
//! |----------|------|
//! | [`login_page`] | Login form, optional error banner |
//! | [`register_page`] | Registration form, optional error banner |
//! | [`notes_page`] | The signed-in user's notes plus the add-note form |
//! | [`error_page`] | Generic status page (404, 500, ...) |
//!
//! [`MAIN_CSS`] is the single stylesheet, served by the web layer at [`MAIN_CSS_PATH`].

use dioxus::prelude::*;

pub mod views;

use views::{ErrorView, LoginView, NotesView, RegisterView};

pub use store::Note;

/// Stylesheet shared by every page.
pub const MAIN_CSS: &str = include_str!("../assets/main.css");

/// Path the stylesheet is served from.
pub const MAIN_CSS_PATH: &str = "/assets/main.css";

/// Render an element tree into a complete HTML document.
fn render(element: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(element)
    )
}

/// Login form. `username` pre-fills the username field after a failed attempt.
pub fn login_page(error: Option<&str>, username: &str) -> String {
    render(rsx! {
        LoginView {
            error: error.map(str::to_string),
            username: username.to_string(),
        }
    })
}

/// Registration form. `username` pre-fills the username field after a rejected attempt.
pub fn register_page(error: Option<&str>, username: &str) -> String {
    render(rsx! {
        RegisterView {
            error: error.map(str::to_string),
            username: username.to_string(),
        }
    })
}

/// Notes list for `username`, oldest first, with the add-note form.
pub fn notes_page(username: &str, notes: &[Note], error: Option<&str>) -> String {
    render(rsx! {
        NotesView {
            username: username.to_string(),
            notes: notes.to_vec(),
            error: error.map(str::to_string),
        }
    })
}

pub fn error_page(status: u16, message: &str) -> String {
    render(rsx! {
        ErrorView {
            status: status,
            message: message.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn note(id: i64, content: &str) -> Note {
        Note {
            id,
            owner_id: 1,
            content: content.to_string(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_login_page_renders_form() {
        let html = login_page(None, "");
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("action=\"/app/login\""));
        assert!(html.contains("name=\"username\""));
        assert!(html.contains("name=\"password\""));
        assert!(html.contains("href=\"/app/register\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_login_page_shows_error_and_keeps_username() {
        let html = login_page(Some("Invalid username or password"), "alice");
        assert!(html.contains("Invalid username or password"));
        assert!(html.contains("value=\"alice\""));
    }

    #[test]
    fn test_register_page_renders_form() {
        let html = register_page(Some("Username is already taken"), "bob");
        assert!(html.contains("action=\"/app/register\""));
        assert!(html.contains("name=\"confirm\""));
        assert!(html.contains("Username is already taken"));
        assert!(html.contains("value=\"bob\""));
    }

    #[test]
    fn test_notes_page_lists_notes() {
        let notes = vec![note(1, "buy milk"), note(2, "call mom")];
        let html = notes_page("alice", &notes, None);
        assert!(html.contains("alice"));
        assert!(html.contains("buy milk"));
        assert!(html.contains("call mom"));
        assert!(html.contains("action=\"/app/notes/delete/1\""));
        assert!(html.contains("action=\"/app/notes/delete/2\""));
        assert!(html.contains("action=\"/app/notes/add\""));
        assert!(html.find("buy milk").unwrap() < html.find("call mom").unwrap());
    }

    #[test]
    fn test_notes_page_empty() {
        let html = notes_page("alice", &[], None);
        assert!(html.contains("No notes yet"));
        assert!(!html.contains("/app/notes/delete/"));
    }

    #[test]
    fn test_note_content_is_escaped() {
        let notes = vec![note(7, "<script>alert(1)</script>")];
        let html = notes_page("<b>eve</b>", &notes, None);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>eve</b>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_page() {
        let html = error_page(404, "Page not found");
        assert!(html.contains("404"));
        assert!(html.contains("Page not found"));
    }
}
