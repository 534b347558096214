//! Notes page: the signed-in user's notes and the add-note form.

use dioxus::prelude::*;
use store::Note;

use super::{ErrorBanner, Layout};

#[component]
pub fn NotesView(
    username: String,
    notes: Vec<Note>,
    #[props(!optional)] error: Option<String>,
) -> Element {
    rsx! {
        Layout {
            title: "My notes",
            username: Some(username.clone()),
            section {
                class: "card",
                h1 { "{username}'s notes" }

                if let Some(err) = error {
                    ErrorBanner { message: err }
                }

                form {
                    class: "add-note",
                    method: "post",
                    action: "/app/notes/add",
                    textarea {
                        name: "content",
                        rows: "3",
                        placeholder: "Write a note...",
                    }
                    button { r#type: "submit", "Add note" }
                }

                if notes.is_empty() {
                    p { class: "empty", "No notes yet." }
                } else {
                    ul {
                        class: "notes",
                        for note in notes.iter() {
                            NoteItem {
                                key: "{note.id}",
                                id: note.id,
                                content: note.content.clone(),
                                created: note.created_at.format("%Y-%m-%d %H:%M").to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single note with its delete button.
#[component]
pub fn NoteItem(id: i64, content: String, created: String) -> Element {
    rsx! {
        li {
            class: "note",
            p { class: "content", "{content}" }
            div {
                class: "meta",
                time { "{created}" }
                form {
                    method: "post",
                    action: "/app/notes/delete/{id}",
                    button { class: "danger", r#type: "submit", "Delete" }
                }
            }
        }
    }
}
