//! The notes page and the add/delete actions.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde::Deserialize;

use store::{Note, SqlitePool};

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::routes::NOTES_PATH;
use crate::state::AppState;

const MAX_NOTE_LEN: usize = 10_000;

/// Submitted add-note form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NoteForm {
    pub content: String,
}

/// `GET /app/`
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Html<String>, AppError> {
    let notes = Note::list_by_owner(&state.pool, user.id).await?;
    Ok(Html(ui::notes_page(&user.username, &notes, None)))
}

/// `POST /app/notes/add`
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<NoteForm>,
) -> Result<Response, AppError> {
    match validate_note(&form.content) {
        Ok(content) => {
            let note = Note::create(&state.pool, user.id, content).await?;
            tracing::debug!(user_id = user.id, note_id = note.id, "Created note");
            Ok(Redirect::to(NOTES_PATH).into_response())
        }
        Err(err) => {
            let notes = Note::list_by_owner(&state.pool, user.id).await?;
            Ok((
                err.status(),
                Html(ui::notes_page(&user.username, &notes, Some(&err.to_string()))),
            )
                .into_response())
        }
    }
}

/// `POST /app/notes/delete/{id}`
///
/// Always redirects back to the list, whether or not anything was deleted.
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    match delete_owned(&state.pool, &id, user.id).await {
        Ok(()) => tracing::debug!(user_id = user.id, note_id = %id, "Deleted note"),
        Err(AppError::NotFound) => {
            tracing::debug!(user_id = user.id, note_id = %id, "No such note for this user")
        }
        Err(err) => return Err(err),
    }
    Ok(Redirect::to(NOTES_PATH))
}

/// Delete note `id` if `owner_id` owns it; anything else is [`AppError::NotFound`].
async fn delete_owned(pool: &SqlitePool, id: &str, owner_id: i64) -> Result<(), AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::NotFound)?;
    if Note::delete(pool, id, owner_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

fn validate_note(content: &str) -> Result<&str, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("Note must not be empty".to_string()));
    }
    if content.chars().count() > MAX_NOTE_LEN {
        return Err(AppError::Validation(format!(
            "Note must be at most {} characters",
            MAX_NOTE_LEN
        )));
    }
    Ok(content)
}
