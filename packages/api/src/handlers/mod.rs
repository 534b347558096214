//! Request handlers, one module per page.

pub mod account;
pub mod notes;

use axum::http::header;
use axum::response::IntoResponse;

use crate::error::AppError;

/// `GET /assets/main.css`
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], ui::MAIN_CSS)
}

/// Any route nobody claimed.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
