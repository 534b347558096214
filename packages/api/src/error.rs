//! # Request errors
//!
//! [`AppError`] is the single error type returned by request handlers. Variants fall
//! into two groups:
//!
//! - **User-facing**: [`Validation`](AppError::Validation),
//!   [`UsernameTaken`](AppError::UsernameTaken),
//!   [`InvalidCredentials`](AppError::InvalidCredentials) and
//!   [`NotFound`](AppError::NotFound). Handlers usually catch these themselves and
//!   re-render the form with the message inline.
//! - **Infrastructure**: store, session, hashing and task failures. These end the
//!   request. They are logged, and the client only sees a generic 500 page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Not found")]
    NotFound,
    #[error("store error: {0}")]
    Store(StoreError),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("{0}")]
    Hash(String),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UsernameTaken => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Session(_) | AppError::Hash(_) | AppError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the message may be shown to the user as-is.
    pub fn is_user_facing(&self) -> bool {
        !self.status().is_server_error()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken => AppError::UsernameTaken,
            err => AppError::Store(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if self.is_user_facing() {
            self.to_string()
        } else {
            tracing::error!("Request failed: {}", self);
            "Something went wrong. Please try again later.".to_string()
        };

        (status, Html(ui::error_page(status.as_u16(), &message))).into_response()
    }
}
