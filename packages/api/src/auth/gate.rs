use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use super::session::{CurrentUser, SESSION_USER_KEY};
use crate::routes::LOGIN_PATH;

/// Middleware for the protected routes.
///
/// Anonymous requests are redirected to the login page and never reach the handler.
/// Authenticated ones continue with a [`CurrentUser`] in the request extensions.
pub async fn require_auth(session: Session, mut request: Request, next: Next) -> Response {
    match session.get::<CurrentUser>(SESSION_USER_KEY).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => Redirect::to(LOGIN_PATH).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read session: {}", e);
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}
