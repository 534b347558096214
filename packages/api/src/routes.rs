use axum::middleware;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use store::SqlitePool;

use crate::auth::{self, require_auth, SessionConfig};
use crate::error::AppError;
use crate::handlers::{account, notes, not_found, stylesheet};
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/app/login";
pub const NOTES_PATH: &str = "/app/";

/// All routes, without the session layer.
///
/// Everything merged from `protected` sits behind [`require_auth`].
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(NOTES_PATH, get(notes::list))
        .route("/app", get(notes::list))
        .route("/app/logout", get(account::logout))
        .route("/app/notes/add", post(notes::create))
        .route("/app/notes/delete/{id}", post(notes::delete))
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .route("/", get(|| async { Redirect::to(LOGIN_PATH) }))
        .route(LOGIN_PATH, get(account::login_page).post(account::login))
        .route(
            "/app/register",
            get(account::register_page).post(account::register),
        )
        .route(ui::MAIN_CSS_PATH, get(stylesheet))
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
}

/// A ready-to-serve application.
pub struct App {
    pub router: Router,
    /// Expired-session sweep; abort it on shutdown.
    pub session_cleanup: JoinHandle<()>,
}

/// The complete application: routes, sessions backed by `pool`, request tracing.
pub async fn app(pool: SqlitePool, session: &SessionConfig) -> Result<App, AppError> {
    let sessions = auth::session_layer(pool.clone(), session).await?;

    let router = router(AppState::new(pool))
        .layer(sessions.layer)
        .layer(TraceLayer::new_for_http());

    Ok(App {
        router,
        session_cleanup: sessions.cleanup,
    })
}
