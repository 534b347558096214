//! Session data types and the session layer.
//!
//! Sessions live server-side in the `tower_sessions` table of the application
//! database (via [`SqliteStore`]); the browser only holds the opaque id in an
//! HTTP-only cookie. Expired rows are filtered out when a session is loaded and
//! purged for good by a background task started alongside the layer.

use serde::{Deserialize, Serialize};
use time::Duration;
use tokio::task::JoinHandle;
use tower_sessions::cookie::SameSite;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use store::{SqlitePool, StoreError};

use crate::error::AppError;

/// Key for storing the signed-in user in the session.
pub const SESSION_USER_KEY: &str = "user";

/// Identity bound to a session at login and handed to protected handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Session cookie settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Minutes of inactivity after which a session expires.
    pub expiry: i64,
    /// Only send the cookie over HTTPS.
    pub secure: bool,
    /// Seconds between sweeps that delete expired sessions.
    pub cleanup: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry: 60 * 24,
            secure: false,
            cleanup: 60,
        }
    }
}

/// Session layer plus the task purging expired sessions from its store.
pub struct Sessions {
    pub layer: SessionManagerLayer<SqliteStore>,
    /// Runs until aborted.
    pub cleanup: JoinHandle<()>,
}

/// Build the session layer, creating the session table if it does not exist,
/// and start the expired-session sweep.
///
/// Must be called from within a Tokio runtime.
pub async fn session_layer(pool: SqlitePool, config: &SessionConfig) -> Result<Sessions, AppError> {
    let session_store = SqliteStore::new(pool);
    session_store.migrate().await.map_err(StoreError::from)?;

    let period = tokio::time::Duration::from_secs(config.cleanup.max(1));
    let cleanup = tokio::task::spawn({
        let session_store = session_store.clone();
        async move {
            if let Err(e) = session_store.continuously_delete_expired(period).await {
                tracing::error!("Expired session cleanup stopped: {}", e);
            }
        }
    });

    let layer = SessionManagerLayer::new(session_store)
        .with_http_only(true)
        .with_secure(config.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(config.expiry)));

    Ok(Sessions { layer, cleanup })
}
