//! Registration, login and logout.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use store::{SqlitePool, User};

use crate::auth::{self, CurrentUser, SESSION_USER_KEY};
use crate::error::AppError;
use crate::routes::{LOGIN_PATH, NOTES_PATH};
use crate::state::AppState;

const MAX_USERNAME_LEN: usize = 32;
const MAX_PASSWORD_LEN: usize = 128;

/// Submitted login form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Submitted registration form. `confirm` is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm: String,
}

/// `GET /app/login`
pub async fn login_page() -> Html<String> {
    Html(ui::login_page(None, ""))
}

/// `POST /app/login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim();

    match authenticate(&state.pool, username, form.password).await {
        Ok(user) => {
            // Fresh id on privilege change.
            session.cycle_id().await?;
            session
                .insert(
                    SESSION_USER_KEY,
                    CurrentUser {
                        id: user.id,
                        username: user.username.clone(),
                    },
                )
                .await?;

            tracing::info!(user_id = user.id, "User {} logged in", user.username);
            Ok(Redirect::to(NOTES_PATH).into_response())
        }
        Err(err) if err.is_user_facing() => {
            tracing::debug!("Rejected login for {:?}: {}", username, err);
            Ok((err.status(), Html(ui::login_page(Some(&err.to_string()), username))).into_response())
        }
        Err(err) => Err(err),
    }
}

/// `GET /app/register`
pub async fn register_page() -> Html<String> {
    Html(ui::register_page(None, ""))
}

/// `POST /app/register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim().to_string();

    match create_account(&state.pool, &username, form.password, &form.confirm).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Registered user {}", user.username);
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
        Err(err) if err.is_user_facing() => Ok((
            err.status(),
            Html(ui::register_page(Some(&err.to_string()), &username)),
        )
            .into_response()),
        Err(err) => Err(err),
    }
}

/// `GET /app/logout`
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    Ok(Redirect::to(LOGIN_PATH))
}

/// Check a username/password pair.
///
/// Unknown usernames and wrong passwords both come back as
/// [`AppError::InvalidCredentials`].
async fn authenticate(pool: &SqlitePool, username: &str, password: String) -> Result<User, AppError> {
    // Every failure path spends one hash, as a real check would.
    if username.is_empty() || password.is_empty() {
        auth::hash_password_blocking(password).await?;
        return Err(AppError::InvalidCredentials);
    }

    let Some(user) = User::find_by_username(pool, username).await? else {
        auth::hash_password_blocking(password).await?;
        return Err(AppError::InvalidCredentials);
    };

    if !auth::verify_password_blocking(password, user.password_hash.clone()).await? {
        return Err(AppError::InvalidCredentials);
    }

    Ok(user)
}

async fn create_account(
    pool: &SqlitePool,
    username: &str,
    password: String,
    confirm: &str,
) -> Result<User, AppError> {
    validate_registration(username, &password, confirm)?;
    let password_hash = auth::hash_password_blocking(password).await?;
    Ok(User::create(pool, username, &password_hash).await?)
}

/// `username` is expected to be trimmed already.
fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<(), AppError> {
    if username.is_empty() {
        return Err(AppError::Validation("Username is required".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::Validation(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(AppError::Validation(
            "Username must not contain spaces".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LEN
        )));
    }
    if !confirm.is_empty() && confirm != password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    Ok(())
}
