//! # User accounts
//!
//! A [`User`] is a row of the `users` table. Accounts are created at registration and
//! never updated or removed afterwards. The `username` column carries a `UNIQUE`
//! constraint, so two concurrent registrations for the same name cannot both succeed:
//! the loser's insert fails and is reported as [`StoreError::UsernameTaken`].
//!
//! Only the Argon2 PHC string of a password is ever stored here. Producing and
//! checking that string is the caller's job.

use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

use crate::{StoreError, StoreResult};

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Insert a new account.
    pub async fn create(pool: &SqlitePool, username: &str, password_hash: &str) -> StoreResult<User> {
        let user = sqlx::query_as(
            "INSERT INTO users (username, password_hash) VALUES (?, ?)
             RETURNING id, username, password_hash, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::UsernameTaken,
            e => StoreError::Database(e),
        })?;

        Ok(user)
    }

    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as(
            "SELECT id, username, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
