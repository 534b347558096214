use thiserror::Error;

/// Errors produced by the user and note stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with the requested username already exists.
    #[error("username is already taken")]
    UsernameTaken,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;
