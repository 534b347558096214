//! # Store crate — relational persistence for users and notes
//!
//! Everything the web layer needs to talk to the database lives here:
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`connect`] / [`connect_in_memory`] | Open a SQLite pool and apply the embedded migrations |
//! | [`User`] | Account records: create, lookup by username or id |
//! | [`Note`] | Owner-scoped text records: create, list, delete |
//! | [`StoreError`] | Error type shared by every operation in this crate |
//!
//! Every note query takes the owner's id as a parameter. There is no way to read or
//! delete a note through this crate without naming its owner.

mod error;
mod models;
mod pool;

pub use error::{StoreError, StoreResult};
pub use models::{Note, User};
pub use pool::{connect, connect_in_memory, MIGRATOR};

pub use sqlx::{Error as SqlxError, SqlitePool};
