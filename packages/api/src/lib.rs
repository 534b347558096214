//! # API crate — HTTP surface of the notes application
//!
//! Turns HTTP requests into store operations and answers with a rendered page or a
//! redirect. The router is assembled in [`app`], which also starts the background
//! sweep of expired sessions:
//!
//! | Method | Path | Access | Handler |
//! |--------|------|--------|---------|
//! | GET | `/` | public | redirect to `/app/login` |
//! | GET, POST | `/app/login` | public | `handlers::account::{login_page, login}` |
//! | GET, POST | `/app/register` | public | `handlers::account::{register_page, register}` |
//! | GET | `/app/logout` | protected | `handlers::account::logout` |
//! | GET | `/app/` | protected | `handlers::notes::list` |
//! | POST | `/app/notes/add` | protected | `handlers::notes::create` |
//! | POST | `/app/notes/delete/{id}` | protected | `handlers::notes::delete` |
//! | GET | `/assets/main.css` | public | stylesheet |
//!
//! "Protected" routes go through [`auth::require_auth`], which redirects anonymous
//! requests to the login page and otherwise hands the handler an
//! [`auth::CurrentUser`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2 password hashing, session layer, the auth gate |
//! | [`error`] | [`AppError`] and its HTML rendering |
//! | `handlers` | One module per page |

pub mod auth;
pub mod error;
mod handlers;
mod routes;
mod state;

pub use auth::{CurrentUser, SessionConfig};
pub use error::AppError;
pub use routes::{app, router, App, LOGIN_PATH, NOTES_PATH};
pub use state::AppState;
