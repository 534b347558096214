//! Database models.

mod note;
mod user;

pub use note::Note;
pub use user::User;
