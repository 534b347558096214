//! Authentication: password hashing, the session binding, and the gate in front of
//! every `/app` route that needs a signed-in user.

mod gate;
mod password;
mod session;

pub use gate::require_auth;
pub use password::{hash_password, hash_password_blocking, verify_password, verify_password_blocking};
pub use session::{session_layer, CurrentUser, SessionConfig, Sessions, SESSION_USER_KEY};
