mod layout;
pub use layout::Layout;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod notes;
pub use notes::{NoteItem, NotesView};

mod error;
pub use error::{ErrorBanner, ErrorView};
