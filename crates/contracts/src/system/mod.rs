pub mod session;

pub use session::{CurrentUser, CurrentUserData, Role};
