//! Authentication
//!
//! `session` holds the token pair in memory; `login` obtains and forgets it.
//! Persistence goes through [`crate::storage::SessionStore`].

pub mod login;
pub mod session;

pub use login::{auth_error_message, login, logout};
pub use session::{Session, SessionContext};
