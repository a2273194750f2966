//! Modal dialogs for the TUI

pub mod confirm;
pub mod form;
pub mod help;
pub mod login;

pub use form::{FormKind, FormState};
pub use login::LoginFormState;
