//! Login form feature.
//!
//! Owns the two text fields and the focus ring. Credentials only leave this
//! slice as a `SubmitLogin` intent.

pub mod field;
mod state;
mod update;

pub use field::TextField;
pub use state::{LoginField, LoginFocus, LoginState};
pub use update::{LoginAction, handle_key};
