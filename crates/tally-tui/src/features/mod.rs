//! Feature slices for the TUI (state/update per slice).

pub mod login;
pub mod menu;
