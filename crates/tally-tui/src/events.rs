//! UI event types.
//!
//! Everything the reducer reacts to. The runtime only sends `Terminal`.
//! `ChangeText` and `Press` express the same intents at widget level, for
//! tests and other callers that drive the app without key codes.

use crossterm::event::Event;

use crate::features::login::LoginField;
use crate::features::menu::Button;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Raw terminal event (key, paste, resize).
    Terminal(Event),
    /// Replace the value of a login field.
    ChangeText { field: LoginField, text: String },
    /// Press a button on the current screen.
    Press(Button),
}
