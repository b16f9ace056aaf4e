//! Login form reducer.

use crossterm::event::{KeyCode, KeyEvent};

use super::{LoginFocus, LoginState};

/// What the form asks the app reducer to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    Quit,
}

pub fn handle_key(login: &mut LoginState, key: KeyEvent) -> LoginAction {
    match key.code {
        KeyCode::Esc => LoginAction::Quit,
        KeyCode::Enter => LoginAction::Submit,
        KeyCode::Tab | KeyCode::Down => {
            login.focus = login.focus.next();
            LoginAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            login.focus = login.focus.prev();
            LoginAction::None
        }
        KeyCode::Char(' ') if login.focus == LoginFocus::Submit => LoginAction::Submit,
        _ => {
            if let Some(field) = login.focused_field_mut() {
                field.input(key);
            }
            LoginAction::None
        }
    }
}
