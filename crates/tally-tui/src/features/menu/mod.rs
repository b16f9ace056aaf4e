//! Button row shown on every screen.
//!
//! Which buttons exist is derived from the controller's transition table, so
//! a screen only offers presses that do something.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally_core::nav::transitions;
use tally_core::{Intent, IntentKind, ViewState};

/// Test id of the login submit control.
pub const SUBMIT_TEST_ID: &str = "button";

/// A pressable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Login,
    Increment,
    Decrement,
    Summary,
    Back,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Login => "Login",
            Button::Increment => "Increment",
            Button::Decrement => "Decrement",
            Button::Summary => "Summary",
            Button::Back => "Back to Welcome",
        }
    }

    pub fn test_id(self) -> Option<&'static str> {
        match self {
            Button::Login => Some(SUBMIT_TEST_ID),
            _ => None,
        }
    }

    /// Intent sent on press. `Login` carries form data and is built by the
    /// login slice instead.
    pub fn intent(self) -> Option<Intent> {
        match self {
            Button::Login => None,
            Button::Increment => Intent::nav(ViewState::Increment),
            Button::Decrement => Intent::nav(ViewState::Decrement),
            Button::Summary => Intent::nav(ViewState::Summary),
            Button::Back => Intent::nav(ViewState::Welcome),
        }
    }

    fn shortcut(self) -> Option<char> {
        match self {
            Button::Login => None,
            Button::Increment => Some('i'),
            Button::Decrement => Some('d'),
            Button::Summary => Some('s'),
            Button::Back => Some('b'),
        }
    }

    fn for_intent(kind: IntentKind) -> Self {
        match kind {
            IntentKind::SubmitLogin => Button::Login,
            IntentKind::PressIncrement => Button::Increment,
            IntentKind::PressDecrement => Button::Decrement,
            IntentKind::PressSummary => Button::Summary,
            IntentKind::PressBack => Button::Back,
        }
    }
}

/// Buttons rendered on `view`, in display order.
pub fn buttons_for(view: ViewState) -> Vec<Button> {
    transitions::available_intents(view)
        .into_iter()
        .map(Button::for_intent)
        .collect()
}

/// Selection state of the button row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn selected_button(self, buttons: &[Button]) -> Option<Button> {
        buttons.get(self.selected).copied()
    }

    fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }
}

/// Handles a key on a signed-in screen. Returns the pressed button, if any.
pub fn handle_key(menu: &mut MenuState, buttons: &[Button], key: KeyEvent) -> Option<Button> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Right => {
            menu.select_next(buttons.len());
            None
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left => {
            menu.select_prev(buttons.len());
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => menu.selected_button(buttons),
        KeyCode::Esc => buttons.iter().copied().find(|b| *b == Button::Back),
        KeyCode::Char(ch) => {
            let ch = ch.to_ascii_lowercase();
            buttons.iter().copied().find(|b| b.shortcut() == Some(ch))
        }
        _ => None,
    }
}
