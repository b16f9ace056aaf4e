//! Screen model: a pure projection of `AppState` into labelled elements.
//!
//! `render` draws a [`Screen`]; tests query it the way a user reads the
//! screen (by test id or by visible text). Exactly one of five screens is
//! built, chosen by the controller's current view.

use tally_core::{AuthError, ViewSnapshot, ViewState};

use crate::features::login::{LoginFocus, LoginState};
use crate::features::menu::Button;
use crate::state::AppState;

pub const USERNAME_TEST_ID: &str = "username-input";
pub const PASSWORD_TEST_ID: &str = "password-input";

/// Mask character for the password field.
const MASK: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading,
    Text,
    /// Validation message under the form.
    Hint,
    /// Single-line text input; `label` names it.
    Input,
    Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub test_id: Option<&'static str>,
    pub label: Option<&'static str>,
    pub text: String,
    /// Focused input or selected button.
    pub active: bool,
    /// Cursor column (in chars) for the focused input.
    pub cursor: Option<usize>,
}

impl Element {
    fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            test_id: None,
            label: None,
            text: text.into(),
            active: false,
            cursor: None,
        }
    }

    fn button(button: Button, active: bool) -> Self {
        Self {
            test_id: button.test_id(),
            active,
            ..Self::new(ElementKind::Button, button.label())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub view: ViewState,
    pub elements: Vec<Element>,
}

impl Screen {
    pub fn build(app: &AppState) -> Self {
        let snapshot = app.snapshot();
        let buttons = app.buttons();
        let selected = app.menu.selected_button(&buttons);

        let mut elements = match snapshot.view {
            ViewState::LoggedOut => login_elements(&app.login, app.nav.last_rejection()),
            _ => body_elements(&snapshot),
        };

        elements.extend(buttons.into_iter().map(|button| {
            let active = match snapshot.view {
                ViewState::LoggedOut => app.login.focus == LoginFocus::Submit,
                _ => Some(button) == selected,
            };
            Element::button(button, active)
        }));

        Self {
            view: snapshot.view,
            elements,
        }
    }

    pub fn by_test_id(&self, test_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.test_id == Some(test_id))
    }

    /// Elements whose text equals `text` exactly.
    pub fn all_by_text(&self, text: &str) -> Vec<&Element> {
        self.elements.iter().filter(|e| e.text == text).collect()
    }

    /// First element whose text contains every fragment, in order.
    pub fn find_text(&self, fragments: &[&str]) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| contains_in_order(&e.text, fragments))
    }

    pub fn button_labels(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.kind == ElementKind::Button)
            .map(|e| e.text.as_str())
            .collect()
    }
}

fn contains_in_order(text: &str, fragments: &[&str]) -> bool {
    let mut rest = text;
    for fragment in fragments {
        match rest.find(fragment) {
            Some(idx) => rest = &rest[idx + fragment.len()..],
            None => return false,
        }
    }
    true
}

fn login_elements(login: &LoginState, rejection: Option<AuthError>) -> Vec<Element> {
    let mut username = Element::new(ElementKind::Input, login.username.value());
    username.test_id = Some(USERNAME_TEST_ID);
    username.label = Some("Username");

    let mut password = Element::new(
        ElementKind::Input,
        MASK.to_string().repeat(login.password.char_len()),
    );
    password.test_id = Some(PASSWORD_TEST_ID);
    password.label = Some("Password");

    match login.focus {
        LoginFocus::Username => {
            username.active = true;
            username.cursor = Some(login.username.cursor());
        }
        LoginFocus::Password => {
            password.active = true;
            password.cursor = Some(login.password.cursor());
        }
        LoginFocus::Submit => {}
    }

    let mut elements = vec![
        Element::new(ElementKind::Heading, "Sign in"),
        username,
        password,
    ];
    if let Some(err) = rejection {
        let hint = capitalize(&err.to_string());
        elements.push(Element::new(ElementKind::Hint, hint));
    }
    elements
}

fn body_elements(snapshot: &ViewSnapshot) -> Vec<Element> {
    let username = snapshot.username.as_deref().unwrap_or_default();
    let count = snapshot.count.unwrap_or_default();

    match snapshot.view {
        ViewState::LoggedOut => Vec::new(),
        ViewState::Welcome => vec![
            Element::new(ElementKind::Heading, format!("Welcome, {username}!")),
            Element::new(ElementKind::Text, format!("Click Count: {count}")),
        ],
        ViewState::Increment | ViewState::Decrement => {
            vec![Element::new(ElementKind::Text, format!("Count: {count}"))]
        }
        ViewState::Summary => vec![
            Element::new(ElementKind::Heading, "Session summary"),
            Element::new(ElementKind::Text, format!("Username: {username}")),
            Element::new(ElementKind::Text, format!("Clicks: {count}")),
        ],
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
