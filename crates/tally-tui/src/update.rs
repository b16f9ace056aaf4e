//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tally_core::Intent;
use tracing::trace;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{login, menu};
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ChangeText { field, text } => {
            if !app.nav.view().is_signed_in() {
                app.login.field_mut(field).set_text(&text);
            }
            vec![]
        }
        UiEvent::Press(button) => {
            press(app, button);
            vec![]
        }
    }
}

// ============================================================================
// Intent Dispatch
// ============================================================================

fn press(app: &mut AppState, button: menu::Button) {
    if !app.buttons().contains(&button) {
        trace!(?button, view = %app.nav.view(), "button not on screen");
        return;
    }

    match button.intent() {
        Some(intent) => dispatch(app, intent),
        None => submit_login(app),
    }
}

fn submit_login(app: &mut AppState) {
    dispatch(app, app.login.submit_intent());

    if app.nav.view().is_signed_in() {
        app.login.clear();
    } else if let Some(err) = app.nav.last_rejection() {
        app.login.focus_rejected(err);
    }
}

/// Sends an intent to the controller, resetting the button selection when
/// the screen changes.
fn dispatch(app: &mut AppState, intent: Intent) {
    let before = app.nav.view();
    app.nav.dispatch(intent);
    if app.nav.view() != before {
        app.menu.reset();
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            if !app.nav.view().is_signed_in()
                && let Some(field) = app.login.focused_field_mut()
            {
                field.insert_str(&text);
            }
            vec![]
        }
        // Resize only needs a redraw, which the runtime does after every event.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if !app.nav.view().is_signed_in() {
        return match login::handle_key(&mut app.login, key) {
            login::LoginAction::None => vec![],
            login::LoginAction::Submit => {
                press(app, menu::Button::Login);
                vec![]
            }
            login::LoginAction::Quit => vec![UiEffect::Quit],
        };
    }

    let buttons = app.buttons();
    if let Some(button) = menu::handle_key(&mut app.menu, &buttons, key) {
        press(app, button);
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use tally_core::ViewState;

    use super::*;
    use crate::features::login::{LoginField, LoginFocus};
    use crate::features::menu::Button;
    use crate::view::{PASSWORD_TEST_ID, Screen, USERNAME_TEST_ID};

    fn change_text(app: &mut AppState, field: LoginField, text: &str) {
        update(
            app,
            UiEvent::ChangeText {
                field,
                text: text.to_string(),
            },
        );
    }

    fn press(app: &mut AppState, button: Button) {
        update(app, UiEvent::Press(button));
    }

    fn key(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn login_as(app: &mut AppState, username: &str, password: &str) {
        change_text(app, LoginField::Username, username);
        change_text(app, LoginField::Password, password);
        press(app, Button::Login);
    }

    fn logged_in() -> AppState {
        let mut app = AppState::default();
        login_as(&mut app, "testuser", "password123");
        app
    }

    fn screen(app: &AppState) -> Screen {
        Screen::build(app)
    }

    // ------------------------------------------------------------------
    // Login screen
    // ------------------------------------------------------------------

    #[test]
    fn test_login_screen_shown_initially() {
        let app = AppState::default();
        let screen = screen(&app);
        assert!(screen.by_test_id(USERNAME_TEST_ID).is_some());
        assert!(screen.by_test_id(PASSWORD_TEST_ID).is_some());
        assert!(screen.by_test_id("button").is_some());
    }

    #[test]
    fn test_empty_username_does_not_navigate() {
        let mut app = AppState::default();
        change_text(&mut app, LoginField::Password, "password123");
        press(&mut app, Button::Login);
        assert!(screen(&app).find_text(&["Welcome"]).is_none());
        assert_eq!(app.login.focus, LoginFocus::Username);
    }

    #[test]
    fn test_empty_password_does_not_navigate() {
        let mut app = AppState::default();
        change_text(&mut app, LoginField::Username, "testuser");
        press(&mut app, Button::Login);
        assert!(screen(&app).find_text(&["Welcome"]).is_none());
        assert_eq!(app.login.focus, LoginFocus::Password);
        assert_eq!(app.login.username.value(), "testuser");
    }

    #[test]
    fn test_successful_login_shows_welcome_and_clears_form() {
        let app = logged_in();
        let screen = screen(&app);
        assert!(screen.find_text(&["Welcome", "testuser"]).is_some());
        assert!(app.login.username.is_empty());
        assert!(app.login.password.is_empty());
    }

    // ------------------------------------------------------------------
    // Welcome screen
    // ------------------------------------------------------------------

    #[test]
    fn test_welcome_shows_zero_count_and_nav_buttons() {
        let app = logged_in();
        let screen = screen(&app);
        assert!(screen.find_text(&["Click Count:", "0"]).is_some());
        assert_eq!(screen.all_by_text("Increment").len(), 1);
        assert_eq!(screen.all_by_text("Decrement").len(), 1);
        assert_eq!(screen.all_by_text("Summary").len(), 1);
    }

    // ------------------------------------------------------------------
    // Increment / Decrement screens
    // ------------------------------------------------------------------

    #[test]
    fn test_increment_screen() {
        let mut app = logged_in();
        press(&mut app, Button::Increment);
        let view = screen(&app);
        assert_eq!(view.view, ViewState::Increment);
        assert!(view.find_text(&["Count:", "0"]).is_some());
        assert_eq!(view.button_labels(), vec!["Increment", "Back to Welcome"]);

        press(&mut app, Button::Increment);
        assert!(screen(&app).find_text(&["Count:", "1"]).is_some());

        press(&mut app, Button::Back);
        assert!(screen(&app).find_text(&["Welcome", "testuser"]).is_some());
    }

    #[test]
    fn test_decrement_screen() {
        let mut app = logged_in();
        press(&mut app, Button::Decrement);
        let view = screen(&app);
        assert!(view.find_text(&["Count:"]).is_some());
        assert_eq!(view.button_labels(), vec!["Decrement", "Back to Welcome"]);

        press(&mut app, Button::Decrement);
        assert!(screen(&app).find_text(&["Count:", "-1"]).is_some());

        press(&mut app, Button::Back);
        assert!(screen(&app).find_text(&["Welcome", "testuser"]).is_some());
    }

    // ------------------------------------------------------------------
    // Summary screen
    // ------------------------------------------------------------------

    #[test]
    fn test_summary_screen_has_only_back_button() {
        let mut app = logged_in();
        press(&mut app, Button::Summary);
        let view = screen(&app);
        assert!(view.find_text(&["Username:", "testuser"]).is_some());
        assert!(view.find_text(&["Clicks:"]).is_some());
        assert_eq!(view.all_by_text("Back to Welcome").len(), 1);
        assert!(view.all_by_text("Increment").is_empty());
        assert!(view.all_by_text("Decrement").is_empty());

        // Buttons that are not on screen cannot be pressed.
        press(&mut app, Button::Increment);
        assert_eq!(app.nav.view(), ViewState::Summary);

        press(&mut app, Button::Back);
        assert!(screen(&app).find_text(&["Welcome", "testuser"]).is_some());
    }

    // ------------------------------------------------------------------
    // Data persistence across navigation
    // ------------------------------------------------------------------

    #[test]
    fn test_increments_persist_back_on_welcome() {
        let mut app = logged_in();
        assert!(screen(&app).find_text(&["Click Count:", "0"]).is_some());

        press(&mut app, Button::Increment);
        assert!(screen(&app).find_text(&["Count:", "0"]).is_some());
        press(&mut app, Button::Increment);
        press(&mut app, Button::Increment);
        assert!(screen(&app).find_text(&["Count:", "2"]).is_some());

        press(&mut app, Button::Back);
        assert!(screen(&app).find_text(&["Click Count:", "2"]).is_some());

        press(&mut app, Button::Summary);
        let view = screen(&app);
        assert!(view.find_text(&["Username:", "testuser"]).is_some());
        assert!(view.find_text(&["Clicks:", "2"]).is_some());
        assert!(view.all_by_text("Increment").is_empty());
        assert!(view.all_by_text("Decrement").is_empty());
    }

    #[test]
    fn test_summary_after_three_increments() {
        let mut app = AppState::default();
        login_as(&mut app, "myuser", "pass");
        press(&mut app, Button::Increment);
        for _ in 0..3 {
            press(&mut app, Button::Increment);
        }
        press(&mut app, Button::Back);
        press(&mut app, Button::Summary);

        let view = screen(&app);
        assert!(view.find_text(&["Username:", "myuser"]).is_some());
        assert!(view.find_text(&["Clicks:", "3"]).is_some());
    }

    #[test]
    fn test_decrement_reduces_shared_counter() {
        let mut app = logged_in();
        press(&mut app, Button::Increment);
        press(&mut app, Button::Increment);
        press(&mut app, Button::Increment);
        press(&mut app, Button::Back);
        press(&mut app, Button::Decrement);
        assert!(screen(&app).find_text(&["Count:", "2"]).is_some());
        press(&mut app, Button::Decrement);
        press(&mut app, Button::Back);
        assert!(screen(&app).find_text(&["Click Count:", "1"]).is_some());
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    #[test]
    fn test_keyboard_login_and_navigation() {
        let mut app = AppState::default();
        for ch in "testuser".chars() {
            key(&mut app, KeyCode::Char(ch));
        }
        key(&mut app, KeyCode::Tab);
        for ch in "pw".chars() {
            key(&mut app, KeyCode::Char(ch));
        }
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.view(), ViewState::Welcome);

        // Enter on the first button (Increment), then increment twice.
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.view(), ViewState::Increment);
        assert_eq!(app.menu.selected, 0);
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Char('i'));
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.view(), ViewState::Welcome);
        assert_eq!(app.snapshot().count, Some(2));

        key(&mut app, KeyCode::Char('s'));
        assert_eq!(app.nav.view(), ViewState::Summary);
    }

    #[test]
    fn test_selection_resets_on_view_change() {
        let mut app = logged_in();
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Right);
        assert_eq!(app.menu.selected, 2);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.view(), ViewState::Summary);
        assert_eq!(app.menu.selected, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = AppState::default();
        assert_eq!(key(&mut app, KeyCode::Esc), vec![UiEffect::Quit]);

        let mut app = logged_in();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            update(&mut app, UiEvent::Terminal(Event::Key(ctrl_c))),
            vec![UiEffect::Quit]
        );
        // Esc on Welcome has no Back button and does not quit.
        assert!(key(&mut app, KeyCode::Esc).is_empty());
    }

    #[test]
    fn test_paste_goes_into_focused_field() {
        let mut app = AppState::default();
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("testuser\n".to_string())),
        );
        assert_eq!(app.login.username.value(), "testuser");
    }

    #[test]
    fn test_change_text_ignored_after_login() {
        let mut app = logged_in();
        change_text(&mut app, LoginField::Username, "intruder");
        assert!(app.login.username.is_empty());
        assert_eq!(app.snapshot().username.as_deref(), Some("testuser"));
    }
}
