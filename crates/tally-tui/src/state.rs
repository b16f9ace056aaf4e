//! Application state composition.
//!
//! ```text
//! AppState
//! ├── nav: NavigationController  (view, session, counter)
//! ├── login: LoginState          (form fields and focus)
//! ├── menu: MenuState            (button selection)
//! └── should_quit: bool
//! ```
//!
//! The controller is the only holder of the username and counter. The TUI
//! slices keep presentation state only (text being typed, which button is
//! highlighted) and read everything else through snapshots.

use tally_core::config::Config;
use tally_core::{NavigationController, ViewSnapshot};

use crate::features::login::LoginState;
use crate::features::menu::{self, Button, MenuState};

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Navigation controller (single source of truth for view and counter).
    pub nav: NavigationController,
    /// Login form state.
    pub login: LoginState,
    /// Button selection on the current screen.
    pub menu: MenuState,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            nav: NavigationController::new(),
            login: LoginState::new(config.prefill_username()),
            menu: MenuState::default(),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.nav.snapshot()
    }

    /// Buttons present on the current screen.
    pub fn buttons(&self) -> Vec<Button> {
        menu::buttons_for(self.nav.view())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
