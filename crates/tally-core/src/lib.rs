//! Core Tally library (auth gate, navigation controller, config, logging).

pub mod auth;
pub mod config;
pub mod intent;
pub mod logging;
pub mod nav;

pub use auth::{AuthError, Credentials, Session};
pub use intent::{Intent, IntentKind, IntentParseError};
pub use nav::{CounterState, NavigationController, SharedController, ViewSnapshot, ViewState};
