//! Navigation controller: the single owner of session, counter and view.
//!
//! ## State
//!
//! ```text
//! NavigationController
//! ├── view: ViewState              (which screen is current)
//! ├── signed_in: Option<SignedIn>  (None until a login succeeds)
//! │   ├── session: Session
//! │   └── counter: CounterState    (one instance, read by every screen)
//! └── last_rejection: Option<AuthError>
//! ```
//!
//! `view != LoggedOut` implies `signed_in.is_some()`. Screens never hold a
//! copy of the counter; they read it through [`ViewSnapshot`].

mod shared;
pub mod transitions;

use std::fmt;

use serde::Serialize;
pub use shared::SharedController;
use tracing::{debug, info, trace};

use crate::auth::{AuthError, Session};
use crate::intent::Intent;

/// The screen that is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    LoggedOut,
    Welcome,
    Increment,
    Decrement,
    Summary,
}

impl ViewState {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewState::LoggedOut => "logged_out",
            ViewState::Welcome => "welcome",
            ViewState::Increment => "increment",
            ViewState::Decrement => "decrement",
            ViewState::Summary => "summary",
        }
    }

    pub fn is_signed_in(self) -> bool {
        !matches!(self, ViewState::LoggedOut)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Click counter shared by all signed-in screens.
///
/// Starts at zero. Decrement has no floor; both directions saturate at the
/// `i64` limits instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
}

impl CounterState {
    pub fn value(self) -> i64 {
        self.value
    }

    fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}

/// Read-only projection handed to the render layer.
///
/// `username` and `count` are `None` exactly when `view` is `LoggedOut`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub view: ViewState,
    pub username: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug)]
struct SignedIn {
    session: Session,
    counter: CounterState,
}

/// State machine deciding which screen is visible.
#[derive(Debug, Default)]
pub struct NavigationController {
    view: ViewState,
    signed_in: Option<SignedIn>,
    last_rejection: Option<AuthError>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one intent and returns the resulting snapshot.
    ///
    /// Total: pairs missing from [`transitions::TRANSITIONS`] and rejected
    /// logins leave every field unchanged.
    pub fn dispatch(&mut self, intent: Intent) -> ViewSnapshot {
        let from = self.view;
        let Some(to) = transitions::next_view(from, intent.kind()) else {
            trace!(view = %from, ?intent, "intent ignored");
            return self.snapshot();
        };

        match intent {
            Intent::SubmitLogin(credentials) => {
                match credentials.authenticate() {
                    Ok(session) => {
                        info!(username = %session.username, "session started");
                        self.signed_in = Some(SignedIn {
                            session,
                            counter: CounterState::default(),
                        });
                        self.last_rejection = None;
                    }
                    Err(err) => {
                        info!(reason = %err, "login rejected");
                        self.last_rejection = Some(err);
                        return self.snapshot();
                    }
                }
            }
            Intent::PressIncrement if from == ViewState::Increment => {
                if let Some(signed_in) = self.signed_in.as_mut() {
                    signed_in.counter.increment();
                }
            }
            Intent::PressDecrement if from == ViewState::Decrement => {
                if let Some(signed_in) = self.signed_in.as_mut() {
                    signed_in.counter.decrement();
                }
            }
            _ => {}
        }

        // Session guard for every signed-in screen.
        if to.is_signed_in() && self.signed_in.is_none() {
            return self.snapshot();
        }

        if from != to {
            debug!(%from, %to, "view changed");
        }
        self.view = to;
        self.snapshot()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        match &self.signed_in {
            Some(signed_in) if self.view.is_signed_in() => ViewSnapshot {
                view: self.view,
                username: Some(signed_in.session.username.clone()),
                count: Some(signed_in.counter.value()),
            },
            _ => ViewSnapshot {
                view: ViewState::LoggedOut,
                username: None,
                count: None,
            },
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.signed_in.as_ref().map(|s| &s.session)
    }

    pub fn counter(&self) -> Option<CounterState> {
        self.signed_in.as_ref().map(|s| s.counter)
    }

    /// Why the most recent login attempt failed, cleared on success.
    pub fn last_rejection(&self) -> Option<AuthError> {
        self.last_rejection
    }
}
