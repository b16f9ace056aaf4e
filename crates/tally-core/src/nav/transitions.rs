//! Transition table for the navigation state machine.
//!
//! ```text
//!   LoggedOut ──login──► Welcome ──increment──► Increment ⟲ increment
//!                         │  ▲ ▲ ▲
//!                         │  │ │ └──back── Increment
//!                         │  │ └────back── Decrement ⟲ decrement
//!                         │  └──────back── Summary
//!                         ├──decrement──► Decrement
//!                         └──summary────► Summary
//! ```
//!
//! Any (view, intent) pair missing from [`TRANSITIONS`] is a no-op.

use super::ViewState;
use crate::intent::IntentKind;

/// Every allowed `(from, intent, to)` edge.
///
/// Guards and effects (authentication, counter updates) are applied by the
/// controller; this table only decides which edges exist.
#[rustfmt::skip]
pub const TRANSITIONS: &[(ViewState, IntentKind, ViewState)] = &[
    (ViewState::LoggedOut, IntentKind::SubmitLogin, ViewState::Welcome),
    // From Welcome
    (ViewState::Welcome, IntentKind::PressIncrement, ViewState::Increment),
    (ViewState::Welcome, IntentKind::PressDecrement, ViewState::Decrement),
    (ViewState::Welcome, IntentKind::PressSummary, ViewState::Summary),
    // Self loops that mutate the counter
    (ViewState::Increment, IntentKind::PressIncrement, ViewState::Increment),
    (ViewState::Decrement, IntentKind::PressDecrement, ViewState::Decrement),
    // Back to the hub
    (ViewState::Increment, IntentKind::PressBack, ViewState::Welcome),
    (ViewState::Decrement, IntentKind::PressBack, ViewState::Welcome),
    (ViewState::Summary, IntentKind::PressBack, ViewState::Welcome),
];

/// Target view for `intent` in `from`, or `None` when the pair is a no-op.
pub fn next_view(from: ViewState, intent: IntentKind) -> Option<ViewState> {
    TRANSITIONS
        .iter()
        .find(|(f, i, _)| *f == from && *i == intent)
        .map(|(_, _, to)| *to)
}

/// Intents that do something in `from`, in table order.
pub fn available_intents(from: ViewState) -> Vec<IntentKind> {
    TRANSITIONS
        .iter()
        .filter(|(f, _, _)| *f == from)
        .map(|(_, i, _)| *i)
        .collect()
}
