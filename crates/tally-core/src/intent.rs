//! User intents delivered to the navigation controller.

use std::str::FromStr;

use thiserror::Error;

use crate::auth::Credentials;
use crate::nav::ViewState;

/// A discrete user action (login submit or button press).
///
/// `Debug` is safe to log: [`Credentials`] redacts the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitLogin(Credentials),
    PressIncrement,
    PressDecrement,
    PressBack,
    PressSummary,
}

/// Payload-free tag of an [`Intent`], used by the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    SubmitLogin,
    PressIncrement,
    PressDecrement,
    PressBack,
    PressSummary,
}

impl Intent {
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        Intent::SubmitLogin(Credentials::new(username, password))
    }

    /// Navigational intent that targets `view` from the Welcome hub.
    ///
    /// `Welcome` maps to `PressBack`; `LoggedOut` has no button.
    pub fn nav(view: ViewState) -> Option<Self> {
        match view {
            ViewState::LoggedOut => None,
            ViewState::Welcome => Some(Intent::PressBack),
            ViewState::Increment => Some(Intent::PressIncrement),
            ViewState::Decrement => Some(Intent::PressDecrement),
            ViewState::Summary => Some(Intent::PressSummary),
        }
    }

    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::SubmitLogin(_) => IntentKind::SubmitLogin,
            Intent::PressIncrement => IntentKind::PressIncrement,
            Intent::PressDecrement => IntentKind::PressDecrement,
            Intent::PressBack => IntentKind::PressBack,
            Intent::PressSummary => IntentKind::PressSummary,
        }
    }
}

/// Error returned when a replay line is not a known intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentParseError {
    #[error("empty intent")]
    Empty,
    #[error("unknown intent '{0}' (expected login, increment, decrement, summary or back)")]
    Unknown(String),
    #[error("'{keyword}' takes no arguments")]
    UnexpectedArguments { keyword: String },
}

/// Parses the one-line replay form, e.g. `login testuser password123`.
///
/// Everything after the username token is the password, inner whitespace
/// included. A literal `""` token stands for an empty field, so
/// `login "" secret` submits an empty username.
impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (keyword, rest) = split_token(line.trim());
        if keyword.is_empty() {
            return Err(IntentParseError::Empty);
        }
        let keyword = keyword.to_ascii_lowercase();

        let simple = match keyword.as_str() {
            "login" => {
                let (username, password) = split_token(rest);
                return Ok(Intent::login(field(username), field(password)));
            }
            "increment" | "inc" => Intent::PressIncrement,
            "decrement" | "dec" => Intent::PressDecrement,
            "summary" => Intent::PressSummary,
            "back" => Intent::PressBack,
            _ => return Err(IntentParseError::Unknown(keyword)),
        };

        if !rest.is_empty() {
            return Err(IntentParseError::UnexpectedArguments { keyword });
        }
        Ok(simple)
    }
}

/// Splits off the first whitespace-delimited token. The remainder keeps its
/// inner whitespace.
fn split_token(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}

fn field(token: &str) -> &str {
    if token == "\"\"" { "" } else { token }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_with_both_fields() {
        let intent: Intent = "login testuser password123".parse().unwrap();
        assert_eq!(intent, Intent::login("testuser", "password123"));
    }

    #[test]
    fn test_parse_login_missing_fields_are_empty() {
        assert_eq!("login".parse::<Intent>().unwrap(), Intent::login("", ""));
        assert_eq!(
            "login testuser".parse::<Intent>().unwrap(),
            Intent::login("testuser", "")
        );
        assert_eq!(
            "login \"\" password123".parse::<Intent>().unwrap(),
            Intent::login("", "password123")
        );
    }

    #[test]
    fn test_parse_login_password_keeps_inner_spaces() {
        let intent: Intent = "login me correct horse".parse().unwrap();
        assert_eq!(intent, Intent::login("me", "correct horse"));
    }

    #[test]
    fn test_parse_login_password_is_taken_verbatim() {
        assert_eq!(
            "login me a  b".parse::<Intent>().unwrap(),
            Intent::login("me", "a  b")
        );
        assert_eq!(
            "login\tme\ta\tb".parse::<Intent>().unwrap(),
            Intent::login("me", "a\tb")
        );
    }

    #[test]
    fn test_parse_buttons_case_insensitive() {
        assert_eq!(
            "Increment".parse::<Intent>().unwrap(),
            Intent::PressIncrement
        );
        assert_eq!("inc".parse::<Intent>().unwrap(), Intent::PressIncrement);
        assert_eq!("DEC".parse::<Intent>().unwrap(), Intent::PressDecrement);
        assert_eq!("summary".parse::<Intent>().unwrap(), Intent::PressSummary);
        assert_eq!("  back  ".parse::<Intent>().unwrap(), Intent::PressBack);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Intent>(), Err(IntentParseError::Empty));
        assert_eq!(
            "logout".parse::<Intent>(),
            Err(IntentParseError::Unknown("logout".to_string()))
        );
        assert_eq!(
            "back twice".parse::<Intent>(),
            Err(IntentParseError::UnexpectedArguments {
                keyword: "back".to_string()
            })
        );
    }

    #[test]
    fn test_nav_targets() {
        assert_eq!(Intent::nav(ViewState::LoggedOut), None);
        assert_eq!(Intent::nav(ViewState::Welcome), Some(Intent::PressBack));
        assert_eq!(Intent::nav(ViewState::Summary), Some(Intent::PressSummary));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", Intent::login("u", "s3cret"));
        assert!(debug.contains("SubmitLogin"));
        assert!(!debug.contains("s3cret"));
        assert_eq!(format!("{:?}", Intent::PressBack), "PressBack");
    }
}
