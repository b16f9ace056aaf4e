//! Credential check that gates the signed-in screens.
//!
//! Any non-empty username and password pair is accepted. There is no backend,
//! no password policy and no trimming: `" "` counts as a value.

use std::fmt;

use thiserror::Error;

/// Reason a login attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("username is required")]
    EmptyUsername,
    #[error("password is required")]
    EmptyPassword,
    #[error("username and password are required")]
    MissingCredentials,
}

/// Identity created by a successful login.
///
/// Lives for the rest of the process; there is no logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

/// A username/password pair as typed into the login form.
///
/// Consumed by [`Credentials::authenticate`]; the password is never kept
/// past the attempt.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validates the pair, producing a [`Session`] on success.
    ///
    /// # Errors
    /// Returns an [`AuthError`] naming the missing field(s).
    pub fn authenticate(self) -> Result<Session, AuthError> {
        authenticate(&self.username, &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decides whether a login attempt succeeds.
///
/// # Errors
/// Returns [`AuthError::MissingCredentials`] when both values are empty,
/// otherwise the error for whichever one is empty.
pub fn authenticate(username: &str, password: &str) -> Result<Session, AuthError> {
    match (username.is_empty(), password.is_empty()) {
        (true, true) => Err(AuthError::MissingCredentials),
        (true, false) => Err(AuthError::EmptyUsername),
        (false, true) => Err(AuthError::EmptyPassword),
        (false, false) => Ok(Session {
            username: username.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_accepts_any_non_empty_pair() {
        let session = authenticate("testuser", "password123").unwrap();
        assert_eq!(session.username, "testuser");
    }

    #[test]
    fn test_rejects_empty_username() {
        assert_eq!(
            authenticate("", "password123"),
            Err(AuthError::EmptyUsername)
        );
    }

    #[test]
    fn test_rejects_empty_password() {
        assert_eq!(authenticate("testuser", ""), Err(AuthError::EmptyPassword));
    }

    #[test]
    fn test_rejects_both_empty() {
        assert_eq!(authenticate("", ""), Err(AuthError::MissingCredentials));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let session = authenticate(" ", " ").unwrap();
        assert_eq!(session.username, " ");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("myuser", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("myuser"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_authenticate() {
        let session = Credentials::new("myuser", "pass").authenticate().unwrap();
        assert_eq!(session.username, "myuser");
        assert_eq!(
            Credentials::default().authenticate(),
            Err(AuthError::MissingCredentials)
        );
    }

    proptest! {
        #[test]
        fn test_any_non_empty_pair_is_accepted(username in ".+", password in ".+") {
            let session = authenticate(&username, &password).unwrap();
            prop_assert_eq!(session.username, username);
        }

        #[test]
        fn test_empty_side_is_named(value in ".+") {
            prop_assert_eq!(authenticate("", &value), Err(AuthError::EmptyUsername));
            prop_assert_eq!(authenticate(&value, ""), Err(AuthError::EmptyPassword));
        }
    }
}
