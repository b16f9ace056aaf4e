use tally_core::{AuthError, Credentials, Intent};

use super::TextField;

/// Which text field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// Focus ring of the login form: username → password → Login button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Username,
    Password,
    Submit,
}

impl LoginFocus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Username => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::Username,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            LoginFocus::Username => LoginFocus::Submit,
            LoginFocus::Password => LoginFocus::Username,
            LoginFocus::Submit => LoginFocus::Password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginFocus,
}

impl LoginState {
    /// Creates the form, pre-filling the username when configured.
    ///
    /// With a pre-filled username the password field starts focused.
    pub fn new(prefill_username: Option<&str>) -> Self {
        match prefill_username {
            Some(username) => Self {
                username: TextField::with_text(username),
                password: TextField::default(),
                focus: LoginFocus::Password,
            },
            None => Self::default(),
        }
    }

    pub fn field_mut(&mut self, field: LoginField) -> &mut TextField {
        match field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// The text field under focus, if focus is on a field.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginFocus::Username => Some(&mut self.username),
            LoginFocus::Password => Some(&mut self.password),
            LoginFocus::Submit => None,
        }
    }

    /// Builds the submit intent from the current field values.
    pub fn submit_intent(&self) -> Intent {
        let credentials = Credentials::new(self.username.value(), self.password.value());
        Intent::SubmitLogin(credentials)
    }

    /// Moves focus to the field a rejection complained about.
    pub fn focus_rejected(&mut self, err: AuthError) {
        self.focus = match err {
            AuthError::EmptyUsername | AuthError::MissingCredentials => LoginFocus::Username,
            AuthError::EmptyPassword => LoginFocus::Password,
        };
    }

    /// Drops both values once a session exists.
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.focus = LoginFocus::Username;
    }
}
