//! Login form state
//!
//! Both submission paths (Enter on the password field and the Login button)
//! go through [`LoginFormState::submit`].

use serde::Serialize;

/// The only accepted credential pair
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin";

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::Username,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Username => Self::Submit,
            Self::Password => Self::Username,
            Self::Submit => Self::Password,
        }
    }

    /// Whether the field accepts typed text
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Submit)
    }
}

/// Inline error shown under the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid username or password")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub error: Option<LoginError>,
    /// Set once the credentials are accepted; the form is unmounted right after
    pub submitting: bool,
    pub focus: LoginField,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
            LoginField::Submit => "",
        }
    }

    /// Replace a field's text. Clears the displayed error and nothing else.
    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Username => self.username = value,
            LoginField::Password => self.password = value,
            LoginField::Submit => return,
        }
        self.error = None;
    }

    /// Validate the form against the demo credentials.
    pub fn submit(&mut self) -> Result<(), LoginError> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(self.reject(LoginError::MissingFields));
        }

        self.submitting = true;
        if self.username == DEMO_USERNAME && self.password == DEMO_PASSWORD {
            self.error = None;
            Ok(())
        } else {
            self.submitting = false;
            Err(self.reject(LoginError::InvalidCredentials))
        }
    }

    fn reject(&mut self, error: LoginError) -> LoginError {
        self.error = Some(error.clone());
        error
    }
}
