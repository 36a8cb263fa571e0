use std::fmt;

use serde::Serialize;

use crate::error::CredentialsError;

//
// ─── AUTH MODE ────────────────────────────────────────────────────────────────
//

/// Which form the student is filling in.
///
/// The mode owns every per-mode rule: which fields are required, which backend
/// action is requested and which fallback messages apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Forgot,
}

impl AuthMode {
    pub const ALL: [AuthMode; 3] = [AuthMode::Login, AuthMode::Register, AuthMode::Forgot];

    /// Backend `action` parameter for this mode.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
            AuthMode::Forgot => "forgot",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
            AuthMode::Forgot => "Forgot Password",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Access Dashboard",
            AuthMode::Register => "Create Account",
            AuthMode::Forgot => "Send Reset Link",
        }
    }

    #[must_use]
    pub fn requires_password(self) -> bool {
        !matches!(self, AuthMode::Forgot)
    }

    #[must_use]
    pub fn requires_confirmation(self) -> bool {
        matches!(self, AuthMode::Register)
    }

    #[must_use]
    pub fn accepts_email(self) -> bool {
        matches!(self, AuthMode::Register)
    }

    /// Message shown when the backend rejects a request without an `error` field.
    #[must_use]
    pub fn failure_fallback(self) -> &'static str {
        match self {
            AuthMode::Login => "Invalid Roll Number or Password.",
            AuthMode::Register => "Registration failed. Please try again.",
            AuthMode::Forgot => "Could not process the request. Please try again.",
        }
    }

    /// Message shown when the backend accepts a request without a `message` field.
    #[must_use]
    pub fn success_fallback(self) -> &'static str {
        match self {
            AuthMode::Login => "Signed in.",
            AuthMode::Register => "Registration successful! Please login.",
            AuthMode::Forgot => "Password reset instructions have been sent.",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

//
// ─── CREDENTIALS ──────────────────────────────────────────────────────────────
//

/// Raw form input. Every field is kept as typed; validation happens per mode.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub roll_number: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
}

impl Credentials {
    #[must_use]
    pub fn new(roll_number: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            roll_number: roll_number.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn clear_passwords(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }

    /// Check the fields `mode` requires and build the outbound request.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` when a required field is empty or, in register
    /// mode, when the confirmation differs from the password.
    pub fn validate(&self, mode: AuthMode) -> Result<AuthRequest, CredentialsError> {
        let roll_number = self.roll_number.trim();
        if roll_number.is_empty() {
            return Err(CredentialsError::RollNumberRequired);
        }

        if mode.requires_password() && self.password.is_empty() {
            return Err(CredentialsError::PasswordRequired);
        }

        if mode.requires_confirmation() && self.confirm_password != self.password {
            return Err(CredentialsError::PasswordMismatch);
        }

        let password = mode.requires_password().then(|| self.password.clone());
        let email = if mode.accepts_email() {
            Some(self.email.trim().to_owned()).filter(|email| !email.is_empty())
        } else {
            None
        };

        Ok(AuthRequest {
            mode,
            roll_number: roll_number.to_owned(),
            password,
            email,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("roll_number", &self.roll_number)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// A validated, ready-to-send authentication request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthRequest {
    mode: AuthMode,
    roll_number: String,
    password: Option<String>,
    email: Option<String>,
}

impl AuthRequest {
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn roll_number(&self) -> &str {
        &self.roll_number
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("mode", &self.mode)
            .field("roll_number", &self.roll_number)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .finish()
    }
}
