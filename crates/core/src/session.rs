//! Client-side session state machine.
//!
//! The state is mutated in two synchronous steps around the single network
//! call: `begin_submit` validates and flips `loading` on, `complete_submit`
//! applies the backend outcome and always flips `loading` off.

use crate::error::SubmitError;
use crate::model::{AuthMode, AuthRequest, Credentials, StudentRecord};

/// Shown for any transport, status or decoding failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error. Please check your connection.";

/// Backend verdict for one request, already interpreted for the request's mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendReply {
    /// Login succeeded.
    LoggedIn(StudentRecord),
    /// Register or forgot succeeded, optionally with a message to show.
    Accepted { message: Option<String> },
    /// The backend refused the request, optionally saying why.
    Rejected { error: Option<String> },
}

/// Everything the signed-out screen needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    mode: AuthMode,
    credentials: Credentials,
    error: Option<String>,
    success_message: Option<String>,
    loading: bool,
}

impl LoginForm {
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch forms. Clears messages and password fields, keeps the roll number.
    ///
    /// Ignored while a request is in flight so the reply lands on the form that sent it.
    pub fn select_mode(&mut self, mode: AuthMode) {
        if self.loading {
            return;
        }
        self.mode = mode;
        self.error = None;
        self.success_message = None;
        self.credentials.clear_passwords();
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success_message = None;
    }
}

/// Process-wide session: either a login form or a signed-in student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut(LoginForm),
    LoggedIn(StudentRecord),
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::LoggedOut(LoginForm::default())
    }
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }

    #[must_use]
    pub fn student(&self) -> Option<&StudentRecord> {
        match self {
            SessionState::LoggedIn(student) => Some(student),
            SessionState::LoggedOut(_) => None,
        }
    }

    #[must_use]
    pub fn form(&self) -> Option<&LoginForm> {
        match self {
            SessionState::LoggedOut(form) => Some(form),
            SessionState::LoggedIn(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut LoginForm> {
        match self {
            SessionState::LoggedOut(form) => Some(form),
            SessionState::LoggedIn(_) => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.form().is_some_and(LoginForm::is_loading)
    }

    pub fn select_mode(&mut self, mode: AuthMode) {
        if let Some(form) = self.form_mut() {
            form.select_mode(mode);
        }
    }

    /// Explicit "back" from register or forgot.
    pub fn back_to_login(&mut self) {
        self.select_mode(AuthMode::Login);
    }

    /// Drop the student record and return to a fresh login form.
    pub fn logout(&mut self) {
        *self = SessionState::default();
    }

    /// Validate the current form and mark it as loading.
    ///
    /// `supported` lists the modes the configured backend understands.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Busy` if a request is already in flight and
    /// `SubmitError::AlreadyLoggedIn` when there is no form. Validation and
    /// unsupported-mode errors are also written to the form's error message.
    pub fn begin_submit(&mut self, supported: &[AuthMode]) -> Result<AuthRequest, SubmitError> {
        let SessionState::LoggedOut(form) = self else {
            return Err(SubmitError::AlreadyLoggedIn);
        };
        if form.loading {
            return Err(SubmitError::Busy);
        }

        if !supported.contains(&form.mode) {
            let err = SubmitError::Unsupported(form.mode);
            form.fail(err.to_string());
            return Err(err);
        }

        match form.credentials.validate(form.mode) {
            Ok(request) => {
                form.error = None;
                form.success_message = None;
                form.loading = true;
                Ok(request)
            }
            Err(err) => {
                form.fail(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Apply the result of the request produced by `begin_submit`.
    ///
    /// Transport failures are reported with [`NETWORK_ERROR_MESSAGE`]; the
    /// error value itself is for the caller's logs.
    pub fn complete_submit<E>(&mut self, mode: AuthMode, result: Result<BackendReply, E>) {
        let SessionState::LoggedOut(form) = self else {
            return;
        };
        form.loading = false;

        let reply = match result {
            Ok(reply) => reply,
            Err(_) => {
                form.fail(NETWORK_ERROR_MESSAGE);
                return;
            }
        };

        match (mode, reply) {
            (AuthMode::Login, BackendReply::LoggedIn(student)) => {
                *self = SessionState::LoggedIn(student);
            }
            (AuthMode::Register, BackendReply::Accepted { message }) => {
                form.mode = AuthMode::Login;
                form.credentials.clear_passwords();
                form.error = None;
                form.success_message = Some(non_empty_or(message, mode.success_fallback()));
            }
            (AuthMode::Forgot, BackendReply::Accepted { message }) => {
                form.credentials.clear_passwords();
                form.error = None;
                form.success_message = Some(non_empty_or(message, mode.success_fallback()));
            }
            (_, BackendReply::Rejected { error }) => {
                form.fail(non_empty_or(error, mode.failure_fallback()));
            }
            // A reply that does not fit the request's mode counts as a rejection.
            (_, BackendReply::LoggedIn(_) | BackendReply::Accepted { .. }) => {
                form.fail(mode.failure_fallback());
            }
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
