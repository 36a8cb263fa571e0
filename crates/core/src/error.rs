use thiserror::Error;

use crate::model::AuthMode;

/// Local validation failures, raised before any request is sent.
///
/// The `Display` text is shown to the student verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("Roll number is required.")]
    RollNumberRequired,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Reasons a submission was refused by the session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("a request is already in flight")]
    Busy,
    #[error("already signed in")]
    AlreadyLoggedIn,
    #[error("This backend only supports login.")]
    Unsupported(AuthMode),
    #[error(transparent)]
    Invalid(#[from] CredentialsError),
}
