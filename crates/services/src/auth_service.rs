use std::sync::Arc;

use portal_core::{AuthMode, AuthRequest, BackendReply, SessionState, SubmitError};
use tracing::{debug, info, warn};

use crate::backend::{AuthBackend, HttpAuthBackend};
use crate::config::PortalConfig;
use crate::error::BackendError;

/// Drives the session state machine against an `AuthBackend`.
#[derive(Clone)]
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
}

impl AuthService {
    #[must_use]
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self { backend }
    }

    /// Build a service backed by the HTTP portal described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Client` if the HTTP client cannot be built.
    pub fn from_config(config: PortalConfig) -> Result<Self, BackendError> {
        let backend = HttpAuthBackend::new(config)?;
        Ok(Self::new(Arc::new(backend)))
    }

    #[must_use]
    pub fn supported_modes(&self) -> &'static [AuthMode] {
        self.backend.supported_modes()
    }

    /// Validate the session's form for this backend and mark it as loading.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the submission must not reach the backend.
    /// The reason is also recorded on the session's form.
    pub fn begin(&self, session: &mut SessionState) -> Result<AuthRequest, SubmitError> {
        session
            .begin_submit(self.supported_modes())
            .inspect_err(|err| debug!(%err, "submission refused"))
    }

    /// Send a validated request. Errors are logged here and returned for
    /// `SessionState::complete_submit`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` for transport failures.
    pub async fn send(&self, request: &AuthRequest) -> Result<BackendReply, BackendError> {
        let mode = request.mode();
        let roll = request.roll_number();
        info!(%mode, roll, "sending auth request");

        let result = self.backend.authenticate(request).await;
        match &result {
            Ok(BackendReply::LoggedIn(student)) => {
                info!(%mode, roll, subjects = student.subjects().len(), "login succeeded");
            }
            Ok(BackendReply::Accepted { .. }) => info!(%mode, roll, "request accepted"),
            Ok(BackendReply::Rejected { error }) => {
                warn!(%mode, roll, error = error.as_deref().unwrap_or(""), "request rejected");
            }
            Err(err) => warn!(%mode, roll, error = %err, "auth request failed"),
        }
        result
    }

    /// Run one full submission against `session`: validate, send, apply.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the submission never reached the backend. The
    /// reason is also recorded on the session's form.
    pub async fn submit(&self, session: &mut SessionState) -> Result<(), SubmitError> {
        let request = self.begin(session)?;
        let result = self.send(&request).await;
        session.complete_submit(request.mode(), result);
        Ok(())
    }
}
