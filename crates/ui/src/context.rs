use std::sync::Arc;

use portal_core::AuthMode;
use services::AuthService;

/// Shared handles the views read with `use_context`.
#[derive(Clone)]
pub struct AppContext {
    auth_service: Arc<AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    #[must_use]
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }

    /// Modes the configured backend accepts; the login form hides the rest.
    #[must_use]
    pub fn supported_modes(&self) -> &'static [AuthMode] {
        self.auth_service.supported_modes()
    }
}
