use async_trait::async_trait;
use portal_core::{AuthMode, AuthRequest, BackendReply};
use reqwest::Client;

use crate::config::PortalConfig;
use crate::error::BackendError;
use crate::wire::{AuthQuery, AuthResponse};

/// Remote service that validates credentials and returns student records.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Send one request and interpret the response for `request.mode()`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` for transport, status or decoding failures.
    /// A rejection reported by the backend is `Ok(BackendReply::Rejected { .. })`.
    async fn authenticate(&self, request: &AuthRequest) -> Result<BackendReply, BackendError>;

    /// Modes this backend understands.
    fn supported_modes(&self) -> &'static [AuthMode] {
        &AuthMode::ALL
    }
}

/// `AuthBackend` over the portal's HTTP GET endpoint.
#[derive(Clone, Debug)]
pub struct HttpAuthBackend {
    client: Client,
    config: PortalConfig,
}

impl HttpAuthBackend {
    /// # Errors
    ///
    /// Returns `BackendError::Client` if the HTTP client cannot be built.
    pub fn new(config: PortalConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(BackendError::Client)?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    fn build_request(&self, request: &AuthRequest) -> Result<reqwest::Request, BackendError> {
        let query = AuthQuery::new(request, self.config.contract());
        let built = self
            .client
            .get(self.config.api_url().clone())
            .query(&query)
            .build()?;
        Ok(built)
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn authenticate(&self, request: &AuthRequest) -> Result<BackendReply, BackendError> {
        let http_request = self.build_request(request)?;
        let response = self.client.execute(http_request).await?;

        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }

        // Apps Script serves JSON as text/plain, so decode the body directly.
        let body = response.text().await?;
        let parsed: AuthResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_reply(request, self.config.contract()))
    }

    fn supported_modes(&self) -> &'static [AuthMode] {
        self.config.contract().supported_modes()
    }
}
