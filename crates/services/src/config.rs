use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use portal_core::AuthMode;
use url::Url;

use crate::error::ConfigError;

/// Deployed portal script.
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbwvEBlcI8BgacG9zx_bjzGZzF-w_t4OkM4dG_cXBDS4liWVu3gaCWib50hAR4WSLFdnGw/exec";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_URL: &str = "PORTAL_API_URL";
pub const ENV_CONTRACT: &str = "PORTAL_API_CONTRACT";
pub const ENV_TIMEOUT_SECS: &str = "PORTAL_API_TIMEOUT_SECS";

/// Which request/response shape the backend speaks. Chosen explicitly, never sniffed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContractRevision {
    /// `action` parameter, `success` flag, register and forgot supported.
    #[default]
    Current,
    /// No `action` parameter, `found` flag, login only.
    Legacy,
}

impl ContractRevision {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContractRevision::Current => "current",
            ContractRevision::Legacy => "legacy",
        }
    }

    #[must_use]
    pub fn supported_modes(self) -> &'static [AuthMode] {
        match self {
            ContractRevision::Current => &AuthMode::ALL,
            ContractRevision::Legacy => &[AuthMode::Login],
        }
    }
}

impl fmt::Display for ContractRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractRevision {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(ContractRevision::Current),
            "legacy" => Ok(ContractRevision::Legacy),
            _ => Err(ConfigError::UnknownContract {
                raw: raw.to_string(),
            }),
        }
    }
}

/// Where and how to reach the portal backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    api_url: Url,
    contract: ContractRevision,
    timeout: Duration,
}

impl PortalConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiUrl` unless `api_url` is an absolute http(s) URL.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let raw = api_url.trim();
        let api_url = Url::parse(raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::InvalidApiUrl {
                raw: raw.to_string(),
            })?;

        Ok(Self {
            api_url,
            contract: ContractRevision::default(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read `PORTAL_API_URL`, `PORTAL_API_CONTRACT` and `PORTAL_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`PortalConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = match set(ENV_API_URL) {
            Some(url) => Self::new(&url)?,
            None => Self::new(DEFAULT_API_URL)?,
        };
        if let Some(raw) = set(ENV_CONTRACT) {
            config.contract = raw.parse()?;
        }
        if let Some(raw) = set(ENV_TIMEOUT_SECS) {
            config.timeout = parse_timeout_secs(&raw)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_contract(mut self, contract: ContractRevision) -> Self {
        self.contract = contract;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    #[must_use]
    pub fn contract(&self) -> ContractRevision {
        self.contract
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Parse a positive whole number of seconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` for zero, negative or non-numeric input.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        })
}
