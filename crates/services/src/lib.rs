#![forbid(unsafe_code)]

pub mod auth_service;
pub mod backend;
pub mod config;
pub mod error;
mod wire;

pub use auth_service::AuthService;
pub use backend::{AuthBackend, HttpAuthBackend};
pub use config::{ContractRevision, PortalConfig};
pub use error::{BackendError, ConfigError};
