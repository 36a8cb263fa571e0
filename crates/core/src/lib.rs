#![forbid(unsafe_code)]

pub mod arc;
pub mod attendance;
pub mod error;
pub mod model;
pub mod session;

pub use arc::{ArcGeometry, RingSpec};
pub use attendance::{Band, OverallAttendance, Standing};
pub use error::{CredentialsError, SubmitError};
pub use model::{AuthMode, AuthRequest, Credentials, Marks, StudentRecord, Subject};
pub use session::{BackendReply, LoginForm, NETWORK_ERROR_MESSAGE, SessionState};
