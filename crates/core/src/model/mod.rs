mod auth;
mod student;

pub use auth::{AuthMode, AuthRequest, Credentials};
pub use student::{Marks, StudentRecord, Subject, mark_or_dash};
