mod dashboard;
mod login;
mod portal;
mod ring;

pub use dashboard::DashboardView;
pub use login::LoginView;
pub use portal::{PortalView, SessionScreen};
pub use ring::ProgressRing;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
