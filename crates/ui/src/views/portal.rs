use dioxus::prelude::*;
use portal_core::SessionState;

use crate::views::{DashboardView, LoginView};

/// Root screen. The session lives only in this signal; a reload starts signed out.
#[component]
pub fn PortalView() -> Element {
    let session = use_signal(SessionState::default);

    rsx! {
        SessionScreen { session }
    }
}

#[component]
pub fn SessionScreen(session: Signal<SessionState>) -> Element {
    let student = session.read().student().cloned();

    match student {
        Some(student) => rsx! {
            DashboardView {
                student,
                on_logout: move |()| {
                    let mut session = session;
                    tracing::info!("logging out");
                    session.write().logout();
                },
            }
        },
        None => rsx! {
            LoginView { session }
        },
    }
}
