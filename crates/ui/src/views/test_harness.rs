use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use portal_core::{AuthMode, AuthRequest, BackendReply, SessionState};
use services::{AuthBackend, AuthService, BackendError};

use crate::context::AppContext;
use crate::views::login::submit_form;
use crate::views::{PortalView, SessionScreen};

/// Answers every request with the same reply.
struct StubBackend {
    modes: &'static [AuthMode],
    reply: BackendReply,
}

#[async_trait::async_trait]
impl AuthBackend for StubBackend {
    async fn authenticate(&self, _request: &AuthRequest) -> Result<BackendReply, BackendError> {
        Ok(self.reply.clone())
    }

    fn supported_modes(&self) -> &'static [AuthMode] {
        self.modes
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    /// Fresh portal, exactly as the app launches it.
    Portal,
    /// Session screen seeded with a prepared state.
    Session(SessionState),
    /// Session screen that submits its seeded form once on mount.
    Submitting(SessionState),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    auth_service: Arc<AuthService>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let auth_service = props.auth_service.clone();
    use_context_provider(|| AppContext::new(auth_service));

    match props.view {
        ViewKind::Portal => rsx! { PortalView {} },
        ViewKind::Session(state) => rsx! { SeededSession { state } },
        ViewKind::Submitting(state) => rsx! { SubmittingSession { state } },
    }
}

#[component]
fn SeededSession(state: SessionState) -> Element {
    let session = use_signal(|| state.clone());
    rsx! { SessionScreen { session } }
}

#[component]
fn SubmittingSession(state: SessionState) -> Element {
    let session = use_signal(|| state.clone());
    let ctx = use_context::<AppContext>();
    use_hook(move || submit_form(session, ctx.auth_service()));
    rsx! { SessionScreen { session } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks (the backend call) run, then re-render.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_modes(view, &AuthMode::ALL)
}

pub fn setup_view_harness_with_modes(view: ViewKind, modes: &'static [AuthMode]) -> ViewHarness {
    build_harness(view, modes, BackendReply::Rejected { error: None })
}

pub fn setup_view_harness_with_reply(view: ViewKind, reply: BackendReply) -> ViewHarness {
    build_harness(view, &AuthMode::ALL, reply)
}

fn build_harness(view: ViewKind, modes: &'static [AuthMode], reply: BackendReply) -> ViewHarness {
    let backend = Arc::new(StubBackend { modes, reply });
    let auth_service = Arc::new(AuthService::new(backend));
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { auth_service, view });
    ViewHarness { dom }
}
