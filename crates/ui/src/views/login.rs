use std::sync::Arc;

use dioxus::prelude::*;
use portal_core::{AuthMode, Credentials, SessionState};
use services::AuthService;

use crate::context::AppContext;
use crate::vm::map_login_form;

fn update_session<R>(
    mut session: Signal<SessionState>,
    apply: impl FnOnce(&mut SessionState) -> R,
) -> R {
    apply(&mut *session.write())
}

fn edit_credentials(mut session: Signal<SessionState>, apply: impl FnOnce(&mut Credentials)) {
    if let Some(form) = session.write().form_mut() {
        apply(form.credentials_mut());
    }
}

/// Start a submission for the current form. `loading` is set before the
/// request is spawned and cleared when the reply is applied.
pub(crate) fn submit_form(session: Signal<SessionState>, auth: Arc<AuthService>) {
    let Ok(request) = update_session(session, |state| auth.begin(state)) else {
        return;
    };

    spawn(async move {
        let mut session = session;
        let result = auth.send(&request).await;
        session.write().complete_submit(request.mode(), result);
    });
}

#[component]
pub fn LoginView(session: Signal<SessionState>) -> Element {
    let ctx = use_context::<AppContext>();
    let supported = ctx.supported_modes();

    let Some(vm) = session.read().form().map(|form| map_login_form(form, supported)) else {
        return rsx! {};
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_form(session, ctx.auth_service());
    };

    rsx! {
        div { class: "login-screen",
            div { class: "login-card",
                div { class: "login-badge", "🎓" }
                h2 { class: "login-title", "{vm.title}" }
                p { class: "login-subtitle", "{vm.subtitle}" }

                if !vm.tabs.is_empty() {
                    div { class: "mode-tabs",
                        for tab in vm.tabs.iter().copied() {
                            button {
                                key: "{tab.label}",
                                class: tab.class(),
                                r#type: "button",
                                disabled: vm.loading,
                                onclick: move |_| update_session(session, |state| state.select_mode(tab.mode)),
                                "{tab.label}"
                            }
                        }
                    }
                }

                form { class: "auth-form", onsubmit: on_submit,
                    div { class: "field",
                        label { r#for: "roll-number", "Roll Number" }
                        input {
                            id: "roll-number",
                            r#type: "text",
                            placeholder: "141730",
                            value: "{vm.roll_number}",
                            oninput: move |evt| edit_credentials(session, |creds| creds.roll_number = evt.value()),
                        }
                    }

                    if vm.show_email {
                        div { class: "field",
                            label { r#for: "email", "Email" }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: "{vm.email}",
                                oninput: move |evt| edit_credentials(session, |creds| creds.email = evt.value()),
                            }
                        }
                    }

                    if vm.show_password {
                        div { class: "field",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                placeholder: "••••••",
                                value: "{vm.password}",
                                oninput: move |evt| edit_credentials(session, |creds| creds.password = evt.value()),
                            }
                        }
                    }

                    if vm.show_confirm_password {
                        div { class: "field",
                            label { r#for: "confirm-password", "Confirm Password" }
                            input {
                                id: "confirm-password",
                                r#type: "password",
                                placeholder: "••••••",
                                value: "{vm.confirm_password}",
                                oninput: move |evt| edit_credentials(session, |creds| creds.confirm_password = evt.value()),
                            }
                        }
                    }

                    if let Some(error) = vm.error.as_deref() {
                        div { class: "alert alert-error", "{error}" }
                    }
                    if let Some(message) = vm.success_message.as_deref() {
                        div { class: "alert alert-success", "{message}" }
                    }

                    button {
                        class: "submit",
                        r#type: "submit",
                        disabled: vm.loading,
                        if vm.loading {
                            span { class: "spinner" }
                        }
                        "{vm.submit_label}"
                    }
                }

                if vm.show_forgot_link {
                    button {
                        class: "link",
                        r#type: "button",
                        disabled: vm.loading,
                        onclick: move |_| update_session(session, |state| state.select_mode(AuthMode::Forgot)),
                        "Forgot password?"
                    }
                }
                if vm.show_back_link {
                    button {
                        class: "link",
                        r#type: "button",
                        disabled: vm.loading,
                        onclick: move |_| update_session(session, SessionState::back_to_login),
                        "Back to login"
                    }
                }
            }
        }
    }
}
