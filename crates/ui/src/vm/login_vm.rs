use portal_core::{AuthMode, LoginForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTabVm {
    pub mode: AuthMode,
    pub label: &'static str,
    pub active: bool,
}

impl ModeTabVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active { "mode-tab active" } else { "mode-tab" }
    }
}

/// Everything the signed-out screen renders, derived from `LoginForm`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoginFormVm {
    pub mode: AuthMode,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Empty when only one mode is available.
    pub tabs: Vec<ModeTabVm>,
    pub roll_number: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub show_email: bool,
    pub show_forgot_link: bool,
    pub show_back_link: bool,
    pub error: Option<String>,
    pub success_message: Option<String>,
    pub loading: bool,
    pub submit_label: &'static str,
}

#[must_use]
pub fn map_login_form(form: &LoginForm, supported: &[AuthMode]) -> LoginFormVm {
    let mode = form.mode();
    let credentials = form.credentials();

    // Forgot is reached through its own link, not a tab.
    let tab_modes: Vec<AuthMode> = [AuthMode::Login, AuthMode::Register]
        .into_iter()
        .filter(|candidate| supported.contains(candidate))
        .collect();
    let tabs = if tab_modes.len() > 1 {
        tab_modes
            .into_iter()
            .map(|tab| ModeTabVm {
                mode: tab,
                label: tab.label(),
                active: tab == mode,
            })
            .collect()
    } else {
        Vec::new()
    };

    let (title, subtitle) = match mode {
        AuthMode::Login => ("Student Portal", "Enter credentials to view dashboard"),
        AuthMode::Register => ("Create Account", "Register your roll number to get started"),
        AuthMode::Forgot => ("Reset Password", "We will send reset instructions to your email"),
    };

    LoginFormVm {
        mode,
        title,
        subtitle,
        tabs,
        roll_number: credentials.roll_number.clone(),
        password: credentials.password.clone(),
        confirm_password: credentials.confirm_password.clone(),
        email: credentials.email.clone(),
        show_password: mode.requires_password(),
        show_confirm_password: mode.requires_confirmation(),
        show_email: mode.accepts_email(),
        show_forgot_link: mode == AuthMode::Login && supported.contains(&AuthMode::Forgot),
        show_back_link: mode == AuthMode::Forgot,
        error: form.error().map(str::to_owned),
        success_message: form.success_message().map(str::to_owned),
        loading: form.is_loading(),
        submit_label: if form.is_loading() {
            "Please wait..."
        } else {
            mode.submit_label()
        },
    }
}
