use portal_core::{AuthMode, BackendReply, Credentials, Marks, SessionState, StudentRecord, Subject};

use super::test_harness::{
    ViewKind, ViewHarness, setup_view_harness, setup_view_harness_with_modes,
    setup_view_harness_with_reply,
};

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

fn login_state(credentials: Credentials) -> SessionState {
    let mut state = SessionState::default();
    *state.form_mut().unwrap().credentials_mut() = credentials;
    state
}

#[test]
fn portal_starts_on_login_form() {
    let html = render(ViewKind::Portal);
    assert!(html.contains("Student Portal"), "missing title in {html}");
    assert!(html.contains("Roll Number"), "missing roll field in {html}");
    assert!(html.contains("Access Dashboard"), "missing submit in {html}");
    assert!(html.contains("Forgot password?"), "missing forgot link in {html}");
    assert!(!html.contains("Confirm Password"), "unexpected confirm in {html}");
}

#[test]
fn rejected_login_renders_backend_error() {
    let mut state = login_state(Credentials::new("141730", "bad"));
    state.begin_submit(&AuthMode::ALL).unwrap();
    state.complete_submit::<()>(
        AuthMode::Login,
        Ok(BackendReply::Rejected {
            error: Some("Invalid credentials".into()),
        }),
    );

    let html = render(ViewKind::Session(state));
    assert!(html.contains("Invalid credentials"), "missing error in {html}");
    assert!(html.contains("141730"), "roll number not kept in {html}");
}

#[test]
fn in_flight_login_shows_busy_button() {
    let mut state = login_state(Credentials::new("141730", "pw"));
    state.begin_submit(&AuthMode::ALL).unwrap();

    let html = render(ViewKind::Session(state));
    assert!(html.contains("Please wait..."), "missing busy label in {html}");
    assert!(!html.contains("Access Dashboard"), "idle label still shown in {html}");
}

#[test]
fn register_mode_shows_confirmation_and_email() {
    let mut state = SessionState::default();
    state.select_mode(AuthMode::Register);

    let html = render(ViewKind::Session(state));
    assert!(html.contains("Create Account"), "missing title in {html}");
    assert!(html.contains("Confirm Password"), "missing confirm in {html}");
    assert!(html.contains("Email"), "missing email in {html}");
}

#[test]
fn forgot_mode_offers_back_link() {
    let mut state = SessionState::default();
    state.select_mode(AuthMode::Forgot);

    let html = render(ViewKind::Session(state));
    assert!(html.contains("Back to login"), "missing back link in {html}");
    assert!(!html.contains("id=\"password\""), "unexpected password in {html}");
}

#[test]
fn login_only_backend_hides_mode_tabs() {
    let mut harness = setup_view_harness_with_modes(ViewKind::Portal, &[AuthMode::Login]);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("mode-tab"), "unexpected tabs in {html}");
    assert!(!html.contains("Forgot password?"), "unexpected forgot link in {html}");
}

#[test]
fn dashboard_renders_overall_and_subject_cards() {
    let student = StudentRecord::new(
        "141730",
        "Asha",
        vec![
            Subject::new("Maths", "82%", Marks::new("9", "18", "")),
            Subject::new("History", "58%", Marks::default()),
        ],
    );

    let html = render(ViewKind::Session(SessionState::LoggedIn(student)));
    assert!(html.contains("Hello, Asha"), "missing greeting in {html}");
    assert!(html.contains("70.0%"), "missing overall in {html}");
    assert!(html.contains("Low Attendance"), "missing standing in {html}");
    assert!(html.contains("Maths"), "missing subject in {html}");
    assert!(html.contains("82%"), "missing subject percent in {html}");
    assert!(html.contains("band-critical"), "missing critical band in {html}");
    assert!(html.contains(">18<"), "missing mark in {html}");
    assert!(html.contains(">-<"), "missing dash for empty mark in {html}");
    assert!(html.contains("Log out"), "missing logout in {html}");
}

#[test]
fn dashboard_with_excellent_standing() {
    let student = StudentRecord::new(
        "141730",
        "Asha",
        vec![Subject::new("Maths", "82%", Marks::new("9", "18", ""))],
    );

    let html = render(ViewKind::Session(SessionState::LoggedIn(student)));
    assert!(html.contains("82.0%"), "missing overall in {html}");
    assert!(html.contains("Excellent Standing"), "missing standing in {html}");
    assert!(html.contains("band-good"), "missing good band in {html}");
}

fn asha() -> StudentRecord {
    StudentRecord::new(
        "141730",
        "Asha",
        vec![Subject::new("Maths", "82%", Marks::new("9", "18", ""))],
    )
}

async fn settle(harness: &mut ViewHarness) -> String {
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn submitted_login_lands_on_dashboard() {
    let state = login_state(Credentials::new("141730", "pw"));
    let mut harness = setup_view_harness_with_reply(
        ViewKind::Submitting(state),
        BackendReply::LoggedIn(asha()),
    );

    let html = settle(&mut harness).await;
    assert!(html.contains("Hello, Asha"), "missing dashboard in {html}");
    assert!(html.contains("82.0%"), "missing overall in {html}");
    assert!(!html.contains("Please wait..."), "still busy in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submitted_login_rejection_clears_loading() {
    let state = login_state(Credentials::new("141730", "bad"));
    let mut harness = setup_view_harness_with_reply(
        ViewKind::Submitting(state),
        BackendReply::Rejected {
            error: Some("Invalid credentials".into()),
        },
    );

    let html = settle(&mut harness).await;
    assert!(html.contains("Invalid credentials"), "missing error in {html}");
    assert!(html.contains("Access Dashboard"), "button still busy in {html}");
    assert!(!html.contains("Please wait..."), "still busy in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_submission_never_goes_busy() {
    let state = login_state(Credentials::new("", "pw"));
    let mut harness = setup_view_harness_with_reply(
        ViewKind::Submitting(state),
        BackendReply::LoggedIn(asha()),
    );

    let html = settle(&mut harness).await;
    assert!(html.contains("Roll number is required."), "missing error in {html}");
    assert!(!html.contains("Hello, Asha"), "reached dashboard in {html}");
}
