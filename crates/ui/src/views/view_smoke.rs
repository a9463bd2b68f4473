use deploy_core::UserAction;
use deploy_core::model::{JobId, JobStatus, User};
use deploy_core::time::fixed_now;

use super::test_harness::{TestApp, ViewKind, sample_job, setup_view_harness};

fn alice() -> User {
    User {
        username: Some("alice".into()),
        first_name: Some("Alice".into()),
        last_name: Some("Liddell".into()),
        email: Some("a@x.com".into()),
    }
}

#[test]
fn progress_bar_renders_partial_progress() {
    let job = sample_job("job-7", 4, 3);
    let harness = setup_view_harness(ViewKind::Progress(job), TestApp::default());
    let html = harness.render();

    for expected in [
        r#"id="job-7-progress""#,
        r#"aria-labelledby="job-7-progress""#,
        r#"role="progressbar""#,
        r#"aria-valuemin="0""#,
        r#"aria-valuemax="100""#,
        r#"aria-valuenow="75""#,
        "Installation Progress",
        "75% Complete",
        "Progress: 75%",
        "width: 75%",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(
        !html.contains("progress-bar__value_success"),
        "unexpected success state in {html}"
    );
}

#[test]
fn progress_bar_marks_success_at_completion() {
    let job = sample_job("done", 2, 2);
    let harness = setup_view_harness(ViewKind::Progress(job), TestApp::default());
    let html = harness.render();

    assert!(html.contains(r#"aria-valuenow="100""#), "missing value in {html}");
    assert!(html.contains("Progress: 100%"), "missing label in {html}");
    assert!(
        html.contains("progress-bar__value_success"),
        "missing success state in {html}"
    );
}

#[test]
fn progress_bar_clamps_overreported_steps() {
    let job = sample_job("over", 2, 5);
    let harness = setup_view_harness(ViewKind::Progress(job), TestApp::default());
    let html = harness.render();

    assert!(html.contains("Progress: 100%"), "missing clamped label in {html}");
    assert!(!html.contains("Progress: 250%"), "unclamped label in {html}");
}

#[test]
fn home_view_lists_jobs_with_progress() {
    let mut first = sample_job("job-1", 4, 1);
    first.plan = Some("Starter Kit".into());
    let second = sample_job("job-2", 2, 2);
    let app = TestApp::with_jobs(vec![first, second]);

    let harness = setup_view_harness(ViewKind::Home, app);
    let html = harness.render();

    assert!(html.contains("Starter Kit"), "missing plan title in {html}");
    assert!(html.contains("Job job-2"), "missing fallback title in {html}");
    assert!(html.contains("Progress: 25%"), "missing first bar in {html}");
    assert!(html.contains("Progress: 100%"), "missing second bar in {html}");
}

#[test]
fn home_view_renders_empty_state() {
    let harness = setup_view_harness(ViewKind::Home, TestApp::default());
    let html = harness.render();
    assert!(html.contains("No installation jobs yet."), "missing empty state in {html}");
}

#[test]
fn job_view_renders_details() {
    let mut job = sample_job("abc", 4, 3);
    job.plan = Some("Starter Kit".into());
    job.status = JobStatus::Complete;
    job.created_at = Some(fixed_now());
    let app = TestApp::with_jobs(vec![job]);

    let harness = setup_view_harness(ViewKind::Job(JobId::new("abc").unwrap()), app);
    let html = harness.render();

    assert!(html.contains("Starter Kit"), "missing title in {html}");
    assert!(html.contains("Complete"), "missing status in {html}");
    assert!(html.contains("3 of 4 steps"), "missing steps in {html}");
    assert!(html.contains("2023-11-14T22:13:20Z"), "missing start time in {html}");
    assert!(html.contains(r#"id="abc-progress""#), "missing progress id in {html}");
}

#[test]
fn job_view_renders_not_found() {
    let app = TestApp::with_jobs(vec![sample_job("abc", 1, 0)]);
    let harness = setup_view_harness(ViewKind::Job(JobId::new("zzz").unwrap()), app);
    let html = harness.render();
    assert!(html.contains("Job not found."), "missing error in {html}");
}

#[test]
fn user_menu_shows_login_when_logged_out() {
    let harness = setup_view_harness(ViewKind::UserMenu, TestApp::default());
    let html = harness.render();
    assert!(html.contains("Log In"), "missing login in {html}");
    assert!(!html.contains("Log Out"), "unexpected logout in {html}");
}

#[test]
fn user_menu_log_out_clears_session() {
    let app = TestApp::default().with_user(alice());
    let mut harness = setup_view_harness(ViewKind::UserMenu, app);

    let html = harness.render();
    assert!(html.contains("Alice Liddell"), "missing name in {html}");
    assert!(html.contains("Log Out"), "missing logout in {html}");

    harness.click_log_out();

    assert_eq!(harness.current_user(), User::empty());
    let html = harness.render();
    assert!(html.contains("Log In"), "missing login after logout in {html}");
}

#[test]
fn stale_logout_signal_keeps_session() {
    let app = TestApp::default().with_user(alice());
    let mut harness = setup_view_harness(ViewKind::UserMenu, app);

    harness.dispatch(UserAction::LoggedOut("bob".into()));

    assert_eq!(harness.current_user(), alice());
    let html = harness.render();
    assert!(html.contains("Alice Liddell"), "name dropped in {html}");
}

#[test]
fn login_signal_updates_menu() {
    let mut harness = setup_view_harness(ViewKind::UserMenu, TestApp::default());

    harness.dispatch(UserAction::LoggedIn(User::with_username("carol")));

    let html = harness.render();
    assert!(html.contains("carol"), "missing username in {html}");
    assert!(html.contains("Log Out"), "missing logout in {html}");
}

#[test]
fn offline_alert_reloads_once_per_click() {
    let mut harness = setup_view_harness(ViewKind::OfflineAlert, TestApp::default());
    let html = harness.render();
    assert!(
        html.contains("You are no longer connected to the server."),
        "missing message in {html}"
    );
    assert!(html.contains("reload the page."), "missing link in {html}");
    assert_eq!(harness.reload_count(), 0);

    harness.click_reload();

    assert_eq!(harness.reload_count(), 1);
}

#[test]
fn layout_shows_offline_alert_when_configured_offline() {
    let app = TestApp::with_jobs(vec![sample_job("job-1", 2, 1)]).starting_offline();
    let harness = setup_view_harness(ViewKind::App, app);
    let html = harness.render();

    assert!(
        html.contains("You are no longer connected to the server."),
        "missing offline alert in {html}"
    );
    assert!(html.contains("Deploy Console"), "missing header title in {html}");
    assert!(html.contains("Log In"), "missing user menu in {html}");
    assert!(html.contains("Progress: 50%"), "missing routed home in {html}");
}

#[test]
fn layout_hides_offline_alert_when_online() {
    let app = TestApp::with_jobs(vec![sample_job("job-1", 2, 1)]).with_user(alice());
    let harness = setup_view_harness(ViewKind::App, app);
    let html = harness.render();

    assert!(
        !html.contains("You are no longer connected to the server."),
        "unexpected offline alert in {html}"
    );
    assert!(html.contains("Alice Liddell"), "missing signed-in header in {html}");
    assert!(html.contains("Log Out"), "missing logout in {html}");
}
