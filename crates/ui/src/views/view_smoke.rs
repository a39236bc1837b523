use super::test_harness::{HarnessBuilder, ListMode, ViewKind, draft, exam};

#[tokio::test(flavor = "current_thread")]
async fn home_view_shows_missing_base_url_as_not_set() {
    let mut harness = HarnessBuilder::new(ViewKind::Home).build().await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("API base URL: Not set"), "missing base url in {html}");
    assert!(html.contains("No exam selected."), "missing empty selection in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_shows_configured_url_and_restored_selection() {
    let mut harness = HarnessBuilder::new(ViewKind::Home)
        .base_url("https://marks.example.org/api")
        .selected(exam("t1", "Term 1"))
        .build()
        .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("marks.example.org"), "missing base url in {html}");
    assert!(
        html.contains("Current exam: Term 1 (Form 4)"),
        "missing selection in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_reports_missing_exam_provider() {
    let mut harness = HarnessBuilder::new(ViewKind::Home)
        .without_exam_provider()
        .build()
        .await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("ExamContext must be used within its provider"),
        "missing provider error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn exam_selector_shows_placeholder_while_loading() {
    let mut harness = HarnessBuilder::new(ViewKind::Exams)
        .list_mode(ListMode::Pending)
        .build()
        .await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Loading exams..."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_selector_lists_exams_in_backend_order() {
    let mut harness = HarnessBuilder::new(ViewKind::Exams)
        .exams(vec![draft("t2", "Term 2"), draft("t1", "Term 1")])
        .build()
        .await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    let second = html.find("Term 2 (Form 4)").expect("term 2 option");
    let first = html.find("Term 1 (Form 4)").expect("term 1 option");
    assert!(second < first, "order not preserved in {html}");
    assert!(html.contains("Select an exam"), "missing prompt in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_selector_failure_renders_error_notice() {
    let mut harness = HarnessBuilder::new(ViewKind::Exams)
        .list_mode(ListMode::Failing)
        .build()
        .await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("notice--error"), "missing error class in {html}");
    assert!(
        html.contains("Failed to load exams"),
        "missing error message in {html}"
    );
    assert!(harness.services.exam_selector().exams().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn process_view_without_selection_shows_guard() {
    let mut harness = HarnessBuilder::new(ViewKind::Process).build().await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Please select an exam first."),
        "missing guard in {html}"
    );
    assert!(!html.contains("process-output"), "unexpected output in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn process_view_shows_selected_exam() {
    let mut harness = HarnessBuilder::new(ViewKind::Process)
        .selected(exam("t1", "Term 1"))
        .build()
        .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Exam: Term 1 (Form 4)"), "missing exam in {html}");
    assert!(
        !html.contains("Please select an exam first."),
        "unexpected guard in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn process_view_stays_disabled_while_earlier_run_is_in_flight() {
    let mut harness = HarnessBuilder::new(ViewKind::Process)
        .selected(exam("t1", "Term 1"))
        .hold_processing()
        .build()
        .await;
    let trigger = harness.services.processing();
    let in_flight = tokio::spawn(async move { trigger.run().await });
    tokio::task::yield_now().await;
    assert!(harness.services.processing().is_busy());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Processing..."), "missing busy label in {html}");
    assert!(html.contains("disabled"), "button not disabled in {html}");
    in_flight.abort();
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_form() {
    let mut harness = HarnessBuilder::new(ViewKind::Login).build().await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing title in {html}");
    assert!(html.contains("password"), "missing password field in {html}");
}
