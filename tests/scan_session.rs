mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{harness, harness_with, ScriptedClassifier, ScriptedPrompt};
use sendcam::backend::BackendReadiness;
use sendcam::classify::{Classification, SchemeClassifier};
use sendcam::intake::{InputSource, RawCode};
use sendcam::navigation::NavigationTarget;
use sendcam::notify::{Notification, Severity};
use sendcam::sources::{PromptOutcome, MAINNET_DEBUG_INVOICE};
use sendcam::ui::scan::{Orientation, ScanPhase, ScanState};
use sendcam::ui::{ScanSession, SessionDeps, SessionOutcome, SessionSettings};

fn camera(payload: &str) -> RawCode {
    RawCode::new(payload, InputSource::Camera)
}

#[tokio::test]
async fn backend_not_ready_never_reaches_classifier() {
    let mut h = harness(ScriptedClassifier::new().answer("lnbc1x", Classification::Bolt11));
    let readiness = BackendReadiness::new(false);

    let outcome = h.session.submit(camera("lnbc1x"), &readiness).await;

    assert!(outcome.is_none());
    assert!(h.classifier.calls().is_empty());
    assert_eq!(h.session.state(), &ScanState::default());
    assert!(h.router.dispatched().is_empty());
}

#[tokio::test]
async fn closed_gate_never_reaches_classifier() {
    let mut h = harness(ScriptedClassifier::new().fail("bad", "boom"));
    let readiness = BackendReadiness::ready();

    h.session.submit(camera("bad"), &readiness).await;
    assert_eq!(h.classifier.calls(), vec!["bad"]);

    for source in [InputSource::Camera, InputSource::Clipboard] {
        h.session
            .submit(RawCode::new("lnbc1x", source), &readiness)
            .await;
    }
    assert_eq!(h.classifier.calls(), vec!["bad"]);
}

#[tokio::test]
async fn bolt11_dispatches_to_send_confirmation() {
    let mut h = harness(ScriptedClassifier::new().answer("lnbc1x", Classification::Bolt11));

    let outcome = h
        .session
        .submit(camera("lnbc1x"), &BackendReadiness::ready())
        .await;

    let expected = NavigationTarget::new("Send", "SendConfirmation", true);
    assert_eq!(outcome, Some(SessionOutcome::Dispatched(expected.clone())));
    assert_eq!(h.router.dispatched(), vec![expected]);
    assert_eq!(h.session.state().phase, ScanPhase::Dispatched);
}

#[tokio::test]
async fn lnurl_auth_dispatches_to_auth_request() {
    let mut h = harness(ScriptedClassifier::new().answer("auth", Classification::LnurlAuth));

    h.session
        .submit(camera("auth"), &BackendReadiness::ready())
        .await;

    assert_eq!(
        h.router.dispatched(),
        vec![NavigationTarget::new("LNURL", "AuthRequest", true)]
    );
}

#[tokio::test]
async fn not_a_code_resumes_scanning() {
    let mut h = harness(ScriptedClassifier::new());
    let readiness = BackendReadiness::ready();

    let outcome = h.session.submit(camera("hello"), &readiness).await;

    assert!(outcome.is_none());
    assert!(h.session.state().camera_active);
    assert!(h.session.state().scanning_enabled);
    assert_eq!(h.session.state().phase, ScanPhase::Idle);

    // Intake is open again.
    h.session.submit(camera("again"), &readiness).await;
    assert_eq!(h.classifier.calls(), vec!["hello", "again"]);
}

#[tokio::test]
async fn classifier_receives_source_label() {
    let mut h = harness(ScriptedClassifier::new());
    let readiness = BackendReadiness::ready();

    h.session.submit(camera("a"), &readiness).await;
    h.session
        .submit(RawCode::new("b", InputSource::Clipboard), &readiness)
        .await;

    assert_eq!(h.classifier.labels(), vec!["QR scan error", "Clipboard paste error"]);
}

#[tokio::test]
async fn debug_fixture_with_scheme_classifier_goes_to_send() {
    let router = Arc::new(common::RecordingRouter::default());
    let deps = SessionDeps {
        classifier: Arc::new(SchemeClassifier::new()),
        router: router.clone(),
        notifier: Arc::new(common::RecordingNotifier::default()),
        prompt: Arc::new(ScriptedPrompt::new(PromptOutcome::Cancelled)),
    };
    let mut session = ScanSession::new(deps, SessionSettings::default());

    let outcome = session
        .submit(
            RawCode::new(MAINNET_DEBUG_INVOICE, InputSource::Debug),
            &BackendReadiness::ready(),
        )
        .await;

    assert!(matches!(
        outcome,
        Some(SessionOutcome::Dispatched(ref target)) if target.screen == "SendConfirmation"
    ));
    assert_eq!(router.dispatched().len(), 1);
    assert_eq!(router.dispatched()[0].group, "Send");
    assert!(!session.state().camera_active);
    assert!(!session.state().scanning_enabled);
}

#[tokio::test]
async fn every_source_passes_the_same_gate() {
    let mut h = harness(ScriptedClassifier::new());
    let readiness = BackendReadiness::ready();

    for source in [InputSource::Camera, InputSource::Clipboard, InputSource::Debug] {
        h.session
            .submit(RawCode::new("text", source), &readiness)
            .await;
    }

    assert_eq!(h.classifier.calls(), vec!["text", "text", "text"]);
    assert_eq!(
        h.classifier.labels(),
        vec!["QR scan error", "Clipboard paste error", "Debug clipboard paste error"]
    );
}

#[tokio::test]
async fn failure_notifies_once_and_stays_closed() {
    let mut h = harness(ScriptedClassifier::new().fail("bad", "boom"));
    let readiness = BackendReadiness::ready();

    let outcome = h.session.submit(camera("bad"), &readiness).await;

    assert!(outcome.is_none());
    assert_eq!(
        h.notifier.notifications(),
        vec![Notification {
            message: "boom".to_string(),
            duration_ms: 13000,
            severity: Severity::Danger,
        }]
    );
    assert!(!h.session.state().camera_active);
    assert!(!h.session.state().scanning_enabled);
    assert_eq!(h.session.state().phase, ScanPhase::Stalled);

    // A retry is dropped at the gate and does not notify again.
    h.session.submit(camera("bad"), &readiness).await;
    assert_eq!(h.notifier.notifications().len(), 1);
    assert!(h.router.dispatched().is_empty());
}

#[tokio::test]
async fn reenable_after_failure_reopens_intake() {
    let mut h = harness(
        ScriptedClassifier::new()
            .fail("bad", "boom")
            .answer("good", Classification::LnurlWithdraw),
    );
    let readiness = BackendReadiness::ready();

    h.session.submit(camera("bad"), &readiness).await;
    h.session.reenable();
    assert!(h.session.state().accepts_codes());

    h.session.submit(camera("good"), &readiness).await;
    assert_eq!(
        h.router.dispatched(),
        vec![NavigationTarget::new("LNURL", "WithdrawRequest", true)]
    );
}

#[tokio::test(start_paused = true)]
async fn slow_classifier_times_out_as_failure() {
    let settings = SessionSettings {
        classify_timeout: Duration::from_millis(100),
        ..SessionSettings::default()
    };
    let mut h = harness_with(
        ScriptedClassifier::new()
            .answer("slow", Classification::Bolt11)
            .delayed(Duration::from_secs(60)),
        ScriptedPrompt::new(PromptOutcome::Cancelled),
        settings,
    );

    let outcome = h
        .session
        .submit(camera("slow"), &BackendReadiness::ready())
        .await;

    assert!(outcome.is_none());
    assert!(h.router.dispatched().is_empty());
    let notifications = h.notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].message,
        "QR scan error: classification timed out after 100ms"
    );
    assert_eq!(h.session.state().phase, ScanPhase::Stalled);
}

#[tokio::test]
async fn address_prompt_cancel_resumes_without_navigation() {
    let mut h = harness_with(
        ScriptedClassifier::new(),
        ScriptedPrompt::new(PromptOutcome::Cancelled),
        SessionSettings::default(),
    );

    let outcome = h.session.address_lookup().await;

    assert!(outcome.is_none());
    assert_eq!(h.prompt.calls(), 1);
    assert!(h.session.state().scanning_enabled);
    assert!(h.session.state().camera_active);
    assert!(h.router.dispatched().is_empty());
    assert!(h.classifier.calls().is_empty());
}

#[tokio::test]
async fn address_prompt_success_pushes_pay_request() {
    let mut h = harness_with(
        ScriptedClassifier::new(),
        ScriptedPrompt::new(PromptOutcome::Resolved),
        SessionSettings::default(),
    );

    let outcome = h.session.address_lookup().await;

    let expected = NavigationTarget::new("LNURL", "PayRequest", false);
    assert_eq!(outcome, Some(SessionOutcome::Dispatched(expected.clone())));
    assert_eq!(h.router.dispatched(), vec![expected]);
    assert!(!h.session.state().scanning_enabled);
    assert_eq!(h.session.state().phase, ScanPhase::Dispatched);
}

#[tokio::test]
async fn nothing_is_accepted_after_dispatch() {
    let mut h = harness(ScriptedClassifier::new().answer("pay", Classification::LnurlPay));
    let readiness = BackendReadiness::ready();

    h.session.submit(camera("pay"), &readiness).await;
    h.session.reenable();
    h.session.submit(camera("pay"), &readiness).await;
    assert!(h.session.address_lookup().await.is_none());

    assert_eq!(h.classifier.calls().len(), 1);
    assert_eq!(h.router.dispatched().len(), 1);
    assert_eq!(h.prompt.calls(), 0);
}

#[tokio::test]
async fn toggle_orientation_never_touches_the_gate() {
    let mut h = harness(ScriptedClassifier::new().fail("bad", "boom"));

    h.session.toggle_orientation();
    assert_eq!(h.session.state().orientation, Orientation::Front);
    assert!(h.session.state().accepts_codes());

    h.session
        .submit(camera("bad"), &BackendReadiness::ready())
        .await;
    h.session.toggle_orientation();
    assert_eq!(h.session.state().orientation, Orientation::Back);
    assert!(!h.session.state().camera_active);
    assert!(!h.session.state().scanning_enabled);
}

#[tokio::test]
async fn camera_not_authorized_alerts_and_goes_back() {
    let mut h = harness(ScriptedClassifier::new());

    let outcome = h.session.camera_not_authorized().await;

    assert_eq!(outcome, SessionOutcome::Closed);
    let alerts = h.notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "Not authorized.");
    assert_eq!(h.router.back_count(), 1);
    assert_eq!(h.session.state().phase, ScanPhase::Closed);
}

#[tokio::test]
async fn state_changes_are_published() {
    let mut h = harness(ScriptedClassifier::new());
    let rx = h.session.subscribe();

    h.session.toggle_orientation();

    assert_eq!(rx.borrow().orientation, Orientation::Front);
}
