//! Shared test doubles for the scan session.

#![allow(dead_code, unused_imports)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{watch, Notify};

use sendcam::classify::{Classification, ClassificationError, ClassifyOutcome, CodeClassifier};
use sendcam::navigation::{NavigationRouter, NavigationTarget};
use sendcam::notify::{Alert, Notification, NotificationSink};
use sendcam::sources::{AddressPrompt, PromptOutcome};
use sendcam::ui::scan::ScanState;
use sendcam::ui::{ScanSession, SessionDeps, SessionSettings};

/// Classifier answering from a fixed table. Unknown payloads are "not a code".
#[derive(Default)]
pub struct ScriptedClassifier {
    responses: HashMap<String, ClassifyOutcome>,
    calls: Mutex<Vec<(String, String)>>,
    release: Option<Arc<Notify>>,
    delay: Option<Duration>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, payload: &str, classification: Classification) -> Self {
        self.responses
            .insert(payload.to_string(), Ok(Some(classification)));
        self
    }

    pub fn fail(mut self, payload: &str, message: &str) -> Self {
        self.responses
            .insert(payload.to_string(), Err(ClassificationError::new(message)));
        self
    }

    /// Hold every answer until the returned `Notify` is signalled.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        self.release = Some(Arc::clone(&release));
        (self, release)
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(raw, _)| raw.clone()).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|(_, label)| label.clone())
            .collect()
    }
}

#[async_trait]
impl CodeClassifier for ScriptedClassifier {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn classify(&self, raw: &str, label: &str) -> ClassifyOutcome {
        self.calls.lock().push((raw.to_string(), label.to_string()));
        if let Some(release) = &self.release {
            release.notified().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses.get(raw).cloned().unwrap_or(Ok(None))
    }
}

#[derive(Default)]
pub struct RecordingRouter {
    dispatched: Mutex<Vec<NavigationTarget>>,
    backs: Mutex<usize>,
}

impl RecordingRouter {
    pub fn dispatched(&self) -> Vec<NavigationTarget> {
        self.dispatched.lock().clone()
    }

    pub fn back_count(&self) -> usize {
        *self.backs.lock()
    }
}

impl NavigationRouter for RecordingRouter {
    fn dispatch(&self, target: NavigationTarget) {
        self.dispatched.lock().push(target);
    }

    fn go_back(&self) {
        *self.backs.lock() += 1;
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }

    fn alert(&self, alert: Alert) {
        self.alerts.lock().push(alert);
    }
}

/// Prompt that returns a fixed outcome, optionally after being released.
pub struct ScriptedPrompt {
    outcome: PromptOutcome,
    release: Option<Arc<Notify>>,
    calls: Mutex<usize>,
}

impl ScriptedPrompt {
    pub fn new(outcome: PromptOutcome) -> Self {
        Self {
            outcome,
            release: None,
            calls: Mutex::new(0),
        }
    }

    pub fn gated(outcome: PromptOutcome) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        let prompt = Self {
            outcome,
            release: Some(Arc::clone(&release)),
            calls: Mutex::new(0),
        };
        (prompt, release)
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl AddressPrompt for ScriptedPrompt {
    async fn prompt(&self) -> PromptOutcome {
        *self.calls.lock() += 1;
        if let Some(release) = &self.release {
            release.notified().await;
        }
        self.outcome
    }
}

/// A session wired to recording doubles.
pub struct Harness {
    pub session: ScanSession,
    pub classifier: Arc<ScriptedClassifier>,
    pub router: Arc<RecordingRouter>,
    pub notifier: Arc<RecordingNotifier>,
    pub prompt: Arc<ScriptedPrompt>,
}

pub fn harness(classifier: ScriptedClassifier) -> Harness {
    harness_with(
        classifier,
        ScriptedPrompt::new(PromptOutcome::Cancelled),
        SessionSettings::default(),
    )
}

pub fn harness_with(
    classifier: ScriptedClassifier,
    prompt: ScriptedPrompt,
    settings: SessionSettings,
) -> Harness {
    let classifier = Arc::new(classifier);
    let router = Arc::new(RecordingRouter::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let prompt = Arc::new(prompt);
    let deps = SessionDeps {
        classifier: classifier.clone(),
        router: router.clone(),
        notifier: notifier.clone(),
        prompt: prompt.clone(),
    };
    Harness {
        session: ScanSession::new(deps, settings),
        classifier,
        router,
        notifier,
        prompt,
    }
}

/// Wait (bounded) until the published state satisfies `predicate`.
pub async fn wait_for_state(
    rx: &mut watch::Receiver<ScanState>,
    predicate: impl FnMut(&ScanState) -> bool,
) -> ScanState {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(predicate))
        .await
        .expect("state change in time")
        .expect("session alive")
        .clone()
}
