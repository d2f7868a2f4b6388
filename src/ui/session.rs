//! Scan session: gate, classify, route.
//!
//! The session owns the [`ScanState`] for one mount of the send camera
//! screen. It is driven either directly ([`ScanSession::submit`],
//! [`ScanSession::address_lookup`]) or by [`ScanSession::run`], which consumes
//! the intake channel on a single task.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_core::future::BoxFuture;
use tokio::sync::watch;
use uuid::Uuid;

use crate::backend::BackendReadiness;
use crate::classify::{ClassificationError, ClassifyOutcome, CodeClassifier};
use crate::config::Config;
use crate::intake::{IntakeCommand, IntakeReceiver, RawCode};
use crate::mount::MountHandle;
use crate::navigation::{NavigationRouter, NavigationTarget};
use crate::notify::{Alert, Notification, NotificationSink, DEFAULT_NOTIFICATION_MS};
use crate::sources::{AddressPrompt, PromptOutcome};
use crate::ui::mvi::Reducer;
use crate::ui::scan::{ScanIntent, ScanPhase, ScanReducer, ScanState};

/// External capabilities the session drives.
#[derive(Clone)]
pub struct SessionDeps {
    pub classifier: Arc<dyn CodeClassifier>,
    pub router: Arc<dyn NavigationRouter>,
    pub notifier: Arc<dyn NotificationSink>,
    pub prompt: Arc<dyn AddressPrompt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Upper bound on one classifier call; expiry counts as a failure.
    pub classify_timeout: Duration,
    pub notification_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            classify_timeout: Duration::from_secs(15),
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            classify_timeout: Duration::from_millis(config.scan.classify_timeout_ms),
            notification_ms: config.notifications.duration_ms,
        }
    }
}

/// Why a session stopped taking input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Navigation happened.
    Dispatched(NavigationTarget),
    /// Camera permission was denied and the screen was left.
    Closed,
    /// The screen went away first; pending work was discarded.
    Unmounted,
}

/// The single in-flight suspension of the session loop.
enum Pending {
    Classify(BoxFuture<'static, ClassifyOutcome>),
    Prompt(BoxFuture<'static, PromptOutcome>),
}

enum Completed {
    Classified(ClassifyOutcome),
    Prompted(PromptOutcome),
}

impl Future for Pending {
    type Output = Completed;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.get_mut() {
            Pending::Classify(fut) => fut.as_mut().poll(cx).map(Completed::Classified),
            Pending::Prompt(fut) => fut.as_mut().poll(cx).map(Completed::Prompted),
        }
    }
}

pub struct ScanSession {
    mount_id: Uuid,
    state: ScanState,
    deps: SessionDeps,
    settings: SessionSettings,
    state_tx: watch::Sender<ScanState>,
}

impl ScanSession {
    pub fn new(deps: SessionDeps, settings: SessionSettings) -> Self {
        let state = ScanState::default();
        let (state_tx, _) = watch::channel(state.clone());
        let mount_id = Uuid::new_v4();
        tracing::debug!(
            mount = %mount_id,
            classifier = deps.classifier.name(),
            timeout_ms = settings.classify_timeout.as_millis() as u64,
            "Scan session mounted"
        );
        Self {
            mount_id,
            state,
            deps,
            settings,
            state_tx,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Observe state changes (camera active flag, orientation).
    pub fn subscribe(&self) -> watch::Receiver<ScanState> {
        self.state_tx.subscribe()
    }

    /// Flip front/back camera. Never touches the gate.
    pub fn toggle_orientation(&mut self) {
        self.apply(ScanIntent::ToggleOrientation);
    }

    /// Re-open intake after a classification failure.
    pub fn reenable(&mut self) {
        self.apply(ScanIntent::Reenable);
    }

    /// Gate, classify and route one code.
    ///
    /// Returns `Some` when the session became terminal.
    pub async fn submit(
        &mut self,
        code: RawCode,
        readiness: &BackendReadiness,
    ) -> Option<SessionOutcome> {
        let pending = self.begin_submit(code, readiness)?;
        let outcome = pending.await;
        self.finish_submit(outcome)
    }

    /// Run the lightning-address shortcut.
    ///
    /// Returns `Some` when the prompt resolved and navigation happened.
    pub async fn address_lookup(&mut self) -> Option<SessionOutcome> {
        let pending = self.begin_address_lookup()?;
        let outcome = pending.await;
        self.finish_address_lookup(outcome)
    }

    /// Camera permission was denied: alert, yield one tick, go back.
    pub async fn camera_not_authorized(&mut self) -> SessionOutcome {
        tracing::warn!(mount = %self.mount_id, "Camera not authorized");
        self.deps.notifier.alert(Alert::camera_not_authorized());
        self.apply(ScanIntent::Deny);
        // Let the alert settle before the screen is popped.
        tokio::task::yield_now().await;
        self.deps.router.go_back();
        SessionOutcome::Closed
    }

    /// Consume the intake until the session is terminal or the screen goes away.
    ///
    /// Once every intake handle is dropped the loop finishes the request in
    /// flight, if any, and returns [`SessionOutcome::Unmounted`] unless that
    /// request dispatched.
    pub async fn run(
        mut self,
        mut intake: IntakeReceiver,
        readiness: BackendReadiness,
        mount: MountHandle,
    ) -> SessionOutcome {
        let mut pending: Option<Pending> = None;
        let mut intake_open = true;

        loop {
            tokio::select! {
                biased;

                _ = mount.wait() => {
                    if pending.is_some() {
                        tracing::debug!(mount = %self.mount_id, "Discarding pending work on unmount");
                    }
                    return SessionOutcome::Unmounted;
                }

                completed = async { match pending.as_mut() {
                    Some(fut) => fut.await,
                    None => std::future::pending().await,
                } }, if pending.is_some() => {
                    pending = None;
                    let terminal = match completed {
                        Completed::Classified(outcome) => self.finish_submit(outcome),
                        Completed::Prompted(outcome) => self.finish_address_lookup(outcome),
                    };
                    if let Some(outcome) = terminal {
                        return outcome;
                    }
                    if !intake_open {
                        return SessionOutcome::Unmounted;
                    }
                }

                command = intake.recv(), if intake_open => {
                    let Some(command) = command else {
                        tracing::debug!(mount = %self.mount_id, "All intake handles dropped");
                        if pending.is_none() {
                            return SessionOutcome::Unmounted;
                        }
                        // Let the in-flight request settle first.
                        intake_open = false;
                        continue;
                    };
                    match command {
                        IntakeCommand::Submit(code) => {
                            if pending.is_some() {
                                tracing::trace!(source = code.source.as_str(), "Dropped code while busy");
                            } else if let Some(fut) = self.begin_submit(code, &readiness) {
                                pending = Some(Pending::Classify(fut));
                            }
                        }
                        IntakeCommand::AddressLookup => {
                            if pending.is_some() {
                                tracing::debug!(mount = %self.mount_id, "Address lookup ignored while busy");
                            } else if let Some(fut) = self.begin_address_lookup() {
                                pending = Some(Pending::Prompt(fut));
                            }
                        }
                        IntakeCommand::ToggleOrientation => self.toggle_orientation(),
                        IntakeCommand::Reenable => self.reenable(),
                        IntakeCommand::CameraNotAuthorized => {
                            return self.camera_not_authorized().await;
                        }
                    }
                }
            }
        }
    }

    /// Gate check and latch. The returned future is the only suspension.
    ///
    /// The flags are closed here, synchronously, before the classifier is
    /// called; every submission evaluated after this point sees a closed gate.
    fn begin_submit(
        &mut self,
        code: RawCode,
        readiness: &BackendReadiness,
    ) -> Option<BoxFuture<'static, ClassifyOutcome>> {
        if !readiness.is_ready() || !self.state.accepts_codes() {
            tracing::trace!(
                source = code.source.as_str(),
                ready = readiness.is_ready(),
                camera_active = self.state.camera_active,
                scanning_enabled = self.state.scanning_enabled,
                "Dropped code at gate"
            );
            return None;
        }

        self.apply(ScanIntent::Accept);
        tracing::debug!(
            mount = %self.mount_id,
            source = code.source.as_str(),
            len = code.payload.len(),
            "Accepted code"
        );

        let classifier = Arc::clone(&self.deps.classifier);
        let limit = self.settings.classify_timeout;
        Some(Box::pin(async move {
            match tokio::time::timeout(limit, classifier.classify(&code.payload, &code.error_label))
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(ClassificationError::timed_out(&code.error_label, limit)),
            }
        }))
    }

    fn finish_submit(&mut self, outcome: ClassifyOutcome) -> Option<SessionOutcome> {
        if self.state.phase != ScanPhase::Processing {
            tracing::debug!(mount = %self.mount_id, phase = ?self.state.phase, "Discarding stale classification");
            return None;
        }

        match outcome {
            Ok(Some(classification)) => {
                let target = NavigationTarget::for_classification(classification);
                tracing::debug!(
                    mount = %self.mount_id,
                    classification = %classification,
                    target = %target,
                    "Dispatching classified code"
                );
                Some(self.navigate(target))
            }
            Ok(None) => {
                tracing::debug!(mount = %self.mount_id, "Not a payment code, resuming");
                self.apply(ScanIntent::Resume);
                None
            }
            Err(err) => {
                tracing::warn!(mount = %self.mount_id, error = %err, "Classification failed");
                self.deps
                    .notifier
                    .notify(Notification::danger(err.message(), self.settings.notification_ms));
                self.apply(ScanIntent::Fail);
                None
            }
        }
    }

    fn begin_address_lookup(&mut self) -> Option<BoxFuture<'static, PromptOutcome>> {
        if !matches!(self.state.phase, ScanPhase::Idle | ScanPhase::Stalled) {
            tracing::debug!(mount = %self.mount_id, phase = ?self.state.phase, "Address lookup ignored");
            return None;
        }

        self.apply(ScanIntent::BeginPrompt);
        tracing::debug!(mount = %self.mount_id, "Address prompt opened");

        let prompt = Arc::clone(&self.deps.prompt);
        Some(Box::pin(async move { prompt.prompt().await }))
    }

    fn finish_address_lookup(&mut self, outcome: PromptOutcome) -> Option<SessionOutcome> {
        if self.state.phase != ScanPhase::Prompting {
            return None;
        }

        match outcome {
            PromptOutcome::Resolved => Some(self.navigate(NavigationTarget::address_lookup())),
            PromptOutcome::Cancelled => {
                tracing::debug!(mount = %self.mount_id, "Address prompt cancelled");
                self.apply(ScanIntent::CancelPrompt);
                None
            }
        }
    }

    fn navigate(&mut self, target: NavigationTarget) -> SessionOutcome {
        self.deps.router.dispatch(target.clone());
        self.apply(ScanIntent::Dispatch);
        SessionOutcome::Dispatched(target)
    }

    fn apply(&mut self, intent: ScanIntent) {
        self.state = ScanReducer::reduce(std::mem::take(&mut self.state), intent);
        self.state_tx.send_if_modified(|published| {
            if *published == self.state {
                false
            } else {
                *published = self.state.clone();
                true
            }
        });
    }
}
