//! Camera adapter boundary.
//!
//! The platform camera calls [`CameraFeed::on_decoded`] for every decoded
//! frame and [`CameraFeed::on_not_authorized`] when permission is missing.
//! The feed follows the session state so an inactive camera stops producing
//! frames.

use tokio::sync::watch;

use crate::intake::{IntakeError, IntakeHandle};
use crate::ui::scan::ScanState;

pub struct CameraFeed {
    intake: IntakeHandle,
    state: watch::Receiver<ScanState>,
}

impl CameraFeed {
    pub fn new(intake: IntakeHandle, state: watch::Receiver<ScanState>) -> Self {
        Self { intake, state }
    }

    /// Whether the session currently wants frames.
    pub fn is_active(&self) -> bool {
        self.state.borrow().camera_active
    }

    /// Forward a decoded frame.
    ///
    /// Returns `Ok(false)` when the frame was skipped because the camera is
    /// inactive or the intake is saturated.
    pub fn on_decoded(&self, payload: &str) -> Result<bool, IntakeError> {
        if !self.is_active() {
            return Ok(false);
        }
        match self.intake.camera_frame(payload) {
            Ok(()) => Ok(true),
            Err(IntakeError::Busy) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn on_not_authorized(&self) -> Result<(), IntakeError> {
        self.intake.camera_not_authorized().await
    }
}
