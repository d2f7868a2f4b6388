use tokio::sync::mpsc::{self, error::TrySendError};

use crate::clipboard::ClipboardSource;
use crate::config::ScanConfig;
use crate::sources::debug_invoice;

use super::types::{InputSource, IntakeCommand, IntakeError, RawCode};

/// Producer side of the intake. Cheap to clone, one per trigger.
#[derive(Clone)]
pub struct IntakeHandle {
    sender: mpsc::Sender<IntakeCommand>,
}

impl IntakeHandle {
    pub fn new(sender: mpsc::Sender<IntakeCommand>) -> Self {
        Self { sender }
    }

    pub async fn submit(&self, code: RawCode) -> Result<(), IntakeError> {
        self.send(IntakeCommand::Submit(code)).await
    }

    /// Offer a decoded camera frame without waiting.
    ///
    /// Frames arrive continuously, so a full intake drops the frame instead of
    /// queueing it.
    pub fn camera_frame(&self, payload: impl Into<String>) -> Result<(), IntakeError> {
        let code = RawCode::new(payload, InputSource::Camera);
        match self.sender.try_send(IntakeCommand::Submit(code)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(IntakeError::Busy),
            Err(TrySendError::Closed(_)) => Err(IntakeError::Closed),
        }
    }

    /// Read the clipboard once and submit its text.
    pub async fn paste(&self, clipboard: &dyn ClipboardSource) -> Result<(), IntakeError> {
        let text = clipboard.read_text().await?;
        self.submit(RawCode::new(text, InputSource::Clipboard)).await
    }

    /// Submit the built-in invoice for the configured network.
    ///
    /// The debug button only exists when `scan.debug_fixture` is enabled;
    /// otherwise nothing is sent and `Ok(false)` is returned.
    pub async fn debug_fixture(&self, scan: &ScanConfig) -> Result<bool, IntakeError> {
        if !scan.debug_fixture {
            tracing::debug!("Debug fixture disabled, nothing submitted");
            return Ok(false);
        }
        self.submit(RawCode::new(debug_invoice(scan.network), InputSource::Debug))
            .await?;
        Ok(true)
    }

    pub async fn address_lookup(&self) -> Result<(), IntakeError> {
        self.send(IntakeCommand::AddressLookup).await
    }

    pub async fn toggle_orientation(&self) -> Result<(), IntakeError> {
        self.send(IntakeCommand::ToggleOrientation).await
    }

    pub async fn camera_not_authorized(&self) -> Result<(), IntakeError> {
        self.send(IntakeCommand::CameraNotAuthorized).await
    }

    pub async fn reenable(&self) -> Result<(), IntakeError> {
        self.send(IntakeCommand::Reenable).await
    }

    async fn send(&self, command: IntakeCommand) -> Result<(), IntakeError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| IntakeError::Closed)
    }
}
