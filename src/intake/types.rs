use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Where a code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Camera,
    Clipboard,
    Debug,
    AddressLookup,
}

impl InputSource {
    /// Prefix the classifier puts in front of its error messages.
    pub fn error_label(&self) -> &'static str {
        match self {
            InputSource::Camera => "QR scan error",
            InputSource::Clipboard => "Clipboard paste error",
            InputSource::Debug => "Debug clipboard paste error",
            InputSource::AddressLookup => "Lightning address error",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Camera => "camera",
            InputSource::Clipboard => "clipboard",
            InputSource::Debug => "debug",
            InputSource::AddressLookup => "address_lookup",
        }
    }
}

/// A code as delivered by an input source. Consumed once by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCode {
    pub payload: String,
    pub source: InputSource,
    pub error_label: String,
}

impl RawCode {
    pub fn new(payload: impl Into<String>, source: InputSource) -> Self {
        Self {
            payload: payload.into(),
            source,
            error_label: source.error_label().to_string(),
        }
    }
}

/// Commands processed by the session loop.
#[derive(Debug)]
pub enum IntakeCommand {
    /// Try to classify a code.
    Submit(RawCode),
    /// The lightning-address shortcut was pressed.
    AddressLookup,
    /// Flip between front and back camera.
    ToggleOrientation,
    /// The camera reported missing permission.
    CameraNotAuthorized,
    /// Re-open intake after a classification failure.
    Reenable,
}

#[derive(Debug, Error)]
pub enum IntakeError {
    /// The session is gone (screen unmounted or terminal).
    #[error("Scan intake closed")]
    Closed,

    /// Intake is full; the command was dropped.
    #[error("Scan intake busy")]
    Busy,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
