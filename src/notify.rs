//! User-facing error surface: transient notifications and blocking alerts.

use serde::Serialize;

/// How long a classification error stays on screen.
pub const DEFAULT_NOTIFICATION_MS: u64 = 13_000;

pub const CAMERA_DENIED_TITLE: &str = "Not authorized.";
pub const CAMERA_DENIED_MESSAGE: &str = "Camera access was not granted.\n\
Blixt Wallet needs access to the camera in order to be able to scan QR-codes.";

/// Notification colour. Classification failures are the only notifications
/// this screen raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
}

/// Transient notification ("toast").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub duration_ms: u64,
    pub severity: Severity,
}

impl Notification {
    pub fn danger(message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            duration_ms,
            severity: Severity::Danger,
        }
    }
}

/// Blocking alert with a title and a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn camera_not_authorized() -> Self {
        Self {
            title: CAMERA_DENIED_TITLE.to_string(),
            message: CAMERA_DENIED_MESSAGE.to_string(),
        }
    }
}

/// Where notifications and alerts are shown.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
    fn alert(&self, alert: Alert);
}
