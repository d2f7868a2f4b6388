use serde::{Deserialize, Serialize};

use crate::notify::DEFAULT_NOTIFICATION_MS;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Ledger the wallet is connected to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

/// Scan intake settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Network used to pick the debug fixture (default: mainnet).
    #[serde(default)]
    pub network: Network,
    /// Upper bound on a single classification in milliseconds (default: 15000).
    #[serde(default = "default_classify_timeout_ms")]
    pub classify_timeout_ms: u64,
    /// Capacity of the intake channel (default: 16).
    #[serde(default = "default_intake_buffer")]
    pub intake_buffer: usize,
    /// Accept the built-in debug invoice as an input source (default: false).
    #[serde(default)]
    pub debug_fixture: bool,
}

/// Error surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long an error notification stays visible (default: 13000).
    #[serde(default = "default_notification_ms")]
    pub duration_ms: u64,
}

fn default_classify_timeout_ms() -> u64 {
    15_000
}

fn default_intake_buffer() -> usize {
    16
}

fn default_notification_ms() -> u64 {
    DEFAULT_NOTIFICATION_MS
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            classify_timeout_ms: default_classify_timeout_ms(),
            intake_buffer: default_intake_buffer(),
            debug_fixture: false,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_notification_ms(),
        }
    }
}
