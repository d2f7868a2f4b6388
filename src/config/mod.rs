//! Configuration for the scan screen.
//!
//! Loaded from `~/.config/sendcam/config.toml` (or the platform equivalent).
//! A missing file yields defaults.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, Network, NotificationConfig, ScanConfig};
