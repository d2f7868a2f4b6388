//! Wallet backend readiness.
//!
//! The scan screen only accepts codes once the Lightning backend can answer
//! RPC calls. Readiness is passed into the session explicitly so tests can
//! flip it without touching process-wide state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "backend ready" flag.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone)]
pub struct BackendReadiness {
    ready: Arc<AtomicBool>,
}

impl BackendReadiness {
    pub fn new(ready: bool) -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(ready)),
        }
    }

    pub fn ready() -> Self {
        Self::new(true)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn set_ready(&self, ready: bool) {
        if self.ready.swap(ready, Ordering::SeqCst) != ready {
            tracing::debug!(ready, "Backend readiness changed");
        }
    }
}

impl Default for BackendReadiness {
    fn default() -> Self {
        Self::new(false)
    }
}
