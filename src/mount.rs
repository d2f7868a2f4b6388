//! Screen mount lifetime.
//!
//! A [`MountGuard`] lives as long as the scan screen is mounted. Dropping it
//! (or calling [`MountGuard::unmount`]) wakes every [`MountHandle::wait`] so
//! the session loop can stop and drop any pending classification.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct MountGuard {
    unmounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            unmounted: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Tear the screen down.
    pub fn unmount(&self) {
        if !self.unmounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Scan screen unmounted");
            self.notify.notify_waiters();
        }
    }

    /// Create a handle for the session task.
    pub fn handle(&self) -> MountHandle {
        MountHandle {
            unmounted: Arc::clone(&self.unmounted),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Lightweight handle for observing the mount lifetime.
#[derive(Clone)]
pub struct MountHandle {
    unmounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl MountHandle {
    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }

    /// Resolves once the screen is unmounted.
    pub async fn wait(&self) {
        // Register with Notify before reading the flag, otherwise an unmount
        // between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_unmounted() {
            return;
        }
        notified.await;
    }
}
