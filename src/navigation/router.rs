use super::target::NavigationTarget;

/// Screen navigation capability.
///
/// Both calls are fire-and-forget: the scan session never waits on the router.
pub trait NavigationRouter: Send + Sync {
    /// Move to `target`, replacing the current screen when `target.replace` is set.
    fn dispatch(&self, target: NavigationTarget);

    /// Leave the current screen.
    fn go_back(&self);
}
