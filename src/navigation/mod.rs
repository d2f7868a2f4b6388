//! Navigation contract used by the scan screen.
//!
//! The router itself lives outside this crate; only the targets and the
//! [`NavigationRouter`] trait are defined here.

mod router;
mod target;

pub use router::NavigationRouter;
pub use target::{NavigationTarget, LNURL_GROUP, SEND_GROUP};
