pub mod mvi;
pub mod scan;
mod session;

pub use session::{ScanSession, SessionDeps, SessionOutcome, SessionSettings};
