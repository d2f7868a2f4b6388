//! Input sources feeding the scan intake.
//!
//! - `camera.rs` - decoded frames and the authorization signal
//! - `fixture.rs` - built-in debug invoices
//! - `prompt.rs` - lightning-address prompt contract
//!
//! The clipboard adapter lives in [`crate::clipboard`].

mod camera;
mod fixture;
mod prompt;

pub use camera::CameraFeed;
pub use fixture::{debug_invoice, MAINNET_DEBUG_INVOICE, TESTNET_DEBUG_INVOICE};
pub use prompt::{AddressPrompt, PromptOutcome};
