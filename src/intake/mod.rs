//! Single-consumer intake channel for the scan session.
//!
//! Every trigger on the screen (camera frames, paste button, debug button,
//! address shortcut, camera flip) is an independent producer holding an
//! [`IntakeHandle`]. The session task owns the only [`IntakeReceiver`] and
//! processes commands one at a time.

mod client;
mod types;


pub use client::IntakeHandle;
pub use types::{InputSource, IntakeCommand, IntakeError, RawCode};

use tokio::sync::mpsc;

pub struct IntakeLayer;

impl IntakeLayer {
    pub fn new(buffer: usize) -> (IntakeHandle, IntakeReceiver) {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        (IntakeHandle::new(sender), IntakeReceiver::new(receiver))
    }
}

pub struct IntakeReceiver {
    receiver: mpsc::Receiver<IntakeCommand>,
}

impl IntakeReceiver {
    pub fn new(receiver: mpsc::Receiver<IntakeCommand>) -> Self {
        Self { receiver }
    }

    /// Next command, or `None` once every handle has been dropped.
    pub async fn recv(&mut self) -> Option<IntakeCommand> {
        self.receiver.recv().await
    }
}
