//! Line-oriented console front end for the scan session.
//!
//! Stands in for the camera screen when running the `sendcam` binary: each
//! stdin line is either a decoded camera frame or a `:command` pressing one of
//! the screen's buttons. Navigation, notifications and alerts are printed to
//! stdout as JSON lines.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::{mpsc, Mutex};

use crate::navigation::{NavigationRouter, NavigationTarget};
use crate::notify::{Alert, Notification, NotificationSink};
use crate::sources::{AddressPrompt, PromptOutcome};

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A decoded camera frame.
    Frame(String),
    Paste,
    Debug,
    Address,
    Flip,
    Reenable,
    Deny,
    Ready(bool),
    Quit,
    Unknown(String),
    Empty,
}

pub fn parse_line(line: &str) -> ConsoleCommand {
    let line = line.trim();
    if line.is_empty() {
        return ConsoleCommand::Empty;
    }
    let Some(command) = line.strip_prefix(':') else {
        return ConsoleCommand::Frame(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("paste"), None) => ConsoleCommand::Paste,
        (Some("debug"), None) => ConsoleCommand::Debug,
        (Some("address"), None) => ConsoleCommand::Address,
        (Some("flip"), None) => ConsoleCommand::Flip,
        (Some("reenable"), None) => ConsoleCommand::Reenable,
        (Some("deny"), None) => ConsoleCommand::Deny,
        (Some("ready"), Some("on")) => ConsoleCommand::Ready(true),
        (Some("ready"), Some("off")) => ConsoleCommand::Ready(false),
        (Some("quit"), None) | (Some("q"), None) => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(line.to_string()),
    }
}

/// `name@domain.tld` with no whitespace.
pub fn is_lightning_address(input: &str) -> bool {
    let Some((name, domain)) = input.trim().split_once('@') else {
        return false;
    };
    !name.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !input.trim().contains(char::is_whitespace)
        && !domain.contains('@')
}

/// Router printing every navigation as a JSON line.
#[derive(Debug, Default)]
pub struct ConsoleRouter;

impl NavigationRouter for ConsoleRouter {
    fn dispatch(&self, target: NavigationTarget) {
        println!("{}", json!({ "navigate": target }));
    }

    fn go_back(&self) {
        println!("{}", json!({ "navigate": "back" }));
    }
}

/// Notification sink printing to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("{}", json!({ "toast": notification }));
    }

    fn alert(&self, alert: Alert) {
        println!("{}", json!({ "alert": alert }));
    }
}

/// Address prompt answered by the next stdin line.
///
/// The input loop forwards lines to the sender returned by
/// [`ConsolePrompt::channel`] while the session is prompting. Dropping that
/// sender cancels an open prompt.
pub struct ConsolePrompt {
    answers: Mutex<mpsc::Receiver<String>>,
}

impl ConsolePrompt {
    pub fn channel() -> (Self, mpsc::Sender<String>) {
        let (sender, receiver) = mpsc::channel(1);
        let prompt = Self {
            answers: Mutex::new(receiver),
        };
        (prompt, sender)
    }
}

#[async_trait]
impl AddressPrompt for ConsolePrompt {
    async fn prompt(&self) -> PromptOutcome {
        let mut answers = self.answers.lock().await;
        println!("{}", json!({ "prompt": "lightning address (empty to cancel)" }));

        match answers.recv().await {
            Some(address) if is_lightning_address(&address) => {
                tracing::debug!(address = %address.trim(), "Lightning address entered");
                PromptOutcome::Resolved
            }
            Some(address) if !address.trim().is_empty() => {
                println!("{}", json!({ "prompt": "invalid lightning address" }));
                PromptOutcome::Cancelled
            }
            _ => PromptOutcome::Cancelled,
        }
    }
}
