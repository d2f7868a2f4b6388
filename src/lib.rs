//! Payment-code scan intake for a Lightning wallet "send" screen.
//!
//! A code arrives from the camera, the clipboard, a debug fixture or the
//! lightning-address shortcut. [`ui::ScanSession`] accepts one code at a time,
//! asks a [`classify::CodeClassifier`] what it is, and either routes to the
//! next screen through a [`navigation::NavigationRouter`] or resumes scanning.

pub mod backend;
pub mod classify;
pub mod clipboard;
pub mod config;
pub mod console;
pub mod error;
pub mod intake;
pub mod logging;
pub mod mount;
pub mod navigation;
pub mod notify;
pub mod sources;
pub mod ui;
