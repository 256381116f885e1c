//! zerohid: drive a Linux USB HID gadget from a text stream.
//!
//! Key presses, releases and mouse samples arrive one per line on stdin and
//! are turned into boot-protocol reports for the gadget's keyboard and
//! mouse endpoints (`/dev/hidgN`). An empty line switches to typing raw
//! characters instead.
//!
//! The binary in `main.rs` only parses the command line, opens the devices
//! and sets up the terminal; everything here runs on the host without a
//! gadget attached.

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod hid;
pub mod input;
pub mod keymap;
pub mod terminal;
pub mod writer;

pub use dispatch::{Dispatcher, Mode};
pub use error::{Error, InvalidEvent, Result};
pub use event::Event;
pub use hid::{HidReport, KeyCode, KeyboardReport, KeyboardState, Modifiers, MouseReport};
pub use input::InputReader;
pub use writer::{open_device, ReliableWriter};
