//! Translation of input codes to HID usage IDs.
//!
//! Both tables are total: every input has an answer, and inputs without a
//! key come back as "no mapping" rather than an error.
//!
//! - [`from_keysym`] maps X11 keysyms (layout independent) to a
//!   [`KeyCode`], or `None`.
//! - [`from_ascii`] maps a raw character to the key plus the modifiers a
//!   US layout needs to type it.

mod ascii;
mod keysym;

pub use ascii::from_ascii;
pub use keysym::from_keysym;

pub use crate::hid::KeyCode;
