//! HID report types written to the gadget endpoints.

pub mod keyboard;
pub mod mouse;
pub mod usage;


pub use keyboard::{KeyCode, KeyboardReport, KeyboardState, Modifiers, PressOutcome};
pub use mouse::MouseReport;

/// Largest report any endpoint takes.
pub const MAX_REPORT_SIZE: usize = keyboard::KEYBOARD_REPORT_SIZE;

/// A report bound for one of the two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidReport {
    Keyboard(KeyboardReport),
    Mouse(MouseReport),
}

impl HidReport {
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        match self {
            HidReport::Keyboard(k) => k.serialize(buf),
            HidReport::Mouse(m) => m.serialize(buf),
        }
    }
}

impl From<KeyboardReport> for HidReport {
    fn from(report: KeyboardReport) -> Self {
        HidReport::Keyboard(report)
    }
}

impl From<MouseReport> for HidReport {
    fn from(report: MouseReport) -> Self {
        HidReport::Mouse(report)
    }
}
